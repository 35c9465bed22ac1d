//! Min-priority queue of tentative distances.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::{NodeId, Weight};

#[derive(Debug, PartialEq, Eq)]
struct QueueEntry {
    distance: Weight,
    node: NodeId,
    /// Sequence number for FIFO ordering within the same distance.
    sequence: u64,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: smaller distance first, then earlier sequence
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Queue of `(node, tentative distance)` pairs, popped smallest distance first.
///
/// There is no decrease-key and no deduplication: the same node may be queued
/// any number of times with different distances, and every entry is popped.
#[derive(Debug, Default)]
pub(crate) struct MinQueue {
    heap: BinaryHeap<QueueEntry>,
    next_sequence: u64,
}

impl MinQueue {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, node: NodeId, distance: Weight) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(QueueEntry {
            distance,
            node,
            sequence,
        });
    }

    pub(crate) fn pop(&mut self) -> Option<(NodeId, Weight)> {
        self.heap.pop().map(|entry| (entry.node, entry.distance))
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
