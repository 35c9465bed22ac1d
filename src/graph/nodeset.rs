//! A compact set of node handles.
//!
//! [`NodeSet`] stores membership as one bit per [`NodeId`] index, 64 handles to
//! a word. It is sized from the arena up front and grows on demand when a
//! handle beyond the current capacity is inserted, so fabricated handles never
//! cause a panic.

use std::fmt;

use crate::graph::NodeId;

const WORD_BITS: usize = 64;

/// A growable bit set keyed by [`NodeId`].
#[derive(Clone, Default, PartialEq, Eq)]
pub struct NodeSet {
    words: Vec<u64>,
    count: usize,
}

impl NodeSet {
    /// Creates an empty set with room for handles `0..capacity` without growing.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        NodeSet {
            words: vec![0; capacity.div_ceil(WORD_BITS)],
            count: 0,
        }
    }

    /// Adds `node` to the set.
    ///
    /// # Returns
    ///
    /// `true` if `node` was not already a member.
    pub fn insert(&mut self, node: NodeId) -> bool {
        let (word, mask) = Self::locate(node);
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }

        let slot = &mut self.words[word];
        if *slot & mask != 0 {
            return false;
        }
        *slot |= mask;
        self.count += 1;
        true
    }

    /// Returns `true` if `node` is a member.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        let (word, mask) = Self::locate(node);
        self.words.get(word).is_some_and(|bits| bits & mask != 0)
    }

    /// Returns the number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if the set has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns an iterator over the members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.words.iter().enumerate().flat_map(|(word_idx, &bits)| {
            (0..WORD_BITS)
                .filter(move |bit| bits & (1u64 << bit) != 0)
                .map(move |bit| NodeId::new(word_idx * WORD_BITS + bit))
        })
    }

    fn locate(node: NodeId) -> (usize, u64) {
        let index = node.index();
        (index / WORD_BITS, 1u64 << (index % WORD_BITS))
    }
}

impl fmt::Debug for NodeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
