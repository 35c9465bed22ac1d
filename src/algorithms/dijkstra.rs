//! Single-source shortest paths for non-negative edge weights.
//!
//! The search keeps a min-priority queue of tentative distances without
//! decrease-key. Every relaxation that targets an unvisited node pushes a new
//! entry, whether or not it improved anything, and entries for nodes that have
//! already been visited are still popped and expanded. This costs extra queue
//! traffic and repeated expansions but converges on the same distances as the
//! textbook formulation for non-negative weights.
//!
//! # Complexity
//!
//! - Time: O(E log E) pushes and pops in the common case; nodes can be
//!   expanded more than once
//! - Space: O(E) queue entries plus one map entry per seen node

use log::{debug, trace, warn};

use crate::{
    algorithms::{
        distance::{Distance, DistanceMap},
        queue::MinQueue,
    },
    graph::{Graph, NodeId, NodeSet, WeightedSuccessors},
    Error, Result,
};

/// Counters reported at `debug` level when a search finishes.
#[derive(Debug, Default)]
struct SearchStats {
    pushes: usize,
    pops: usize,
    stale_pops: usize,
}

/// Computes the distance from `start` to every node the search can see.
///
/// The returned map contains:
///
/// - every vertex of `graph`, as [`Distance::Unreached`] unless the search
///   reached it,
/// - `start`, at distance 0, even if `graph` does not list it,
/// - every node reachable from `start` through edges, even if `graph` does not
///   list it.
///
/// # Algorithm
///
/// 1. Every vertex of `graph` is recorded as unreached, then `start` as 0.
/// 2. The queue is seeded with `(start, 0)`.
/// 3. While the queue is not empty, the entry with the smallest tentative
///    distance is popped as `current`. Its base distance is its recorded
///    distance, or 0 if it has none.
/// 4. For each edge `current -> e` with weight `w`, `base + w` is recorded for
///    `e` if `e` has no distance yet or if it is strictly smaller than the
///    recorded one. If `e` has not been visited, `(e, base + w)` is pushed.
/// 5. `current` is marked visited.
///
/// Entries are never removed or updated in place, so a node can be popped and
/// expanded several times.
///
/// # Preconditions
///
/// Every edge weight reachable from `start` must be non-negative. This is not
/// checked: a negative weight is logged once at `warn` level and the search
/// continues, yielding distances with no defined meaning.
///
/// # Arguments
///
/// * `nodes` - The adjacency provider, usually a [`NodeArena`](crate::graph::NodeArena)
/// * `graph` - The vertex list whose members are always reported
/// * `start` - The source node
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] if `start` is not a node of `nodes`.
///
/// # Examples
///
/// ```rust
/// use shortpath::prelude::*;
///
/// let mut nodes = NodeArena::new();
/// let a = nodes.add_node("A");
/// let b = nodes.add_node("B");
/// let c = nodes.add_node("C");
/// nodes.connect(a, b, 1)?;
/// nodes.connect(b, c, 1)?;
/// nodes.connect(a, c, 5)?;
///
/// let graph: Graph = [a, b, c].into_iter().collect();
/// let distances = dijkstra(&nodes, &graph, a)?;
///
/// assert_eq!(distances.distance(a), Some(0));
/// assert_eq!(distances.distance(c), Some(2));
/// # Ok::<(), shortpath::Error>(())
/// ```
pub fn dijkstra<G>(nodes: &G, graph: &Graph, start: NodeId) -> Result<DistanceMap>
where
    G: WeightedSuccessors,
{
    if !nodes.contains_node(start) {
        return Err(Error::NodeNotFound(start));
    }

    debug!(
        "shortest paths from {start} over {} listed vertices",
        graph.len()
    );

    let mut distances = DistanceMap::with_vertices(graph.vertices());
    distances.insert(start, Distance::Reached(0));

    let mut visited = NodeSet::with_capacity(nodes.node_count());
    let mut queue = MinQueue::new();
    let mut stats = SearchStats::default();
    let mut negative_seen = false;

    queue.push(start, 0);
    stats.pushes += 1;

    while let Some((current, tentative)) = queue.pop() {
        stats.pops += 1;
        if visited.contains(current) {
            stats.stale_pops += 1;
        }

        // A node without a recorded distance expands from 0
        let base = distances.distance(current).unwrap_or(0);
        trace!(
            "pop {current} (queued at {tentative}, base {base}, {} left)",
            queue.len()
        );

        for (neighbor, weight) in nodes.weighted_successors(current) {
            if weight < 0 && !negative_seen {
                negative_seen = true;
                warn!("negative edge weight {weight} on {current} -> {neighbor}; distances are unspecified");
            }

            let candidate = base.saturating_add(weight);
            let improves = match distances.get(neighbor) {
                Some(Distance::Reached(best)) => candidate < best,
                Some(Distance::Unreached) | None => true,
            };
            if improves {
                distances.insert(neighbor, Distance::Reached(candidate));
            }

            if !visited.contains(neighbor) {
                queue.push(neighbor, candidate);
                stats.pushes += 1;
            }
        }

        visited.insert(current);
    }

    debug!(
        "search from {start} finished: {} nodes seen, {} visited, {} pushes, {} pops ({} stale)",
        distances.len(),
        visited.len(),
        stats.pushes,
        stats.pops,
        stats.stale_pops
    );

    Ok(distances)
}
