#![no_main]

use libfuzzer_sys::fuzz_target;
use shortpath::prelude::*;

// Layout: node count, start index, then (from, to, weight) byte triples.
fuzz_target!(|data: &[u8]| {
    let [count, start, rest @ ..] = data else {
        return;
    };
    let count = usize::from(*count % 32) + 1;

    let mut nodes = NodeArena::with_capacity(count);
    let ids: Vec<NodeId> = (0..count).map(|i| nodes.add_node(i)).collect();
    for edge in rest.chunks_exact(3) {
        let from = ids[usize::from(edge[0]) % count];
        let to = ids[usize::from(edge[1]) % count];
        let _ = nodes.add_edge(from, to, Weight::from(edge[2]));
    }

    // List every other node so unlisted discovery is exercised too
    let graph: Graph = ids.iter().copied().step_by(2).collect();
    let start = ids[usize::from(*start) % count];
    let Ok(distances) = dijkstra(&nodes, &graph, start) else {
        panic!("start {start} exists but was rejected");
    };

    assert_eq!(distances.distance(start), Some(0));
    for (from, d_from) in distances.reached() {
        assert!(d_from >= 0);
        for (to, weight) in nodes.weighted_successors(from) {
            let d_to = distances.distance(to).expect("successor of a reached node");
            assert!(d_to <= d_from + weight, "{from} -> {to} not relaxed");
        }
    }
});
