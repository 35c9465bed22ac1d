use serde::Serialize;
use shortpath::{demo::DemoGraph, DistanceMap};

/// One line of a distance report.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DistanceRow {
    pub node: String,
    /// `None` for nodes the search never reached.
    pub distance: Option<i64>,
}

/// Pair every entry of `distances` with its label, in map order.
pub fn distance_rows(demo: &DemoGraph, distances: &DistanceMap) -> Vec<DistanceRow> {
    distances
        .iter()
        .map(|(node, distance)| DistanceRow {
            node: demo
                .label(node)
                .map_or_else(|| node.to_string(), str::to_string),
            distance: distance.into(),
        })
        .collect()
}

/// Render a row the way the text report prints it; unreached nodes show `-1`.
pub fn format_row(row: &DistanceRow) -> String {
    let distance = row
        .distance
        .unwrap_or(shortpath::algorithms::UNREACHED_SENTINEL);
    format!("Distance to: {} is {distance}", row.node)
}

pub fn print_rows(rows: &[DistanceRow]) {
    for row in rows {
        println!("{}", format_row(row));
    }
}
