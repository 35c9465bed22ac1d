use anyhow::Context;
use log::info;

use crate::{
    app::GlobalOptions,
    commands::common::{distance_rows, print_rows},
    output::print_output,
};

pub fn run(start: &str, opts: &GlobalOptions) -> anyhow::Result<()> {
    let demo = shortpath::demo::classic().context("failed to build the classic graph")?;
    let start = demo
        .node_labelled(start)
        .with_context(|| format!("unknown start node '{start}'"))?;

    let distances = demo
        .run_from(start)
        .context("shortest-path search failed")?;
    info!(
        "{} of {} nodes reachable",
        distances.reached().count(),
        distances.len()
    );

    let rows = distance_rows(&demo, &distances);
    print_output(&rows, opts, |rows| print_rows(rows))
}
