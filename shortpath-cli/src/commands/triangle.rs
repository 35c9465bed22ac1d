use anyhow::Context;

use crate::{
    app::GlobalOptions,
    commands::common::{distance_rows, print_rows},
    output::print_output,
};

pub fn run(opts: &GlobalOptions) -> anyhow::Result<()> {
    let demo = shortpath::demo::triangle().context("failed to build the triangle graph")?;
    let distances = demo.run().context("shortest-path search failed")?;

    let rows = distance_rows(&demo, &distances);
    print_output(&rows, opts, |rows| print_rows(rows))
}
