use clap::{Parser, Subcommand};

/// shortpath - run single-source shortest paths over the demonstration graphs
#[derive(Debug, Parser)]
#[command(name = "shortpath", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Six-node undirected graph with edges A-B 7, A-F 14, A-C 9, C-F 2, C-D 11,
    /// B-C 10, B-D 15, E-F 9, E-D 6.
    Classic {
        /// Label of the start node.
        #[arg(short, long, value_name = "LABEL", default_value = "A")]
        start: String,
    },

    /// Directed zero-weight cycle a -> b -> c -> a, searched from a.
    Triangle,
}
