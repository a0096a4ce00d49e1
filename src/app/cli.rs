use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Checks puzzle levels for connectivity and counts their solutions.", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Command,

    /// Suppress verbose logging, only printing results or errors.
    #[clap(short, long, global = true)]
    pub quiet: bool,

    /// File that receives the verbose log.
    #[clap(long, global = true, default_value = "hamiltonian-check.log")]
    pub log_file: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report whether each level is connected, ignoring edge directions.
    Connect {
        #[clap(required = true)]
        level_files: Vec<PathBuf>,
    },
    /// Count the solutions of each level.
    Count {
        #[clap(required = true)]
        level_files: Vec<PathBuf>,
    },
    /// Print the points and edges of a level.
    Info { level_file: PathBuf },
    /// Replay a route, given as comma-separated point indices, against a level.
    Replay {
        level_file: PathBuf,
        #[clap(value_delimiter = ',', required = true)]
        route: Vec<usize>,
    },
}
