pub mod build;
pub mod completions;
pub mod fmt;
pub mod init;
pub mod parse;

use clap::{ArgAction, Parser, Subcommand};

/// siam - Design system compiler
#[derive(Parser, Debug)]
#[command(name = "siam")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log filter for the requested verbosity. `RUST_LOG` takes precedence.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve system documents into token and element JSON
    Build(build::BuildArgs),

    /// Print the parsed tree of a document as JSON
    Parse(parse::ParseArgs),

    /// Rewrite a document in canonical form
    Fmt(fmt::FmtArgs),

    /// Initialize a siam project (siam.yaml and a starter system)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
