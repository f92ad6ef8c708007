use clap::Parser;
use miette::Result;
use siam::cli::{Cli, Commands};
use siam::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .format_timestamp(None)
        .init();

    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => siam::cli::build::run(args, &printer)?,
        Commands::Parse(args) => siam::cli::parse::run(args)?,
        Commands::Fmt(args) => siam::cli::fmt::run(args, &printer)?,
        Commands::Init(args) => siam::cli::init::run(args, &printer)?,
        Commands::Completions(args) => siam::cli::completions::run(args)?,
    }

    Ok(())
}
