use anyhow::Context;
use clap::{Parser, Subcommand};
use freqstat_core::cli::text::{TextArgs, run_text};
use freqstat_core::cli::web::{WebArgs, run_web};
use freqstat_core::logging::init_logging;

#[derive(Parser, Debug)]
#[command(
    name = "freqstat",
    version,
    about = "freqstat: frequency-ranked text and access log statistics"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank words, characters, digrams and trigrams into files
    Text(TextArgs),

    /// Print a report on a common log format access log
    Web(WebArgs),
}

fn main() {
    let cli = Cli::parse();

    init_logging();

    if let Err(e) = run(cli.command) {
        eprintln!("freqstat: {e:#}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> anyhow::Result<()> {
    tracing::debug!(?command, "starting");

    match command {
        Command::Text(args) => {
            run_text(&args).context("failed to produce text properties")?;
        }
        Command::Web(args) => {
            run_web(&args).context("failed to produce web statistics")?;
        }
    }

    Ok(())
}
