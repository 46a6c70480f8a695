use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use focuswave::cli::args::{Cli, Commands};
use focuswave::cli::commands::{self, Context};

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("{}: {e:#}", "error".red().bold());
        std::process::exit(1);
    }
}

/// Logs go to stderr so command output stays pipeable.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("FOCUSWAVE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        print!("{}", commands::completions(shell)?);
        return Ok(());
    }

    let ctx = Context::load(&cli)?;
    tracing::debug!(root = %ctx.paths.root.display(), "resolved data directory");

    let output = match cli.command {
        Commands::Start { duration } => commands::start(&ctx, duration.as_deref())?,
        Commands::Record { duration, date } => {
            commands::record(&ctx, &duration, date.as_deref())?
        }
        Commands::Stats { date } => commands::stats(&ctx, date.as_deref())?,
        Commands::Streak => commands::streak(&ctx)?,
        Commands::Titles => commands::titles(&ctx)?,
        Commands::History { limit } => commands::history(&ctx, limit)?,
        Commands::Config(args) => commands::config(&ctx, args.command)?,
        Commands::Completions { .. } => String::new(),
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
