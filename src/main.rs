use anyhow::Context;
use clap::Parser;
use hackbright::Database;
use hackbright::cli::Cli;
use hackbright::repl::Repl;
use std::io;
use std::process;

fn main() {
    // Logs go to stderr; stdout carries the prompt and results
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let db = Database::open(&cli.db)
        .with_context(|| format!("cannot open database {}", cli.db.display()))?;

    let stdin = io::stdin();
    Repl::new(&db, stdin.lock(), io::stdout())
        .show_prompt(!cli.quiet)
        .run()
        .context("console I/O failed")?;

    // Connection closes when `db` drops
    Ok(())
}
