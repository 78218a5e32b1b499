use crate::db::DEFAULT_DB_PATH;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hba")]
#[command(about = "Hackbright Project Tracker")]
#[command(version)]
pub struct Cli {
    /// SQLite database file
    #[arg(long, env = "HBA_DATABASE", default_value = DEFAULT_DB_PATH)]
    pub db: PathBuf,

    /// Don't print the prompt (useful when piping commands in)
    #[arg(short, long)]
    pub quiet: bool,
}
