use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "seedbed",
    version,
    about = "Concurrent sample-data seeder for SQLite — validates and inserts demo users, products, and orders, then reports every outcome"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Seed the demo dataset and print outcome and contents tables
    Run(RunArgs),
    /// Print the current contents tables without inserting anything
    Show(ShowArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct RunArgs {
    /// Directory holding the per-kind database files
    #[arg(long, env = "SEEDBED_DATA_DIR", default_value = ".seedbed")]
    pub data_dir: PathBuf,

    /// Maximum concurrent inserts per entity kind
    #[arg(long, default_value_t = seedbed_core::ingest::DEFAULT_PARALLEL)]
    pub parallel: usize,

    /// Use throwaway in-memory stores instead of database files
    #[arg(long)]
    pub in_memory: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ShowArgs {
    /// Directory holding the per-kind database files
    #[arg(long, env = "SEEDBED_DATA_DIR", default_value = ".seedbed")]
    pub data_dir: PathBuf,
}
