//! Chainstore demo driver

// Use jemalloc as global allocator
#[global_allocator]
static GLOBAL: jemallocator::Jemalloc = jemallocator::Jemalloc;

use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chainstore::logger::initialize_logger;
use chainstore::{HashAlgorithm, HashTable, ScoreBoard, TableConfig};
use clap::Parser;
use log::error;

#[derive(Parser, Debug)]
#[command(name = "chainstore")]
#[command(about = "Separate-chaining hash table demo")]
struct Args {
    /// Score file with one `score username` record per line
    scores: Option<PathBuf>,

    /// JSON table config; --buckets and --hash override its fields
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    #[arg(short = 'b', long)]
    buckets: Option<usize>,

    #[arg(long, value_enum)]
    hash: Option<HashAlgorithm>,

    /// Print scores as JSON
    #[arg(long)]
    json: bool,
}

fn table_config(args: &Args) -> Result<TableConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => TableConfig::load(path)?,
        None => TableConfig::default(),
    };
    if let Some(buckets) = args.buckets {
        config.bucket_count = buckets;
    }
    if let Some(hash) = args.hash {
        config.hash = hash;
    }
    config.validate()?;
    Ok(config)
}

fn print_lookup(table: &HashTable<i32, String>, key: i32) {
    let mut value = String::new();
    if table.search(&key, &mut value) {
        println!("Key {} has value: {}", key, value);
    } else {
        println!("Key {} not found", key);
    }
}

/// Insert, look up and delete a few entries
fn walkthrough(config: &TableConfig) -> Result<(), Box<dyn Error>> {
    let mut table = HashTable::new(config.bucket_count)?;

    table.insert(1, "One".to_string())?;
    table.insert(2, "Two".to_string())?;
    table.insert(3, "Three".to_string())?;

    print_lookup(&table, 2);
    table.delete(&2);
    print_lookup(&table, 2);

    println!("HashTable size: {}", table.size());
    Ok(())
}

fn show_scores(path: &Path, config: &TableConfig, json: bool) -> Result<(), Box<dyn Error>> {
    let board = ScoreBoard::load(path, config)?;
    let records = board.records();

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for record in &records {
            println!("Score: {}, Username: {}", record.score, record.username);
        }
        for record in board.rejected() {
            println!("Rejected duplicate: {} ({})", record.username, record.score);
        }
    }
    Ok(())
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let config = table_config(args)?;
    match &args.scores {
        Some(path) => show_scores(path, &config, args.json),
        None => walkthrough(&config),
    }
}

fn main() -> ExitCode {
    initialize_logger();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
