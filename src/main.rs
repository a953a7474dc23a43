//! balance-tree CLI
//!
//! Reads balance-scale records, induces a decision tree and reports its
//! success rate per label on synthetic configurations.
//!
//! ```bash
//! balance-tree --data DECISION/balance-scale.data --seed 7
//! ```

use balance_tree::config::{Cli, DEFAULT_DATA_PATH};
use balance_tree::dataset::load_records;
use balance_tree::error::AppError;
use balance_tree::evaluation::evaluate;
use balance_tree::logging::init_logging;
use balance_tree::synthetic::generate_records;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    init_logging(cli.verbose)?;

    let path = match &cli.data {
        Some(path) => path.clone(),
        None => prompt_for_path(DEFAULT_DATA_PATH)?,
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(path = %path.display(), "reading data");
    let records = load_records(&path)?;

    info!(records = records.len(), "building decision tree");
    let builder = cli.tree_builder();
    let tree = builder
        .build(&records, &mut rng)
        .ok_or_else(|| AppError::EmptyDataset(path.clone()))?;
    info!(depth = tree.depth(), leaves = tree.leaf_count(), "decision tree ready");

    info!(count = cli.test_size, "generating test records");
    let test_records = generate_records(&mut rng, cli.test_size);

    let report = evaluate(Some(&tree), &test_records);
    print!("{report}");
    if let Some(overall) = report.overall_rate() {
        info!(overall, "evaluation finished");
    }
    Ok(())
}

/// Asks for the data path; an empty answer keeps `default`.
fn prompt_for_path(default: &str) -> Result<PathBuf, AppError> {
    println!("Enter the path to read data from.");
    println!("Default is '{default}', press Enter to keep");
    io::stdout().flush().map_err(AppError::Prompt)?;

    let mut entry = String::new();
    io::stdin().lock().read_line(&mut entry).map_err(AppError::Prompt)?;
    let entry = entry.trim();
    Ok(PathBuf::from(if entry.is_empty() { default } else { entry }))
}
