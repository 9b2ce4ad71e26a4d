mod error;
mod extract;
mod output;
mod parser;
mod registry;
mod settings;
mod sql;
mod utils;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use registry::CATEGORIES;
use settings::Settings;

#[derive(Parser)]
#[command(
    name = "catalog_extract",
    about = "Extract project listings from a markdown catalog into per-category CSV files"
)]
struct Cli {
    /// Source markdown document (default: CATALOG_INPUT or README-ko.md)
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,
    /// Directory for CSV output (default: CATALOG_OUT_DIR or current directory)
    #[arg(short, long, global = true)]
    out_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the catalog and write one CSV per category (default)
    Extract,
    /// List the built-in category registry
    Categories,
    /// Convert the written CSV files into an SQL seed script
    Sql {
        /// Script path (default: <out-dir>/<CATALOG_SQL_FILE>)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let t0 = Instant::now();
    let cli = Cli::parse();

    let settings = Settings::load().context("Failed to load CATALOG_* settings")?;
    info!(settings_loaded = ?settings, msg = "Starting catalog extractor");

    let input = cli.input.unwrap_or(settings.input);
    let out_dir = cli.out_dir.unwrap_or(settings.out_dir);

    match cli.command.unwrap_or(Commands::Extract) {
        Commands::Extract => {
            let summary = extract::run(&input, &out_dir, CATEGORIES)
                .with_context(|| format!("Extraction from {} failed", input.display()))?;
            summary.print();
        }
        Commands::Categories => {
            println!("{:>3} | {:<28} | {:<42} | {}", "#", "Key", "File", "Heading");
            println!("{}", "-".repeat(110));
            for (i, c) in CATEGORIES.iter().enumerate() {
                println!("{:>3} | {:<28} | {:<42} | {}", i + 1, c.key, c.filename, c.heading);
            }
            println!("\n{} categories", CATEGORIES.len());
        }
        Commands::Sql { output } => {
            let output = output.unwrap_or_else(|| out_dir.join(&settings.sql_file));
            let stats = sql::export(&out_dir, &output)
                .with_context(|| format!("SQL export from {} failed", out_dir.display()))?;
            println!("SQL file written: {}", output.display());
            println!(
                "{} project files, {} INSERT statements.",
                stats.project_files, stats.statements
            );
        }
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }
    Ok(())
}
