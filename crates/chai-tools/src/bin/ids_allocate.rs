//! IDS Allocate
//!
//! Parses IDS lines, allocates private use codepoints for aliases and
//! nested structures, and writes the resulting character records.
//!
//! Usage: `ids-allocate --ids <ids.txt> --repertoire <repertoire.json> --output <out.json>`

use chai_pua::RunOptions;
use chai_tools::{allocate, Job, OutputFormat};
use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(name = "ids-allocate")]
#[command(about = "Allocate private use codepoints for IDS decompositions")]
struct Args {
    /// IDS text file, one character per line
    #[arg(long)]
    ids: PathBuf,

    /// JSON array of existing character records
    #[arg(long)]
    repertoire: PathBuf,

    /// Where to write new and updated characters
    #[arg(long)]
    output: PathBuf,

    /// Emit characters already in the repertoire with re-derived glyphs
    #[arg(long)]
    update_existing: bool,

    /// Where to write the run report
    #[arg(long)]
    report: Option<PathBuf>,

    /// Output record format
    #[arg(long, value_enum, default_value_t = OutputFormat::Records)]
    format: OutputFormat,
}

fn main() {
    chai_tools::init_logging();

    let args = Args::parse();

    let job = Job {
        ids: args.ids,
        repertoire: args.repertoire,
        output: args.output,
        report: args.report,
        format: args.format,
        options: RunOptions {
            update_existing: args.update_existing,
        },
    };

    let report = match allocate(&job) {
        Ok(report) => report,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    info!("Run complete");
    info!("  - Lines: {}", report.lines);
    info!("  - Resolved: {}/{}", report.resolved, report.descriptions);
    info!("  - Skipped existing: {}", report.skipped_existing);
    info!("  - Components minted: {}", report.components_minted);
    info!("  - Compounds minted: {}", report.compounds_minted);
    if !report.failures.is_empty() {
        warn!(
            "{} failed lines, {} failed descriptions",
            report.failed_lines, report.failed_descriptions
        );
    }
}
