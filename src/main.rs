use clap::Parser;
use mojifix::config::{load_config, TableSource};
use mojifix::errors::AppError;
use mojifix::logger;
use mojifix::metrics::Metrics;
use mojifix::repairer::Repairer;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "mojifix", version)]
struct Cli {
    /// File to repair in place
    file: PathBuf,

    /// Replacement table (JSON array of {pattern, replacement} objects);
    /// defaults to the built-in mojibake table
    #[arg(short, long)]
    table: Option<String>,

    /// Report what would change without writing
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<(), AppError> {
    logger::init();
    let cli = Cli::parse();
    let cfg = load_config(&cli.table)?;

    match &cfg.table_source {
        TableSource::Builtin => info!("Using built-in table ({} entries)", cfg.table.len()),
        TableSource::File(path) => {
            info!("Loaded table from {} ({} entries)", path, cfg.table.len())
        }
    }

    let registry = prometheus::Registry::new();
    let metrics = Metrics::new(&registry);

    let repairer = Repairer::new(cfg.table)?;

    let report = if cli.dry_run {
        repairer.preview_file(&cli.file)?
    } else {
        repairer.repair_file(&cli.file)?
    };

    for (pattern, count) in &report.hits {
        info!("replaced {:?} ({} occurrence(s))", pattern, count);
    }
    if !report.changed() {
        info!("no known mojibake found in {}", cli.file.display());
    }

    if cli.dry_run {
        println!(
            "{}: {} replacement(s) would be applied.",
            cli.file.display(),
            report.total
        );
    } else {
        metrics.files_repaired.inc();
        metrics.replacements_applied.inc_by(report.total as u64);
        println!("File encoding fixed.");
    }
    Ok(())
}
