use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use bitfact::command::parser::{parse_aggregates, parse_filter};
use bitfact::engine::core::filter::Expression;
use bitfact::engine::core::read::aggregate::plan::AggregateRequest;
use bitfact::engine::errors::QueryError;
use bitfact::engine::query::Catalog;
use bitfact::loader::generate::{generate_data_file, write_default_schema};
use bitfact::loader::{LoadError, load_catalog};
use bitfact::logging;
use bitfact::shared::config::{CONFIG, OutputFormat};
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use serde_json::json;
use tracing::info;

#[derive(Parser)]
#[command(name = "bitfact")]
#[command(about = "Query a fact table by scan or by bitmap index", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default schema and a random data file
    Generate {
        /// Number of fact rows (defaults to data.generated_rows)
        #[arg(short, long)]
        rows: Option<usize>,

        /// Seed for reproducible data
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        files: DataFiles,
    },

    /// Evaluate one filter with one or more aggregates
    Query {
        /// Filter such as "D1 = A AND D2 = X OR D2 = Y"
        #[arg(short = 'w', long = "where")]
        filter: String,

        /// Aggregate as func:column, repeatable
        #[arg(short, long = "agg", required = true)]
        aggs: Vec<String>,

        /// Evaluation path (defaults to both when query.compare_paths is set)
        #[arg(short, long, value_enum)]
        mode: Option<Mode>,

        #[command(flatten)]
        files: DataFiles,
    },

    /// Run the two reference queries on both paths
    Demo {
        #[command(flatten)]
        files: DataFiles,
    },
}

#[derive(clap::Args)]
struct DataFiles {
    /// Schema file (defaults to data.schema_path)
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Data file (defaults to data.data_path)
    #[arg(long)]
    data: Option<PathBuf>,
}

impl DataFiles {
    fn schema_path(&self) -> PathBuf {
        self.schema
            .clone()
            .unwrap_or_else(|| PathBuf::from(&CONFIG.data.schema_path))
    }

    fn data_path(&self) -> PathBuf {
        self.data
            .clone()
            .unwrap_or_else(|| PathBuf::from(&CONFIG.data.data_path))
    }

    fn load(&self) -> Result<Catalog> {
        let schema = self.schema_path();
        let data = self.data_path();
        load_catalog(&schema, &data)
            .inspect_err(LoadError::log_error)
            .with_context(|| {
                format!(
                    "loading schema {} with data {}",
                    schema.display(),
                    data.display()
                )
            })
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Scan,
    Bitmap,
    Both,
}

fn main() -> Result<()> {
    let _guard = logging::init()?;
    let args = Args::parse();

    match args.command {
        Commands::Generate { rows, seed, files } => {
            generate(rows.unwrap_or(CONFIG.data.generated_rows), seed, &files)
        }
        Commands::Query {
            filter,
            aggs,
            mode,
            files,
        } => {
            let expression = parse_filter(&filter)?;
            let requests = parse_aggregates(aggs.as_slice())?;
            let mode = mode.unwrap_or(if CONFIG.query.compare_paths {
                Mode::Both
            } else {
                Mode::Bitmap
            });
            let catalog = files.load()?;
            print(&run_query(&catalog, &expression, &requests, mode)?)
        }
        Commands::Demo { files } => {
            let catalog = files.load()?;
            let queries = [
                ("D1=A AND D2=X", vec!["AVG:Fact1"]),
                (
                    "D1=A AND D2=X OR D1=B AND D2=Y OR D2=Y",
                    vec!["COUNT:Fact1", "SUM:Fact2"],
                ),
            ];
            for (filter, aggs) in queries {
                let expression = parse_filter(filter)?;
                let requests = parse_aggregates(aggs.as_slice())?;
                print(&run_query(&catalog, &expression, &requests, Mode::Both)?)?;
            }
            Ok(())
        }
    }
}

fn generate(rows: usize, seed: Option<u64>, files: &DataFiles) -> Result<()> {
    let schema = files.schema_path();
    let data = files.data_path();
    ensure_parent(&schema)?;
    ensure_parent(&data)?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    write_default_schema(&schema).inspect_err(LoadError::log_error)?;
    generate_data_file(&data, rows, &mut rng).inspect_err(LoadError::log_error)?;

    info!(schema = %schema.display(), data = %data.display(), rows, "Generated dataset");
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    Ok(())
}

fn run_query(
    catalog: &Catalog,
    expression: &Expression,
    requests: &[AggregateRequest],
    mode: Mode,
) -> Result<serde_json::Value> {
    let mut report = serde_json::Map::new();
    report.insert("filter".into(), json!(expression.to_string()));
    let mut scan_time = None;
    let mut bitmap_time = None;

    if mode != Mode::Bitmap {
        let start = Instant::now();
        let outcome = catalog
            .fact
            .evaluate_without_index(expression, requests)
            .inspect_err(QueryError::log_error)?;
        let elapsed = start.elapsed();
        scan_time = Some(elapsed);
        report.insert(
            "scan".into(),
            json!({ "outcome": outcome, "elapsed_us": elapsed.as_micros() as u64 }),
        );
    }

    if mode != Mode::Scan {
        let start = Instant::now();
        let outcome = catalog
            .evaluate_with_index(expression, requests)
            .inspect_err(QueryError::log_error)?;
        let elapsed = start.elapsed();
        bitmap_time = Some(elapsed);
        report.insert(
            "bitmap".into(),
            json!({ "outcome": outcome, "elapsed_us": elapsed.as_micros() as u64 }),
        );
    }

    if let (Some(scan), Some(bitmap)) = (scan_time, bitmap_time) {
        report.insert("difference_us".into(), json!(signed_micros(scan, bitmap)));
    }

    Ok(serde_json::Value::Object(report))
}

/// Scan time minus bitmap time; positive when the index was faster.
fn signed_micros(scan: Duration, bitmap: Duration) -> i64 {
    scan.as_micros() as i64 - bitmap.as_micros() as i64
}

fn print<T: Serialize>(value: &T) -> Result<()> {
    let text = match CONFIG.query.output_format {
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
    };
    println!("{}", text);
    Ok(())
}
