//! `fitschunk`: plan memory-bounded chunk layouts from array metadata.

use clap::{Parser, Subcommand};

use fitsio_chunked::HandleInfo;
use fitsio_chunked_cli::{build_plan, resolve_size_spec, type_table, ShapeArg};

#[derive(Parser)]
#[command(
    name = "fitschunk",
    about = "Plan memory-bounded chunked scans over large image-container arrays",
    version
)]
struct Cli {
    /// Configuration file path (defaults to $FITSIO_CHUNKED_CONFIG).
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the row windows a chunked scan would read.
    Plan {
        /// Handle shape as ROWSxCOLS:TYPECODE. Repeat to zip several handles.
        #[arg(short, long = "shape", required = true)]
        shapes: Vec<ShapeArg>,

        /// Rows per chunk. Takes precedence over --memory-mb.
        #[arg(long)]
        chunk_size: Option<usize>,

        /// Memory budget per chunk, in megabytes.
        #[arg(long)]
        memory_mb: Option<f64>,

        /// Most row windows to list; the count and last window are always shown.
        #[arg(long, default_value_t = 1000)]
        max_ranges: usize,
    },

    /// Print the supported element type table as JSON.
    Types,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Plan {
            shapes,
            chunk_size,
            memory_mb,
            max_ranges,
        } => {
            let spec = resolve_size_spec(cli.config.as_deref(), chunk_size, memory_mb)?;
            let infos: Vec<HandleInfo> = shapes.into_iter().map(|s| s.0).collect();
            let plan = build_plan(&infos, spec, max_ranges)?;
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }

        Commands::Types => {
            println!("{}", serde_json::to_string_pretty(&type_table())?);
        }
    }

    Ok(())
}
