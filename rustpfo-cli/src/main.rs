//!
//! Steering-driven job runner for rustpfo processors.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing::info;

mod event_file;
mod steering;

use event_file::EventFile;
use steering::SteeringFile;

use rustpfo_core::{Processor, ProcessorRegistry};
use rustpfo_processors::{run_job, EnergyFilterProcessor};

/// Result type for CLI operations.
type Result<T> = std::result::Result<T, CliError>;

/// CLI error types.
#[derive(Error, Debug)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Core error: {0}")]
    Core(#[from] rustpfo_core::Error),

    #[error("Steering error: {0}")]
    Steering(#[from] toml::de::Error),

    #[error("Event file error: {0}")]
    EventFile(#[from] serde_json::Error),
}

/// Reconstructed-particle event processing driver.
#[derive(Parser)]
#[command(name = "rustpfo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (debug-level logging)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a steering file over an event file
    Run {
        /// Steering file (TOML)
        #[arg(short, long)]
        steering: PathBuf,

        /// Input event file (JSON)
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Show information about an event file
    Info {
        /// Input event file (JSON)
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run { steering, input } => {
            let steering = SteeringFile::from_path(&steering)?;
            let data = EventFile::from_path(&input)?;
            let mut processors = build_processors(&builtin_registry(), &steering)?;

            let summary = run_job(&mut processors, &data.run_header, &data.events)?;
            println!(
                "Ran {} processor(s) over {} event(s)",
                summary.processors_run, summary.events_processed
            );
        }

        Commands::Info { input } => {
            let data = EventFile::from_path(&input)?;
            println!("{}", data.run_header.summary());
            println!("{} event(s)", data.events.len());
            for event in &data.events {
                println!(
                    "event {}: {} collection(s)",
                    event.event_number(),
                    event.collection_count()
                );
                for name in event.collection_names() {
                    let collection = event.collection(name)?;
                    println!(
                        "  {} [{}] {} record(s)",
                        name,
                        collection.kind(),
                        collection.len()
                    );
                }
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();
}

/// Registry of the processors this binary ships.
fn builtin_registry() -> ProcessorRegistry {
    let mut registry = ProcessorRegistry::new();
    registry.register("EnergyFilter", || Box::new(EnergyFilterProcessor::new()));
    registry
}

/// Instantiates and configures the steering file's processors, in order.
fn build_processors(
    registry: &ProcessorRegistry,
    steering: &SteeringFile,
) -> Result<Vec<Box<dyn Processor>>> {
    let mut processors = Vec::with_capacity(steering.job.processors.len());
    for name in &steering.job.processors {
        let mut processor = registry.create(name)?;
        let mut params = processor.parameters();
        steering.apply(name, &mut params)?;
        processor.configure(&params)?;
        info!("configured processor '{name}'");
        processors.push(processor);
    }
    Ok(processors)
}
