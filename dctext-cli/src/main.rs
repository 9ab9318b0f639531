//! dctext CLI - Command-line interface for Dublin Core text conversion

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "dctext")]
#[command(author, version, long_about = None)]
#[command(
    about = "A cataloguing tool for converting specially formatted text files containing Dublin Core metadata into various formats"
)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Also write the log to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Header and shared-field configuration shared by several commands
#[derive(clap::Args)]
struct ConfigArgs {
    /// File containing an alternative header arrangement, one field label per line
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Shared fields file (label,value per line) applied to every record
    #[arg(short, long)]
    shared: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a directory of metadata text files into export formats
    Run {
        /// Directory containing the raw metadata files
        input_dir: PathBuf,

        /// Directory the exported files are written to
        #[arg(short = 'd', long, default_value = "output")]
        output_dir: PathBuf,

        /// Name of the exported files (without extension)
        #[arg(short, long, default_value = dctext_core::config::DEFAULT_EXPORT_NAME)]
        output: String,

        #[command(flatten)]
        config: ConfigArgs,

        /// Create a single .csv file containing metadata of each item
        #[arg(short = 'C', long)]
        csv: bool,

        /// Create a single .mrk file containing metadata of each item
        #[arg(short = 'M', long)]
        mrk: bool,

        /// Create a single .json file containing metadata of each item
        #[arg(short = 'J', long)]
        json: bool,

        /// Create a single .xml file containing metadata of each item
        #[arg(short = 'X', long)]
        xml: bool,

        /// Additional export format by name (repeatable)
        #[arg(short, long = "format")]
        formats: Vec<String>,

        /// Print the run report as JSON
        #[arg(long)]
        json_report: bool,
    },

    /// Parse a single metadata file and display its record
    Inspect {
        /// Raw metadata file
        input: PathBuf,

        #[command(flatten)]
        config: ConfigArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check header and shared-field configuration files
    Validate {
        #[command(flatten)]
        config: ConfigArgs,
    },

    /// List the available export formats
    Formats,
}

fn init_tracing(verbose: bool, log_file: Option<&PathBuf>) -> Result<()> {
    let filter = if verbose {
        "dctext_cli=debug,dctext_core=debug"
    } else {
        "dctext_cli=info,dctext_core=info"
    };

    let file_layer = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Arc::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.log_file.as_ref())?;

    match cli.command {
        Commands::Run {
            input_dir,
            output_dir,
            output,
            config,
            csv,
            mrk,
            json,
            xml,
            formats,
            json_report,
        } => {
            let mut selected = Vec::new();
            for (flag, name) in [(csv, "csv"), (mrk, "mrk"), (json, "json"), (xml, "xml")] {
                if flag {
                    selected.push(name.to_string());
                }
            }
            selected.extend(formats);

            let mut run_config = dctext_core::RunConfig::new(input_dir, output_dir)
                .with_export_name(output);
            run_config.header_config = config.config;
            run_config.shared_fields = config.shared;
            run_config.formats = selected;

            commands::run(run_config, json_report)
        }

        Commands::Inspect {
            input,
            config,
            json,
        } => commands::inspect(&input, config.config, config.shared, json),

        Commands::Validate { config } => commands::validate(config.config, config.shared),

        Commands::Formats => commands::formats(),
    }
}
