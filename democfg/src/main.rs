//! democfg - configuration header codec
//!
//! This is the main entry point for the democfg CLI.

use clap::{Parser, Subcommand, ValueEnum};
use democfg_config::Format;
use democfg_core::{ConfigHeader, JsonRecord};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// democfg - encode, decode and validate configuration headers
#[derive(Parser)]
#[command(name = "democfg")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the document for a header
    Encode {
        /// Implementation name
        #[arg(long)]
        impname: String,

        /// Instance name
        #[arg(long)]
        instname: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Single-line JSON output (JSON only, TOML output is unaffected)
        #[arg(long)]
        compact: bool,
    },

    /// Decode a header from a JSON or TOML file
    Decode {
        /// Path to the config file
        config: String,

        /// Read the header from this key instead of the document root
        #[arg(long)]
        section: Option<String>,
    },

    /// Validate a header in a configuration file
    Validate {
        /// Path to the config file
        config: String,

        /// Read the header from this key instead of the document root
        #[arg(long)]
        section: Option<String>,
    },

    /// Show version information
    Version,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Toml,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => Format::Json,
            OutputFormat::Toml => Format::Toml,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Encode { impname, instname, format, compact } => {
            let header = ConfigHeader::new(impname, instname);
            let output = match format {
                OutputFormat::Json if compact => header.to_json_string(false)?,
                other => Format::from(other).serialize(&header)?,
            };
            println!("{}", output.trim_end());
        }

        Commands::Decode { config, section } => {
            let header = load_or_exit(&config, section.as_deref());
            println!("impname: {}", header.impname);
            println!("instname: {}", header.instname);
        }

        Commands::Validate { config, section } => {
            let header = load_or_exit(&config, section.as_deref());
            tracing::debug!("Header {} is valid", header);
            println!("Configuration '{}' is valid!", config);
        }

        Commands::Version => {
            println!("democfg v{}", democfg_core::VERSION);
        }
    }

    Ok(())
}

fn load_or_exit(config: &str, section: Option<&str>) -> ConfigHeader {
    tracing::info!("Loading config: {}", config);
    match democfg_config::load_file_section(config, section) {
        Ok(header) => header,
        Err(e) => {
            tracing::error!("Failed to load config: {}", e);
            if e.is_structural() {
                eprintln!("Configuration Error: {}", e);
            } else {
                eprintln!("Failed to read config: {}", e);
            }
            std::process::exit(1);
        }
    }
}
