use anyhow::Context;
use clap::{Parser, Subcommand};
use erx_core::config::{read_rules_file, resolve_rules_file};
use erx_core::constants::RULES_FILE_ENV;
use erx_core::{MappingConfig, PrescriptionMapper};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "erx")]
#[command(about = "E-prescription document mapping CLI")]
struct Cli {
    /// Classification rules file (YAML). Overrides ERX_RULES_FILE.
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Map a clinical document (JSON) and print the prescription as JSON
    Map {
        /// Path to the clinical document
        document: PathBuf,
        /// Print compact JSON
        #[arg(long)]
        compact: bool,
    },
    /// Map a standalone section (JSON) and print it as JSON
    Section {
        /// Path to the section
        section: PathBuf,
    },
    /// Validate a classification rules file
    CheckRules {
        /// Rules file to validate
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("erx=info".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Map { document, compact } => {
            let mapper = build_mapper(cli.rules)?;
            let json = read_input(&document)?;
            let mapped = mapper
                .map_json(&json)
                .with_context(|| format!("failed to map {}", document.display()))?;

            tracing::info!(barcode = %mapped.barcode, "mapped prescription");
            let output = if compact {
                serde_json::to_string(&mapped)?
            } else {
                serde_json::to_string_pretty(&mapped)?
            };
            println!("{output}");
        }
        Commands::Section { section } => {
            let mapper = build_mapper(cli.rules)?;
            let json = read_input(&section)?;
            let wire = cda::read_section_json(&json)
                .with_context(|| format!("failed to read {}", section.display()))?;
            let mapped = mapper
                .map_section(&wire)
                .with_context(|| format!("failed to map {}", section.display()))?;
            println!("{}", serde_json::to_string_pretty(&mapped)?);
        }
        Commands::CheckRules { file } => {
            let rules = read_rules_file(&file)
                .with_context(|| format!("failed to load {}", file.display()))?;
            MappingConfig::new(rules)
                .with_context(|| format!("invalid rules in {}", file.display()))?;
            println!("{}: ok", file.display());
        }
    }

    Ok(())
}

fn build_mapper(rules_override: Option<PathBuf>) -> anyhow::Result<PrescriptionMapper> {
    let rules_file = resolve_rules_file(rules_override, std::env::var(RULES_FILE_ENV).ok());
    if let Some(path) = &rules_file {
        tracing::info!("++ Using classification rules from {}", path.display());
    }
    let config = MappingConfig::load(rules_file.as_deref())
        .context("failed to load classification rules")?;
    Ok(PrescriptionMapper::new(config))
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
