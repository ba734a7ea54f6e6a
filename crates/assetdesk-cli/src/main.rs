//! Assetdesk CLI
//!
//! Front end for the request resolution engine:
//! - `process`: resolve a request and commit it to the inventory when possible
//! - `extract`: show what the engine understood, without committing
//! - `catalog`: list approved devices
//! - `next-ids`: preview the identifiers the next commit would receive

use anyhow::{Context, Result};
use assetdesk_intake::{CatalogSource, Outcome, PatternRecognizer, RequestEngine, Resolution};
use assetdesk_storage::{CsvInventory, TextCatalog};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod config;
mod message;

use config::AppConfig;

#[derive(Parser)]
#[command(name = "assetdesk")]
#[command(
    author,
    version,
    about = "Assetdesk: equipment requests in, inventory rows out"
)]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Device catalog file (overrides config and ASSETDESK_CATALOG)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Inventory CSV file (overrides config and ASSETDESK_INVENTORY)
    #[arg(long, global = true)]
    inventory: Option<PathBuf>,
    /// Log debug detail to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a request and update the inventory when it is complete and approved.
    Process {
        /// Request text file (`-` for stdin)
        #[arg(default_value = "-")]
        input: PathBuf,
        /// Input is a raw email message; drop its headers
        #[arg(long)]
        email: bool,
        /// Print the full resolution as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the extracted and validated request without committing.
    Extract {
        /// Request text file (`-` for stdin)
        #[arg(default_value = "-")]
        input: PathBuf,
        /// Input is a raw email message; drop its headers
        #[arg(long)]
        email: bool,
    },

    /// List the approved device catalog.
    Catalog,

    /// Show the next asset tag and purchase order.
    NextIds,
}

type Engine = RequestEngine<PatternRecognizer, TextCatalog, CsvInventory>;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_engine(config: &AppConfig) -> Engine {
    RequestEngine::new(
        PatternRecognizer::new(),
        &config.lexicon,
        TextCatalog::new(&config.catalog_path),
        CsvInventory::new(&config.inventory_path),
    )
}

fn read_request(input: &Path, email: bool) -> Result<String> {
    let raw = message::read_input(input)?;
    Ok(if email {
        message::message_body(&raw).to_string()
    } else {
        raw
    })
}

fn print_resolution(resolution: &Resolution) {
    match &resolution.outcome {
        Outcome::Commit(record) => {
            println!(
                "{} Inventory updated with asset tag {}",
                "ok".green().bold(),
                record.asset_tag.bold()
            );
            println!("   purchase order {}", record.purchase_order);
        }
        Outcome::ClarificationNeeded(message) | Outcome::ProcessingAcknowledged(message) => {
            println!("{}", message);
        }
    }

    if let Some(suggestion) = &resolution.request.suggestion {
        eprintln!("{} {}", "info:".yellow().bold(), suggestion);
    }
}

fn cmd_process(config: &AppConfig, input: &Path, email: bool, json: bool) -> Result<()> {
    let text = read_request(input, email)?;
    let mut engine = build_engine(config);
    let resolution = engine.resolve_request(&text).with_context(|| {
        format!(
            "failed to resolve request against {}",
            config.inventory_path.display()
        )
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
    } else {
        print_resolution(&resolution);
    }
    Ok(())
}

fn cmd_extract(config: &AppConfig, input: &Path, email: bool) -> Result<()> {
    let text = read_request(input, email)?;
    let request = build_engine(config).inspect(&text);
    println!("{}", serde_json::to_string_pretty(&request)?);
    Ok(())
}

fn cmd_catalog(config: &AppConfig) -> Result<()> {
    let catalog = TextCatalog::new(&config.catalog_path).load_catalog();
    if catalog.is_empty() {
        eprintln!(
            "{} no approved devices in {}",
            "info:".yellow().bold(),
            config.catalog_path.display()
        );
        return Ok(());
    }
    for (i, device) in catalog.iter().enumerate() {
        println!(
            "{:>3}. {} {}: {}, {} RAM, {} Storage, {}",
            i + 1,
            device.make.bold(),
            device.model.bold(),
            device.processor,
            device.ram,
            device.storage,
            device.operating_system
        );
    }
    Ok(())
}

fn cmd_next_ids(config: &AppConfig) -> Result<()> {
    let ids = build_engine(config)
        .preview_identifiers()
        .with_context(|| format!("failed to read {}", config.inventory_path.display()))?;
    println!("asset tag      {}", ids.asset_tag);
    println!("purchase order {}", ids.purchase_order);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = AppConfig::load(cli.config.as_deref(), cli.catalog, cli.inventory)?;
    tracing::debug!(
        catalog = %config.catalog_path.display(),
        inventory = %config.inventory_path.display(),
        "configuration resolved"
    );

    match cli.command {
        Commands::Process { input, email, json } => cmd_process(&config, &input, email, json)?,
        Commands::Extract { input, email } => cmd_extract(&config, &input, email)?,
        Commands::Catalog => cmd_catalog(&config)?,
        Commands::NextIds => cmd_next_ids(&config)?,
    }

    Ok(())
}
