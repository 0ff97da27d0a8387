//! garment-quote - CLI tool to quote custom sportswear orders.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use garment_core::generator::unit_noun;
use garment_core::model::{CATALOG, DEFAULT_COLOR};
use garment_core::validation::NOTHING_TO_QUOTE;
use garment_core::{
    build_message_link, quote_order, render_summary, AppConfig, EmbroiderySelection, HistoryLog,
    LogoArtifact, OrderForm, Quote, QuoteOutcome, SetType, SizeCounts, SizeLabel,
};

/// Quote custom sportswear orders.
#[derive(Parser, Debug)]
#[command(name = "garment-quote")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (TOML). Defaults to ./garment-quote.toml when present
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the garment models available for quoting
    Catalog,
    /// Price an order, print its summary and messaging link
    Quote(QuoteArgs),
    /// List recorded quotes, oldest first
    History {
        /// Show only the most recent N quotes
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Print the effective pricing configuration
    Rates,
}

#[derive(Args, Debug)]
struct QuoteArgs {
    /// Garment model id or name (see `catalog`)
    #[arg(short, long)]
    model: String,

    /// What the set includes: full or jacket
    #[arg(long, default_value = "full", value_parser = parse_set_type)]
    set_type: SetType,

    /// Quantity for one size, e.g. --size S=2 --size M=3
    #[arg(short, long = "size", value_parser = parse_size)]
    sizes: Vec<(SizeLabel, u32)>,

    /// Fabric type
    #[arg(long)]
    fabric: Option<String>,

    /// Main color
    #[arg(long, default_value = DEFAULT_COLOR)]
    color: String,

    /// Requested delivery date (YYYY-MM-DD)
    #[arg(long)]
    delivery: Option<NaiveDate>,

    /// Additional comments
    #[arg(long, default_value = "")]
    comments: String,

    /// Logo or crest image (png, jpg, jpeg)
    #[arg(long)]
    logo: Option<PathBuf>,

    /// Embroider the logo on every garment
    #[arg(long)]
    embroider_logo: bool,

    /// Embroider a name on every garment
    #[arg(long)]
    embroider_name: bool,

    /// Embroider both logo and name
    #[arg(long)]
    embroidery: bool,

    /// Write the printable summary to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the cost breakdown and messaging link as JSON instead of the summary
    #[arg(long)]
    json: bool,

    /// Do not record the quote in history
    #[arg(long)]
    no_history: bool,
}

fn parse_size(s: &str) -> std::result::Result<(SizeLabel, u32), String> {
    SizeCounts::parse_entry(s).map_err(|e| e.to_string())
}

fn parse_set_type(s: &str) -> std::result::Result<SetType, String> {
    SetType::from_str_value(s).ok_or_else(|| format!("unknown set type '{}' (use full or jacket)", s))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Logs go to stderr; stdout carries only the requested output.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Command::Catalog => print_catalog(),
        Command::Quote(args) => run_quote(args, &config)?,
        Command::History { limit } => print_history(&config, limit),
        Command::Rates => print_rates(&config)?,
    }

    Ok(())
}

fn print_catalog() {
    for model in CATALOG.iter() {
        println!("{:<12} {}", model.id, model.name);
        println!("{:<12} {}", "", model.description);
    }
}

fn run_quote(args: QuoteArgs, config: &AppConfig) -> Result<()> {
    // A logo that is not on disk counts as no logo.
    let logo = args.logo.as_ref().and_then(|path| {
        if path.exists() {
            Some(LogoArtifact::from_path(path))
        } else {
            warn!("Logo {} not found, quoting without it", path.display());
            None
        }
    });

    let form = OrderForm {
        sizes: args.sizes.iter().copied().collect(),
        embroidery: EmbroiderySelection::new(
            args.embroider_logo || args.embroidery,
            args.embroider_name || args.embroidery,
        ),
        logo,
        set_type: args.set_type,
        fabric: args.fabric.clone(),
        color: args.color.clone(),
        delivery_date: args.delivery,
        comments: args.comments.clone(),
    };

    let quote = match quote_order(&args.model, &form, config, Utc::now())? {
        QuoteOutcome::NothingToQuote => {
            if args.json {
                eprintln!("{}", NOTHING_TO_QUOTE);
            } else {
                println!("{}", NOTHING_TO_QUOTE);
            }
            return Ok(());
        }
        QuoteOutcome::Quoted(quote) => quote,
    };

    let summary = render_summary(&quote, &config.shop);
    let link = build_message_link(&quote, &config.shop);
    if args.json {
        let mut value = serde_json::to_value(quote.breakdown)?;
        if let Some(fields) = value.as_object_mut() {
            fields.insert("message_link".to_string(), serde_json::Value::String(link.clone()));
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print!("{}", summary);
    }

    if let Some(path) = &args.output {
        std::fs::write(path, &summary)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Generated: {}", path.display());
    }

    if !args.no_history {
        record_history(config, &quote);
    }

    info!(
        "Suggested price per {}: {} {:.2}",
        unit_noun(quote.order.metadata().set_type),
        config.shop.currency,
        quote.breakdown.suggested_unit_price
    );
    if !args.json {
        println!();
        println!("Send this order by message: {}", link);
    }

    Ok(())
}

/// Append the quote to history. Failures are reported, never fatal.
fn record_history(config: &AppConfig, quote: &Quote) {
    let path = &config.history.path;
    let result = HistoryLog::open(path).and_then(|log| {
        if log.recovered() {
            warn!("History {} was corrupt and has been reset", path.display());
        }
        log.append(&quote.to_record())
    });
    match result {
        Ok(()) => info!("Recorded quote in {}", path.display()),
        Err(e) => warn!("Could not record quote in history: {}", e),
    }
}

fn print_history(config: &AppConfig, limit: Option<usize>) {
    let path = &config.history.path;
    if !path.exists() {
        println!("No quotes recorded yet.");
        return;
    }
    let log = match HistoryLog::open(path) {
        Ok(log) => log,
        Err(e) => {
            warn!("Could not open history {}: {}", path.display(), e);
            println!("No quotes recorded yet.");
            return;
        }
    };

    let readout = log.read_all();
    if readout.skipped > 0 {
        warn!("Skipped {} malformed history line(s)", readout.skipped);
    }
    if readout.records.is_empty() {
        println!("No quotes recorded yet.");
        return;
    }

    let skip = limit
        .map(|n| readout.records.len().saturating_sub(n))
        .unwrap_or(0);
    println!(
        "{:<20} {:<32} {:>5} {:>12} {:>10}",
        "Date", "Model", "Units", "Total cost", "Unit price"
    );
    for record in readout.records.iter().skip(skip) {
        println!(
            "{:<20} {:<32} {:>5} {:>12.2} {:>10.2}",
            record.timestamp.format("%Y-%m-%d %H:%M").to_string(),
            record.model,
            record.total_units,
            record.total_cost,
            record.suggested_unit_price
        );
    }
}

fn print_rates(config: &AppConfig) -> Result<()> {
    let toml = toml::to_string_pretty(&config.pricing).context("Failed to serialize rates")?;
    print!("{}", toml);
    println!(
        "# cutting per unit = {:.4} (cutting_per_dozen / 12)",
        config.pricing.rates.cutting_per_unit()
    );
    Ok(())
}
