//! Cambio terminal host
//!
//! Runs launcher queries from the command line, or line by line from stdin,
//! and prints the result items. Logs go to stderr.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cambio_core::currency::{CachedRateSource, ReferenceRates};
use cambio_plugin::{CurrencyPlugin, ResultItem};
use cambio_shared::AppConfig;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print result items as JSON, one per line
    #[arg(long)]
    json: bool,

    /// Directory holding default.toml and {RUN_MODE}.toml
    #[arg(long, default_value = "config")]
    config_dir: PathBuf,

    /// Query such as `12 usd to eur`; queries are read from stdin when omitted
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, allow_negative_numbers = true)]
    query: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cambio=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load_from(&cli.config_dir).context("Failed to load configuration")?;

    // Build rate source
    let rates = CachedRateSource::with_config(
        ReferenceRates::from_path_or_empty(&config.rates.path),
        config.rates.cache_capacity,
        config.rates.cache_ttl_secs,
    );

    let plugin = CurrencyPlugin::from_config(&config.plugin, rates);
    info!(
        trigger = %config.plugin.trigger,
        settings = %config.plugin.settings_path.display(),
        "Currency converter ready"
    );

    let trigger = config.plugin.trigger.as_str();
    let mut out = std::io::stdout().lock();

    if cli.query.is_empty() {
        for line in std::io::stdin().lock().lines() {
            let line = line.context("Failed to read query")?;
            if let Err(e) = plugin.settings().reload_if_changed() {
                warn!(error = %e, "Settings reload failed");
            }
            let items = plugin.handle_query(strip_trigger(&line, trigger));
            print_items(&mut out, &items, cli.json)?;
            out.flush()?;
        }
    } else {
        let query = cli.query.join(" ");
        let items = plugin.handle_query(strip_trigger(&query, trigger));
        print_items(&mut out, &items, cli.json)?;
    }

    Ok(())
}

/// Drops the launcher trigger if the query was typed with it.
fn strip_trigger<'a>(query: &'a str, trigger: &str) -> &'a str {
    let query = query.trim_start();
    if trigger.trim().is_empty() {
        return query;
    }
    query.strip_prefix(trigger).unwrap_or(query)
}

fn print_items(out: &mut impl Write, items: &[ResultItem], json: bool) -> anyhow::Result<()> {
    for item in items {
        if json {
            writeln!(out, "{}", serde_json::to_string(item)?)?;
        } else {
            writeln!(out, "{}\t{}", item.text, item.subtext)?;
        }
    }
    Ok(())
}
