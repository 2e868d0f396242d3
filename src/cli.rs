//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_price_adapter::CsvPriceAdapter;
use crate::adapters::csv_store_adapter::{self, CsvStoreAdapter};
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::json_report_adapter::JsonReportAdapter;
use crate::adapters::text_report_adapter::TextReportAdapter;
use crate::domain::engine::compute_holdings;
use crate::domain::error::LotfolioError;
use crate::domain::invested::compute_invested_amount;
use crate::domain::valuation::{value_holdings, PortfolioSummary, ValuedHolding};
use crate::ports::config_port::ConfigPort;
use crate::ports::price_port::PricePort;
use crate::ports::report_port::ReportPort;
use crate::ports::store_port::StorePort;

#[derive(Parser, Debug)]
#[command(name = "lotfolio", about = "Investment portfolio tracker with FIFO lot accounting")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute and display current holdings
    Holdings {
        #[arg(short, long)]
        config: PathBuf,
        /// Price list CSV; overrides [data] prices from the config
        #[arg(long)]
        prices: Option<PathBuf>,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Sort order: symbol or value
        #[arg(long)]
        sort: Option<String>,
    },
    /// Print the net invested amount
    Invested {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// List the asset directory
    ListAssets {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Show transaction counts and date range
    Info {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Parse-check a transactions file and report unresolvable assets
    Validate {
        #[arg(short, long)]
        transactions: PathBuf,
        #[arg(long)]
        assets: Option<PathBuf>,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Holdings {
            config,
            prices,
            json,
            sort,
        } => run_holdings(&config, prices.as_ref(), json, sort.as_deref()),
        Command::Invested { config } => run_invested(&config),
        Command::ListAssets { config } => run_list_assets(&config),
        Command::Info { config } => run_info(&config),
        Command::Validate {
            transactions,
            assets,
        } => run_validate(&transactions, assets.as_ref()),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = LotfolioError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

/// Build the CSV store from the [data] section.
pub fn build_store(config: &dyn ConfigPort) -> Result<CsvStoreAdapter, LotfolioError> {
    let transactions = config.get_string("data", "transactions").ok_or_else(|| {
        LotfolioError::ConfigMissing {
            section: "data".into(),
            key: "transactions".into(),
        }
    })?;
    let assets =
        config
            .get_string("data", "assets")
            .ok_or_else(|| LotfolioError::ConfigMissing {
                section: "data".into(),
                key: "assets".into(),
            })?;
    Ok(CsvStoreAdapter::new(
        PathBuf::from(transactions),
        PathBuf::from(assets),
    ))
}

/// Sort valued holdings for display: by symbol, or by market value
/// descending (unpriced holdings last).
pub fn sort_holdings(holdings: &mut [ValuedHolding], order: &str) -> Result<(), LotfolioError> {
    match order {
        "symbol" => {
            holdings.sort_by(|a, b| a.holding.symbol.cmp(&b.holding.symbol));
            Ok(())
        }
        "value" => {
            holdings.sort_by(|a, b| {
                b.market_value
                    .partial_cmp(&a.market_value)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| a.holding.symbol.cmp(&b.holding.symbol))
            });
            Ok(())
        }
        other => Err(LotfolioError::ConfigInvalid {
            section: "display".into(),
            key: "sort".into(),
            reason: format!("expected symbol or value, got {}", other),
        }),
    }
}

fn run_holdings(
    config_path: &PathBuf,
    prices_override: Option<&PathBuf>,
    json_flag: bool,
    sort_override: Option<&str>,
) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let store = match build_store(&config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let transactions = match store.fetch_transactions() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let assets = match store.fetch_assets() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    eprintln!(
        "Replaying {} transactions over {} assets",
        transactions.len(),
        assets.len()
    );

    let holdings = compute_holdings(&transactions, &assets);
    let invested = compute_invested_amount(&transactions);

    let price_path = prices_override
        .cloned()
        .or_else(|| config.get_string("data", "prices").map(PathBuf::from));

    let prices: HashMap<String, f64> = match price_path {
        Some(path) => {
            let symbols: Vec<String> = holdings.iter().map(|h| h.symbol.clone()).collect();
            match CsvPriceAdapter::new(path).latest_prices(&symbols) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("error: {e}");
                    return (&e).into();
                }
            }
        }
        None => HashMap::new(),
    };

    let mut valued = value_holdings(holdings, &prices);
    let summary = PortfolioSummary::compute(&valued, invested);

    let sort_order = sort_override
        .map(String::from)
        .or_else(|| config.get_string("display", "sort"))
        .unwrap_or_else(|| "symbol".to_string());
    if let Err(e) = sort_holdings(&mut valued, &sort_order) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let json = json_flag || config.get_bool("display", "json", false);
    let report: Box<dyn ReportPort> = if json {
        Box::new(JsonReportAdapter)
    } else {
        Box::new(TextReportAdapter)
    };

    match report.render(&valued, &summary) {
        Ok(out) => {
            println!("{}", out);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_invested(config_path: &PathBuf) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let store = match build_store(&config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    match store.fetch_transactions() {
        Ok(transactions) => {
            println!("{:.2}", compute_invested_amount(&transactions));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_list_assets(config_path: &PathBuf) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let store = match build_store(&config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    match store.fetch_assets() {
        Ok(assets) => {
            let mut entries: Vec<_> = assets.into_iter().collect();
            entries.sort_by(|a, b| a.1.symbol.cmp(&b.1.symbol));
            for (asset_id, info) in &entries {
                println!("{}  {}  {}", info.symbol, asset_id, info.name);
            }
            eprintln!("{} assets", entries.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_info(config_path: &PathBuf) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let store = match build_store(&config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let transactions = match store.fetch_transactions() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let first = transactions.iter().map(|t| t.trade_date).min();
    let last = transactions.iter().map(|t| t.trade_date).max();
    let (Some(first), Some(last)) = (first, last) else {
        println!("no transactions");
        return ExitCode::SUCCESS;
    };
    println!("{} transactions, {} to {}", transactions.len(), first, last);

    let mut counts: HashMap<String, usize> = HashMap::new();
    for txn in &transactions {
        *counts.entry(txn.kind.to_string()).or_insert(0) += 1;
    }
    let mut counts: Vec<_> = counts.into_iter().collect();
    counts.sort();
    for (kind, count) in counts {
        println!("  {}: {}", kind, count);
    }
    ExitCode::SUCCESS
}

fn run_validate(transactions_path: &PathBuf, assets_path: Option<&PathBuf>) -> ExitCode {
    let content = match std::fs::read_to_string(transactions_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!(
                "error: failed to read {}: {}",
                transactions_path.display(),
                e
            );
            return ExitCode::from(1);
        }
    };

    let transactions = match csv_store_adapter::parse_transactions(&content) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    eprintln!("{}: {} transactions parsed", transactions_path.display(), transactions.len());

    if let Some(assets_path) = assets_path {
        let content = match std::fs::read_to_string(assets_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("error: failed to read {}: {}", assets_path.display(), e);
                return ExitCode::from(1);
            }
        };
        let assets = match csv_store_adapter::parse_assets(&content) {
            Ok(a) => a,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        };

        let mut unresolved: Vec<&str> = transactions
            .iter()
            .filter_map(|t| t.asset_id.as_deref())
            .filter(|id| !assets.contains_key(*id))
            .collect();
        unresolved.sort();
        unresolved.dedup();

        if unresolved.is_empty() {
            eprintln!("all asset references resolve");
        } else {
            // These rows would be silently skipped by the engine.
            for id in &unresolved {
                println!("unresolved asset: {}", id);
            }
            eprintln!("{} unresolved asset id(s)", unresolved.len());
        }
    }

    ExitCode::SUCCESS
}
