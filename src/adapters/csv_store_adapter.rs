//! CSV-file transaction store adapter.
//!
//! Transactions: `id,type,asset_id,quantity,price,fee,amount,trade_date,created_at`
//! (header row required). Optional numeric columns may be blank and default
//! to 0; a blank `created_at` falls back to midnight of `trade_date`.
//! Assets: `asset_id,symbol,name`.

use crate::domain::asset::AssetInfo;
use crate::domain::error::LotfolioError;
use crate::domain::transaction::{Transaction, TransactionType};
use crate::ports::store_port::StorePort;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

#[derive(Debug)]
pub struct CsvStoreAdapter {
    transactions_path: PathBuf,
    assets_path: PathBuf,
}

impl CsvStoreAdapter {
    pub fn new(transactions_path: PathBuf, assets_path: PathBuf) -> Self {
        Self {
            transactions_path,
            assets_path,
        }
    }
}

fn store_error(reason: String) -> LotfolioError {
    LotfolioError::Store { reason }
}

fn field<'a>(
    record: &'a csv::StringRecord,
    idx: usize,
    name: &str,
    row: usize,
) -> Result<&'a str, LotfolioError> {
    record
        .get(idx)
        .ok_or_else(|| store_error(format!("row {}: missing {} column", row, name)))
}

/// Blank optional numeric columns mean zero.
fn parse_f64_or_zero(
    record: &csv::StringRecord,
    idx: usize,
    name: &str,
    row: usize,
) -> Result<f64, LotfolioError> {
    let raw = field(record, idx, name, row)?.trim();
    if raw.is_empty() {
        return Ok(0.0);
    }
    raw.parse()
        .map_err(|e| store_error(format!("row {}: invalid {} value: {}", row, name, e)))
}

pub fn parse_transactions(content: &str) -> Result<Vec<Transaction>, LotfolioError> {
    let mut rdr = csv::Reader::from_reader(content.as_bytes());
    let mut transactions = Vec::new();

    for (i, result) in rdr.records().enumerate() {
        let row = i + 2; // header is line 1
        let record = result.map_err(|e| store_error(format!("CSV parse error: {}", e)))?;

        let id = field(&record, 0, "id", row)?.trim().to_string();
        if id.is_empty() {
            return Err(store_error(format!("row {}: empty id", row)));
        }

        let kind: TransactionType = field(&record, 1, "type", row)?
            .trim()
            .parse()
            .map_err(|e| store_error(format!("row {}: {}", row, e)))?;

        let asset_id = match field(&record, 2, "asset_id", row)?.trim() {
            "" => None,
            s => Some(s.to_string()),
        };

        let quantity = parse_f64_or_zero(&record, 3, "quantity", row)?;
        let price = parse_f64_or_zero(&record, 4, "price", row)?;
        let fee = parse_f64_or_zero(&record, 5, "fee", row)?;
        let amount = parse_f64_or_zero(&record, 6, "amount", row)?;

        let trade_date_str = field(&record, 7, "trade_date", row)?.trim();
        let trade_date = NaiveDate::parse_from_str(trade_date_str, "%Y-%m-%d")
            .map_err(|e| store_error(format!("row {}: invalid trade_date: {}", row, e)))?;

        let created_at_str = field(&record, 8, "created_at", row)?.trim();
        let created_at = if created_at_str.is_empty() {
            trade_date.and_hms_opt(0, 0, 0).unwrap_or_default()
        } else {
            NaiveDateTime::parse_from_str(created_at_str, "%Y-%m-%dT%H:%M:%S")
                .map_err(|e| store_error(format!("row {}: invalid created_at: {}", row, e)))?
        };

        transactions.push(Transaction {
            id,
            kind,
            asset_id,
            quantity,
            price,
            fee,
            amount,
            trade_date,
            created_at,
        });
    }

    Ok(transactions)
}

pub fn parse_assets(content: &str) -> Result<HashMap<String, AssetInfo>, LotfolioError> {
    let mut rdr = csv::Reader::from_reader(content.as_bytes());
    let mut assets = HashMap::new();

    for (i, result) in rdr.records().enumerate() {
        let row = i + 2;
        let record = result.map_err(|e| store_error(format!("CSV parse error: {}", e)))?;

        let asset_id = field(&record, 0, "asset_id", row)?.trim().to_string();
        if asset_id.is_empty() {
            return Err(store_error(format!("row {}: empty asset_id", row)));
        }
        let symbol = field(&record, 1, "symbol", row)?.trim().to_string();
        let name = field(&record, 2, "name", row)?.trim().to_string();

        assets.insert(asset_id, AssetInfo { symbol, name });
    }

    Ok(assets)
}

impl StorePort for CsvStoreAdapter {
    fn fetch_transactions(&self) -> Result<Vec<Transaction>, LotfolioError> {
        let content = fs::read_to_string(&self.transactions_path).map_err(|e| {
            store_error(format!(
                "failed to read {}: {}",
                self.transactions_path.display(),
                e
            ))
        })?;
        parse_transactions(&content)
    }

    fn fetch_assets(&self) -> Result<HashMap<String, AssetInfo>, LotfolioError> {
        let content = fs::read_to_string(&self.assets_path).map_err(|e| {
            store_error(format!(
                "failed to read {}: {}",
                self.assets_path.display(),
                e
            ))
        })?;
        parse_assets(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    const TRANSACTIONS_CSV: &str = "\
id,type,asset_id,quantity,price,fee,amount,trade_date,created_at
t1,buy,a1,10,100.0,5.0,,2024-01-15,2024-01-15T09:30:00
t2,sell,a1,4,120.0,,,2024-01-16,
t3,dividend,,,,,25.0,2024-01-17,2024-01-17T08:00:00
";

    const ASSETS_CSV: &str = "\
asset_id,symbol,name
a1,VTI,Vanguard Total Stock Market ETF
a2,BND,Vanguard Total Bond Market ETF
";

    fn setup() -> (TempDir, CsvStoreAdapter) {
        let dir = TempDir::new().unwrap();
        let txn_path = dir.path().join("transactions.csv");
        let asset_path = dir.path().join("assets.csv");
        let mut f = fs::File::create(&txn_path).unwrap();
        f.write_all(TRANSACTIONS_CSV.as_bytes()).unwrap();
        let mut f = fs::File::create(&asset_path).unwrap();
        f.write_all(ASSETS_CSV.as_bytes()).unwrap();
        let adapter = CsvStoreAdapter::new(txn_path, asset_path);
        (dir, adapter)
    }

    #[test]
    fn fetch_transactions_parses_all_rows() {
        let (_dir, adapter) = setup();
        let txns = adapter.fetch_transactions().unwrap();

        assert_eq!(txns.len(), 3);
        assert_eq!(txns[0].id, "t1");
        assert_eq!(txns[0].kind, TransactionType::Buy);
        assert_eq!(txns[0].asset_id.as_deref(), Some("a1"));
        assert_eq!(txns[0].quantity, 10.0);
        assert_eq!(txns[0].fee, 5.0);
    }

    #[test]
    fn blank_optional_columns_default_to_zero() {
        let (_dir, adapter) = setup();
        let txns = adapter.fetch_transactions().unwrap();

        assert_eq!(txns[1].fee, 0.0);
        assert_eq!(txns[1].amount, 0.0);
        assert_eq!(txns[2].quantity, 0.0);
        assert_eq!(txns[2].amount, 25.0);
    }

    #[test]
    fn blank_asset_id_becomes_none() {
        let (_dir, adapter) = setup();
        let txns = adapter.fetch_transactions().unwrap();
        assert_eq!(txns[2].asset_id, None);
    }

    #[test]
    fn blank_created_at_falls_back_to_trade_date_midnight() {
        let (_dir, adapter) = setup();
        let txns = adapter.fetch_transactions().unwrap();
        assert_eq!(
            txns[1].created_at,
            txns[1].trade_date.and_hms_opt(0, 0, 0).unwrap()
        );
    }

    #[test]
    fn fetch_assets_keys_by_asset_id() {
        let (_dir, adapter) = setup();
        let assets = adapter.fetch_assets().unwrap();

        assert_eq!(assets.len(), 2);
        assert_eq!(assets["a1"].symbol, "VTI");
        assert_eq!(assets["a2"].name, "Vanguard Total Bond Market ETF");
    }

    #[test]
    fn unknown_type_is_an_error_with_row_number() {
        let bad = "\
id,type,asset_id,quantity,price,fee,amount,trade_date,created_at
t1,transfer,a1,10,100.0,,,2024-01-15,
";
        let err = parse_transactions(bad).unwrap_err();
        assert!(err.to_string().contains("row 2"));
        assert!(err.to_string().contains("unknown transaction type"));
    }

    #[test]
    fn bad_trade_date_is_an_error() {
        let bad = "\
id,type,asset_id,quantity,price,fee,amount,trade_date,created_at
t1,buy,a1,10,100.0,,,15/01/2024,
";
        assert!(parse_transactions(bad).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let adapter = CsvStoreAdapter::new(
            PathBuf::from("/nonexistent/transactions.csv"),
            PathBuf::from("/nonexistent/assets.csv"),
        );
        assert!(adapter.fetch_transactions().is_err());
        assert!(adapter.fetch_assets().is_err());
    }
}
