#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use lotfolio::domain::asset::AssetInfo;
use lotfolio::domain::error::LotfolioError;
use lotfolio::domain::transaction::{Transaction, TransactionType};
use lotfolio::ports::store_port::StorePort;
use std::collections::HashMap;

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn at_hour(s: &str, hour: u32) -> NaiveDateTime {
    date(s).and_hms_opt(hour, 0, 0).unwrap()
}

pub fn buy(id: &str, asset: &str, quantity: f64, price: f64, fee: f64, day: &str) -> Transaction {
    buy_at(id, asset, quantity, price, fee, day, 10)
}

pub fn buy_at(
    id: &str,
    asset: &str,
    quantity: f64,
    price: f64,
    fee: f64,
    day: &str,
    hour: u32,
) -> Transaction {
    Transaction {
        id: id.into(),
        kind: TransactionType::Buy,
        asset_id: Some(asset.into()),
        quantity,
        price,
        fee,
        amount: 0.0,
        trade_date: date(day),
        created_at: at_hour(day, hour),
    }
}

pub fn sell(id: &str, asset: &str, quantity: f64, price: f64, fee: f64, day: &str) -> Transaction {
    Transaction {
        kind: TransactionType::Sell,
        ..buy(id, asset, quantity, price, fee, day)
    }
}

pub fn split(id: &str, asset: &str, ratio: f64, day: &str) -> Transaction {
    Transaction {
        kind: TransactionType::Split,
        ..buy(id, asset, ratio, 0.0, 0.0, day)
    }
}

pub fn dividend(id: &str, asset: Option<&str>, amount: f64, day: &str) -> Transaction {
    Transaction {
        id: id.into(),
        kind: TransactionType::Dividend,
        asset_id: asset.map(String::from),
        quantity: 0.0,
        price: 0.0,
        fee: 0.0,
        amount,
        trade_date: date(day),
        created_at: at_hour(day, 10),
    }
}

pub fn standalone_fee(id: &str, amount: f64, day: &str) -> Transaction {
    Transaction {
        kind: TransactionType::Fee,
        ..dividend(id, None, amount, day)
    }
}

pub fn sample_assets() -> HashMap<String, AssetInfo> {
    let mut assets = HashMap::new();
    assets.insert(
        "a1".to_string(),
        AssetInfo {
            symbol: "VTI".into(),
            name: "Vanguard Total Stock Market ETF".into(),
        },
    );
    assets.insert(
        "a2".to_string(),
        AssetInfo {
            symbol: "BND".into(),
            name: "Vanguard Total Bond Market ETF".into(),
        },
    );
    assets
}

pub struct MockStore {
    pub transactions: Vec<Transaction>,
    pub assets: HashMap<String, AssetInfo>,
    pub error: Option<String>,
}

impl MockStore {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            assets: sample_assets(),
            error: None,
        }
    }

    pub fn with_transactions(mut self, transactions: Vec<Transaction>) -> Self {
        self.transactions = transactions;
        self
    }

    pub fn with_error(mut self, reason: &str) -> Self {
        self.error = Some(reason.to_string());
        self
    }
}

impl StorePort for MockStore {
    fn fetch_transactions(&self) -> Result<Vec<Transaction>, LotfolioError> {
        if let Some(reason) = &self.error {
            return Err(LotfolioError::Store {
                reason: reason.clone(),
            });
        }
        Ok(self.transactions.clone())
    }

    fn fetch_assets(&self) -> Result<HashMap<String, AssetInfo>, LotfolioError> {
        if let Some(reason) = &self.error {
            return Err(LotfolioError::Store {
                reason: reason.clone(),
            });
        }
        Ok(self.assets.clone())
    }
}
