//! Transaction records, the immutable input stream of the lot engine.

use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;
use std::str::FromStr;

/// Kind of a recorded transaction.
///
/// `Buy`/`Sell`/`Split` act on an asset's lots; `Dividend`/`Fee`/`Interest`
/// are cash-level events that never touch lot structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    Buy,
    Sell,
    Dividend,
    Fee,
    Interest,
    Split,
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "buy" => Ok(TransactionType::Buy),
            "sell" => Ok(TransactionType::Sell),
            "dividend" => Ok(TransactionType::Dividend),
            "fee" => Ok(TransactionType::Fee),
            "interest" => Ok(TransactionType::Interest),
            "split" => Ok(TransactionType::Split),
            other => Err(format!("unknown transaction type: {}", other)),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransactionType::Buy => "buy",
            TransactionType::Sell => "sell",
            TransactionType::Dividend => "dividend",
            TransactionType::Fee => "fee",
            TransactionType::Interest => "interest",
            TransactionType::Split => "split",
        };
        f.write_str(s)
    }
}

/// A single recorded transaction. Never mutated once constructed.
///
/// Optional numeric fields default to 0.0; `asset_id` is absent for
/// account-level dividend/fee/interest records.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub kind: TransactionType,
    pub asset_id: Option<String>,
    /// Traded unit count for buy/sell; the ratio for split.
    pub quantity: f64,
    /// Per-unit trade price for buy/sell.
    pub price: f64,
    pub fee: f64,
    /// Cash amount for standalone fee/dividend/interest records.
    pub amount: f64,
    pub trade_date: NaiveDate,
    /// Tie-breaker when two transactions share a trade_date.
    pub created_at: NaiveDateTime,
}

impl Transaction {
    /// Economic event order: trade date first, entry order second.
    pub fn sort_key(&self) -> (NaiveDate, NaiveDateTime) {
        (self.trade_date, self.created_at)
    }
}
