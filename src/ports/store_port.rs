//! Transaction store and asset directory port trait.

use crate::domain::asset::AssetInfo;
use crate::domain::error::LotfolioError;
use crate::domain::transaction::Transaction;
use std::collections::HashMap;

/// Supplies the complete transaction history for one account scope plus the
/// asset directory. The engine assumes there are no pagination gaps; a
/// partial history silently produces a wrong cost basis.
pub trait StorePort {
    fn fetch_transactions(&self) -> Result<Vec<Transaction>, LotfolioError>;

    fn fetch_assets(&self) -> Result<HashMap<String, AssetInfo>, LotfolioError>;
}
