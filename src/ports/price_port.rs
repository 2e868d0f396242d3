//! Price source port trait.

use crate::domain::error::LotfolioError;
use std::collections::HashMap;

/// Latest known prices keyed by symbol. Symbols the source cannot price are
/// simply absent from the result; the valuation layer passes them through
/// unvalued.
pub trait PricePort {
    fn latest_prices(&self, symbols: &[String]) -> Result<HashMap<String, f64>, LotfolioError>;
}
