//! CSV price-list adapter: `symbol,price` rows, e.g. an exported NAV list.

use crate::domain::error::LotfolioError;
use crate::ports::price_port::PricePort;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

pub struct CsvPriceAdapter {
    path: PathBuf,
}

impl CsvPriceAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load_all(&self) -> Result<HashMap<String, f64>, LotfolioError> {
        let content = fs::read_to_string(&self.path).map_err(|e| LotfolioError::Price {
            reason: format!("failed to read {}: {}", self.path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut prices = HashMap::new();

        for (i, result) in rdr.records().enumerate() {
            let row = i + 2;
            let record = result.map_err(|e| LotfolioError::Price {
                reason: format!("CSV parse error: {}", e),
            })?;

            let symbol = record
                .get(0)
                .ok_or_else(|| LotfolioError::Price {
                    reason: format!("row {}: missing symbol column", row),
                })?
                .trim()
                .to_string();

            let price: f64 = record
                .get(1)
                .ok_or_else(|| LotfolioError::Price {
                    reason: format!("row {}: missing price column", row),
                })?
                .trim()
                .parse()
                .map_err(|e| LotfolioError::Price {
                    reason: format!("row {}: invalid price value: {}", row, e),
                })?;

            prices.insert(symbol, price);
        }

        Ok(prices)
    }
}

impl PricePort for CsvPriceAdapter {
    fn latest_prices(&self, symbols: &[String]) -> Result<HashMap<String, f64>, LotfolioError> {
        let mut all = self.load_all()?;
        Ok(symbols
            .iter()
            .filter_map(|s| all.remove(s).map(|p| (s.clone(), p)))
            .collect())
    }
}
