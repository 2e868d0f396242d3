//! Market valuation of computed holdings and portfolio-level totals.

use serde::Serialize;
use std::collections::HashMap;

use super::holding::Holding;

/// A holding enriched with a last known price. Holdings without a price
/// pass through unvalued rather than being dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValuedHolding {
    #[serde(flatten)]
    pub holding: Holding,
    pub last_price: Option<f64>,
    pub market_value: f64,
    pub unrealized_pnl: f64,
}

/// Attach prices (keyed by symbol) to holdings.
pub fn value_holdings(
    holdings: Vec<Holding>,
    prices: &HashMap<String, f64>,
) -> Vec<ValuedHolding> {
    holdings
        .into_iter()
        .map(|holding| match prices.get(&holding.symbol).copied() {
            Some(price) => {
                let market_value = holding.quantity * price;
                ValuedHolding {
                    unrealized_pnl: market_value - holding.cost_basis,
                    market_value,
                    last_price: Some(price),
                    holding,
                }
            }
            None => ValuedHolding {
                holding,
                last_price: None,
                market_value: 0.0,
                unrealized_pnl: 0.0,
            },
        })
        .collect()
}

/// Portfolio-level totals over the valued holdings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub invested_amount: f64,
    pub cost_basis: f64,
    /// Sum over priced holdings only.
    pub market_value: f64,
    pub realized_pnl: f64,
    pub unrealized_pnl: f64,
}

impl PortfolioSummary {
    pub fn compute(valued: &[ValuedHolding], invested_amount: f64) -> Self {
        let mut cost_basis = 0.0;
        let mut market_value = 0.0;
        let mut realized_pnl = 0.0;
        let mut unrealized_pnl = 0.0;

        for vh in valued {
            cost_basis += vh.holding.cost_basis;
            realized_pnl += vh.holding.realized_pnl;
            if vh.last_price.is_some() {
                market_value += vh.market_value;
                unrealized_pnl += vh.unrealized_pnl;
            }
        }

        PortfolioSummary {
            invested_amount,
            cost_basis,
            market_value,
            realized_pnl,
            unrealized_pnl,
        }
    }
}
