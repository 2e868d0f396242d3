//! Plain-text console report: aligned holdings table plus a summary block.

use crate::domain::error::LotfolioError;
use crate::domain::valuation::{PortfolioSummary, ValuedHolding};
use crate::ports::report_port::ReportPort;

pub struct TextReportAdapter;

fn money(value: f64) -> String {
    format!("{:.2}", value)
}

fn opt_money(value: Option<f64>) -> String {
    value.map(money).unwrap_or_else(|| "-".to_string())
}

impl ReportPort for TextReportAdapter {
    fn render(
        &self,
        holdings: &[ValuedHolding],
        summary: &PortfolioSummary,
    ) -> Result<String, LotfolioError> {
        let mut out = String::new();

        out.push_str(&format!(
            "{:<8} {:>12} {:>10} {:>12} {:>10} {:>12} {:>12} {:>12}\n",
            "SYMBOL",
            "QUANTITY",
            "AVG COST",
            "COST BASIS",
            "PRICE",
            "MKT VALUE",
            "UNREALIZED",
            "REALIZED"
        ));

        for vh in holdings {
            let h = &vh.holding;
            let (mkt, unreal) = if vh.last_price.is_some() {
                (money(vh.market_value), money(vh.unrealized_pnl))
            } else {
                ("-".to_string(), "-".to_string())
            };
            out.push_str(&format!(
                "{:<8} {:>12.4} {:>10} {:>12} {:>10} {:>12} {:>12} {:>12}\n",
                h.symbol,
                h.quantity,
                money(h.avg_cost),
                money(h.cost_basis),
                opt_money(vh.last_price),
                mkt,
                unreal,
                money(h.realized_pnl),
            ));
        }

        out.push('\n');
        out.push_str(&format!("Invested amount:  {}\n", money(summary.invested_amount)));
        out.push_str(&format!("Cost basis:       {}\n", money(summary.cost_basis)));
        out.push_str(&format!("Market value:     {}\n", money(summary.market_value)));
        out.push_str(&format!("Realized P&L:     {}\n", money(summary.realized_pnl)));
        out.push_str(&format!("Unrealized P&L:   {}\n", money(summary.unrealized_pnl)));

        Ok(out)
    }
}
