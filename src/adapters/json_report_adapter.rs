//! JSON report rendering, for piping into other tools.

use crate::domain::error::LotfolioError;
use crate::domain::valuation::{PortfolioSummary, ValuedHolding};
use crate::ports::report_port::ReportPort;
use serde::Serialize;

pub struct JsonReportAdapter;

#[derive(Serialize)]
struct ReportDocument<'a> {
    holdings: &'a [ValuedHolding],
    summary: &'a PortfolioSummary,
}

impl ReportPort for JsonReportAdapter {
    fn render(
        &self,
        holdings: &[ValuedHolding],
        summary: &PortfolioSummary,
    ) -> Result<String, LotfolioError> {
        serde_json::to_string_pretty(&ReportDocument { holdings, summary }).map_err(|e| {
            LotfolioError::Report {
                reason: e.to_string(),
            }
        })
    }
}
