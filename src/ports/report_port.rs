//! Report rendering port trait.

use crate::domain::error::LotfolioError;
use crate::domain::valuation::{PortfolioSummary, ValuedHolding};

/// Port for rendering a computed portfolio to a displayable string.
pub trait ReportPort {
    fn render(
        &self,
        holdings: &[ValuedHolding],
        summary: &PortfolioSummary,
    ) -> Result<String, LotfolioError>;
}
