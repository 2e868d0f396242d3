//! Purchase lots: discrete batches of units retained at acquisition cost.

use chrono::NaiveDate;

/// One batch of purchased units. Quantity shrinks in place as sells consume
/// it; splits rescale quantity and per-unit cost together.
#[derive(Debug, Clone, PartialEq)]
pub struct Lot {
    pub quantity: f64,
    /// Includes the proportional share of the acquisition fee.
    pub cost_per_unit: f64,
    pub purchase_date: NaiveDate,
    /// Originating buy, for traceability only.
    pub transaction_id: String,
}

impl Lot {
    /// Remaining cost carried by this lot.
    pub fn cost(&self) -> f64 {
        self.quantity * self.cost_per_unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_is_quantity_times_unit_cost() {
        let lot = Lot {
            quantity: 8.0,
            cost_per_unit: 102.0,
            purchase_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            transaction_id: "t1".into(),
        };
        assert!((lot.cost() - 816.0).abs() < f64::EPSILON);
    }
}
