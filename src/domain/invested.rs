//! Net invested capital, a pure sum independent of lot mechanics.

use super::transaction::{Transaction, TransactionType};

/// Net cash put into the portfolio: buys add `quantity * price + fee`,
/// sells subtract `quantity * price - fee` (the sell fee stays a cost),
/// standalone fees add their amount. Order-independent.
///
/// Deliberately not derived from lot state: a full sell-and-rebuy at a new
/// price resets cost basis but leaves this number where it was.
pub fn compute_invested_amount(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .map(|txn| match txn.kind {
            TransactionType::Buy => txn.quantity * txn.price + txn.fee,
            TransactionType::Sell => -(txn.quantity * txn.price - txn.fee),
            TransactionType::Fee => {
                if txn.amount != 0.0 {
                    txn.amount
                } else {
                    txn.fee
                }
            }
            TransactionType::Dividend | TransactionType::Interest | TransactionType::Split => 0.0,
        })
        .sum()
}
