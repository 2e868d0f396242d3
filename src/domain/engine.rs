//! The lot accounting engine: full replay of a transaction history into
//! per-asset holdings.
//!
//! Pure and deterministic: no I/O, no shared state, identical input yields
//! identical output. Any change to the transaction list means a fresh replay;
//! there is no incremental update path.

use std::collections::HashMap;

use super::asset::AssetInfo;
use super::holding::{Holding, Position};
use super::transaction::{Transaction, TransactionType};

/// Replay an unordered transaction history and return the open holdings.
///
/// Transactions are ordered by `(trade_date, created_at)` before replay;
/// the tie-breaker matters, two same-day buys must become lots in entry
/// order. Transactions with a missing or unresolvable `asset_id` are
/// skipped, as are dividend/fee/interest records (they never touch lots).
/// Output order is unspecified; callers sort for display.
pub fn compute_holdings(
    transactions: &[Transaction],
    assets: &HashMap<String, AssetInfo>,
) -> Vec<Holding> {
    let mut ordered: Vec<&Transaction> = transactions.iter().collect();
    ordered.sort_by_key(|txn| txn.sort_key());

    let mut positions: HashMap<String, Position> = HashMap::new();

    for txn in ordered {
        match txn.kind {
            TransactionType::Buy | TransactionType::Sell | TransactionType::Split => {}
            // Cash-level events: no lot effect.
            TransactionType::Dividend | TransactionType::Fee | TransactionType::Interest => {
                continue
            }
        }

        let Some(asset_id) = txn.asset_id.as_deref().filter(|id| !id.is_empty()) else {
            continue;
        };
        let Some(info) = assets.get(asset_id) else {
            // Cannot report a symbol we cannot name.
            continue;
        };

        let position = positions
            .entry(asset_id.to_string())
            .or_insert_with(|| Position::new(asset_id, info));

        match txn.kind {
            TransactionType::Buy => position.apply_buy(txn),
            TransactionType::Sell => position.apply_sell(txn),
            TransactionType::Split => {
                // Zero/absent or negative ratio means identity, never a
                // division by zero.
                let ratio = if txn.quantity > 0.0 { txn.quantity } else { 1.0 };
                position.apply_split(ratio);
            }
            _ => unreachable!(),
        }
    }

    // Positions are kept through the whole fold (realized P&L survives a
    // close-then-reopen); closed ones are dropped only here.
    positions
        .into_values()
        .filter(Position::is_open)
        .map(|position| position.to_holding())
        .collect()
}
