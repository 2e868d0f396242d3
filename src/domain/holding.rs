//! Position state during replay and the Holding records projected from it.

use serde::Serialize;

use super::asset::AssetInfo;
use super::lot::Lot;
use super::transaction::Transaction;

/// Per-asset accumulation state while replaying transactions.
///
/// Lots live in an append-only arena; `front` marks the oldest lot still
/// open, so full FIFO consumption advances a cursor instead of removing
/// from the head of a vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub asset_id: String,
    pub symbol: String,
    pub name: String,
    pub quantity: f64,
    pub avg_cost: f64,
    pub cost_basis: f64,
    pub realized_pnl: f64,
    lots: Vec<Lot>,
    front: usize,
}

impl Position {
    pub fn new(asset_id: &str, info: &AssetInfo) -> Self {
        Position {
            asset_id: asset_id.to_string(),
            symbol: info.symbol.clone(),
            name: info.name.clone(),
            quantity: 0.0,
            avg_cost: 0.0,
            cost_basis: 0.0,
            realized_pnl: 0.0,
            lots: Vec::new(),
            front: 0,
        }
    }

    /// Lots not yet fully consumed, oldest first.
    pub fn open_lots(&self) -> &[Lot] {
        &self.lots[self.front..]
    }

    pub fn is_open(&self) -> bool {
        self.quantity > 0.0
    }

    /// Record a purchase: one new lot with the fee amortized across the
    /// purchased units. A non-positive quantity is a no-op.
    pub fn apply_buy(&mut self, txn: &Transaction) {
        if txn.quantity <= 0.0 {
            return;
        }
        let cost_per_unit = txn.price + txn.fee / txn.quantity;
        self.lots.push(Lot {
            quantity: txn.quantity,
            cost_per_unit,
            purchase_date: txn.trade_date,
            transaction_id: txn.id.clone(),
        });
        self.quantity += txn.quantity;
        self.cost_basis += txn.quantity * cost_per_unit;
        self.recompute_avg_cost();
    }

    /// Consume lots oldest-first. If lots run out before the requested
    /// quantity is satisfied, only the available quantity is sold; the
    /// position never goes negative.
    pub fn apply_sell(&mut self, txn: &Transaction) {
        if txn.quantity <= 0.0 {
            return;
        }
        let mut remaining = txn.quantity;
        let mut consumed_cost = 0.0;

        while remaining > 0.0 && self.front < self.lots.len() {
            let lot = &mut self.lots[self.front];
            if lot.quantity <= remaining {
                consumed_cost += lot.cost();
                remaining -= lot.quantity;
                lot.quantity = 0.0;
                self.front += 1;
            } else {
                consumed_cost += remaining * lot.cost_per_unit;
                lot.quantity -= remaining;
                remaining = 0.0;
            }
        }

        let sold = txn.quantity - remaining;
        let proceeds = sold * txn.price - txn.fee;
        self.quantity -= sold;
        self.cost_basis -= consumed_cost;
        self.realized_pnl += proceeds - consumed_cost;
        // No open lots means flat. The incremental totals can be left a few
        // ulps off zero when a sell consumes the lots exactly, and a dust
        // quantity here would leak a closed position into the output.
        if self.front == self.lots.len() {
            self.quantity = 0.0;
            self.cost_basis = 0.0;
        }
        self.recompute_avg_cost();
    }

    /// Scale open lot quantities by `ratio` and per-unit costs by its
    /// inverse. Cost basis is invariant; only quantity and avg_cost move.
    pub fn apply_split(&mut self, ratio: f64) {
        if ratio == 1.0 {
            return;
        }
        for lot in &mut self.lots[self.front..] {
            lot.quantity *= ratio;
            lot.cost_per_unit /= ratio;
        }
        self.quantity *= ratio;
        self.recompute_avg_cost();
    }

    /// avg_cost is always re-derived from the totals, never incrementally
    /// averaged, so it cannot drift from cost_basis over long histories.
    fn recompute_avg_cost(&mut self) {
        self.avg_cost = if self.quantity > 0.0 {
            self.cost_basis / self.quantity
        } else {
            0.0
        };
    }

    pub fn to_holding(&self) -> Holding {
        Holding {
            asset_id: self.asset_id.clone(),
            symbol: self.symbol.clone(),
            name: self.name.clone(),
            quantity: self.quantity,
            avg_cost: self.avg_cost,
            cost_basis: self.cost_basis,
            realized_pnl: self.realized_pnl,
        }
    }
}

/// An open holding as reported to callers. Lots stay internal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Holding {
    pub asset_id: String,
    pub symbol: String,
    pub name: String,
    pub quantity: f64,
    pub avg_cost: f64,
    pub cost_basis: f64,
    pub realized_pnl: f64,
}
