use serde::Serialize;

use crate::models::{CartItemPayload, CartLine};
use crate::totals::{self, CartTotals, DELIVERY_FEE};

/// The session's shopping cart.
///
/// Lines keep insertion order and there is at most one line per id. Every
/// operation accepts any input; unknown ids are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CartAggregate {
    lines: Vec<CartLine>,
}

impl CartAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit. A repeat add bumps the quantity and keeps the
    /// first-add name and price.
    pub fn add_item(&mut self, payload: CartItemPayload) {
        if let Some(line) = self.line_mut(payload.id) {
            line.quantity = line.quantity.saturating_add(1);
            tracing::debug!(id = payload.id, quantity = line.quantity, "Cart line incremented");
        } else {
            tracing::debug!(id = payload.id, "Cart line added");
            self.lines.push(CartLine::new(payload));
        }
    }

    pub fn increase_quantity(&mut self, id: u64) {
        if let Some(line) = self.line_mut(id) {
            line.quantity = line.quantity.saturating_add(1);
            tracing::debug!(id, quantity = line.quantity, "Cart line increased");
        }
    }

    /// Drops one unit; a line at quantity 1 is removed instead.
    pub fn decrease_quantity(&mut self, id: u64) {
        let Some(line) = self.line_mut(id) else {
            return;
        };

        if line.quantity > 1 {
            line.quantity -= 1;
            tracing::debug!(id, quantity = line.quantity, "Cart line decreased");
        } else {
            self.remove_item(id);
        }
    }

    pub fn remove_item(&mut self, id: u64) {
        let before = self.lines.len();
        self.lines.retain(|line| line.id != id);
        if self.lines.len() != before {
            tracing::debug!(id, "Cart line removed");
        }
    }

    pub fn clear_cart(&mut self) {
        tracing::debug!(lines = self.lines.len(), "Cart cleared");
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: u64) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn subtotal(&self) -> u64 {
        totals::subtotal(&self.lines)
    }

    pub fn tax(&self) -> f64 {
        totals::tax(self.subtotal())
    }

    pub fn delivery_fee(&self) -> u64 {
        DELIVERY_FEE
    }

    pub fn grand_total(&self) -> f64 {
        self.subtotal() as f64 + self.tax() + self.delivery_fee() as f64
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals::from_lines(&self.lines)
    }

    fn line_mut(&mut self, id: u64) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.id == id)
    }
}
