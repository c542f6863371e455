use serde::{Deserialize, Serialize};

use crate::models::CartLine;

/// Flat tax applied to the subtotal
pub const TAX_RATE_PERCENT: u32 = 10;

/// Charged on every order, including an empty cart
pub const DELIVERY_FEE: u64 = 15000;

/// Money figures derived from the current cart lines.
///
/// Tax is not rounded, so it and the grand total are `f64`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub total_items: u64,
    pub subtotal: u64,
    pub tax: f64,
    pub delivery_fee: u64,
    pub grand_total: f64,
}

impl CartTotals {
    pub fn from_lines(lines: &[CartLine]) -> Self {
        let total_items = lines.iter().map(|line| u64::from(line.quantity)).sum();
        let subtotal = subtotal(lines);
        let tax = tax(subtotal);

        Self {
            total_items,
            subtotal,
            tax,
            delivery_fee: DELIVERY_FEE,
            grand_total: subtotal as f64 + tax + DELIVERY_FEE as f64,
        }
    }
}

pub fn subtotal(lines: &[CartLine]) -> u64 {
    lines.iter().map(CartLine::line_total).sum()
}

/// `subtotal × 10%`, computed as `subtotal × 10 / 100` so whole-unit
/// subtotals give the correctly rounded float.
pub fn tax(subtotal: u64) -> f64 {
    (subtotal as f64 * f64::from(TAX_RATE_PERCENT)) / 100.0
}
