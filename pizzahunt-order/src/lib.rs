pub mod cart;
pub mod models;
pub mod totals;

pub use cart::CartAggregate;
pub use models::{CartItemPayload, CartLine};
pub use totals::{CartTotals, DELIVERY_FEE, TAX_RATE_PERCENT};
