use serde::{Deserialize, Serialize};

/// What the storefront hands the cart when a pizza is picked
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItemPayload {
    pub id: u64,
    pub name: String,
    pub price: u32,
    pub image: String,
}

/// One cart entry. Unit price and name are fixed when the line is created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    pub id: u64,
    pub name: String,
    pub price: u32,
    pub image: String,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(payload: CartItemPayload) -> Self {
        Self {
            id: payload.id,
            name: payload.name,
            price: payload.price,
            image: payload.image,
            quantity: 1,
        }
    }

    /// Unit price times quantity
    pub fn line_total(&self) -> u64 {
        u64::from(self.price) * u64::from(self.quantity)
    }
}
