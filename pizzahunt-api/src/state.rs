use pizzahunt_catalog::CatalogEngine;
use pizzahunt_order::CartAggregate;
use std::sync::Arc;
use tokio::sync::Mutex;

/// The single session: one catalog engine and one cart, each with its own lock.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogEngine>,
    pub cart: Arc<Mutex<CartAggregate>>,
}

impl AppState {
    pub fn new(catalog: CatalogEngine) -> Self {
        Self {
            catalog: Arc::new(catalog),
            cart: Arc::new(Mutex::new(CartAggregate::new())),
        }
    }
}
