use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::product::Category;

/// Pricing inputs for one normalized recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingContext<'a> {
    /// Category label the item was filed under
    pub category: &'a str,

    /// Preparation time reported by the source, if any
    pub prep_minutes: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Base price per category label (smallest currency unit)
    pub base_prices: HashMap<String, u32>,

    /// Base price for labels missing from `base_prices`
    pub default_base_price: u32,

    /// Prep time assumed when the source omits it
    pub default_prep_minutes: u32,

    /// Minutes included in the base price
    pub premium_threshold_minutes: u32,

    /// Upper bound on billable extra minutes
    pub premium_cap_minutes: u32,

    /// Surcharge per billable minute
    pub premium_per_minute: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_prices: {
                let mut m = HashMap::new();
                m.insert(Category::Vegetarian.label().to_string(), 78000);
                m.insert(Category::MeatLover.label().to_string(), 105000);
                m.insert(Category::Gourmet.label().to_string(), 120000);
                m.insert(Category::Classic.label().to_string(), 89000);
                m.insert(Category::ChefSpecial.label().to_string(), 110000);
                m.insert(Category::Signature.label().to_string(), 95000);
                m
            },
            default_base_price: 90000,
            default_prep_minutes: 20,
            premium_threshold_minutes: 10,
            premium_cap_minutes: 40,
            premium_per_minute: 800,
        }
    }
}

/// Deterministic catalog pricing: category base price plus a prep-time premium
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn base_price(&self, category: &str) -> u32 {
        self.config
            .base_prices
            .get(category)
            .copied()
            .unwrap_or(self.config.default_base_price)
    }

    /// Surcharge for recipes that take longer than the threshold, clamped to the cap
    pub fn premium(&self, prep_minutes: Option<u32>) -> u32 {
        let minutes = prep_minutes.unwrap_or(self.config.default_prep_minutes);
        let billable = minutes
            .saturating_sub(self.config.premium_threshold_minutes)
            .min(self.config.premium_cap_minutes);

        billable * self.config.premium_per_minute
    }

    pub fn price(&self, context: &PricingContext<'_>) -> u32 {
        self.base_price(context.category) + self.premium(context.prep_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gourmet_thirty_minutes() {
        let engine = PricingEngine::default();
        let price = engine.price(&PricingContext {
            category: "Gourmet",
            prep_minutes: Some(30),
        });

        assert_eq!(price, 136000);
    }

    #[test]
    fn test_premium_is_clamped() {
        let engine = PricingEngine::default();

        assert_eq!(engine.premium(Some(5)), 0);
        assert_eq!(engine.premium(Some(10)), 0);
        assert_eq!(engine.premium(Some(50)), 32000);
        assert_eq!(engine.premium(Some(180)), 32000);
    }

    #[test]
    fn test_missing_prep_time_defaults_to_twenty_minutes() {
        let engine = PricingEngine::default();
        let price = engine.price(&PricingContext {
            category: "Signature",
            prep_minutes: None,
        });

        assert_eq!(price, 95000 + 8000);
    }

    #[test]
    fn test_unknown_category_uses_default_base() {
        let engine = PricingEngine::default();
        assert_eq!(engine.base_price("Spicy"), 90000);
        assert_eq!(engine.base_price("Vegetarian"), 78000);
    }
}
