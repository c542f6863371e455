pub mod engine;
pub mod fallback;
pub mod normalize;
pub mod pricing;
pub mod product;
pub mod rules;
pub mod source;

pub use engine::{CatalogEngine, CatalogSettings, CatalogSource, CatalogState, ALL_CATEGORIES};
pub use fallback::fallback_catalog;
pub use normalize::{Normalizer, RawRecipe};
pub use pricing::{PricingConfig, PricingContext, PricingEngine};
pub use product::{Category, PizzaItem};
pub use rules::RuleEngine;
pub use source::{CatalogError, RecipeQuery, RecipeSource};
