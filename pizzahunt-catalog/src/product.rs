use serde::{Deserialize, Serialize};
use std::fmt;

/// Categories the normalization pipeline can derive for a remote recipe.
///
/// Fallback items may carry other hand-authored labels, which is why
/// [`PizzaItem::category`] stays a plain string.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "Vegetarian")]
    Vegetarian,
    #[serde(rename = "Meat Lover")]
    MeatLover,
    #[serde(rename = "Gourmet")]
    Gourmet,
    #[serde(rename = "Classic")]
    Classic,
    #[serde(rename = "Chef Special")]
    ChefSpecial,
    #[serde(rename = "Signature")]
    Signature,
}

impl Category {
    /// Display label, also the value stored on [`PizzaItem::category`].
    pub fn label(&self) -> &'static str {
        match self {
            Category::Vegetarian => "Vegetarian",
            Category::MeatLover => "Meat Lover",
            Category::Gourmet => "Gourmet",
            Category::Classic => "Classic",
            Category::ChefSpecial => "Chef Special",
            Category::Signature => "Signature",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A purchasable catalog entry. Prices are in the smallest currency unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PizzaItem {
    pub id: u64,
    pub title: String,
    pub image: String,
    pub description: String,
    pub category: String,
    pub price: u32,
    pub ready_in_minutes: u32,
    pub instructions: String,
}

impl PizzaItem {
    /// Case-insensitive substring match on title or description.
    /// `needle` must already be lowercase.
    pub fn matches_query(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}
