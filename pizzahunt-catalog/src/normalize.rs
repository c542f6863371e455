//! Maps untrusted recipe payloads into [`PizzaItem`]s.
//!
//! Every field is pulled out of the JSON by hand with an explicit default, so a
//! source that drops or retypes an optional field still yields a usable item.

use pizzahunt_shared::text::strip_html;
use serde_json::Value;
use std::collections::HashSet;

use crate::pricing::{PricingContext, PricingEngine};
use crate::product::PizzaItem;
use crate::rules::{CategoryContext, RuleEngine};

pub const DEFAULT_DESCRIPTION: &str = "A delicious pizza from our kitchen.";

/// The subset of a remote recipe record the catalog cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecipe {
    pub id: u64,
    pub title: String,
    pub image: Option<String>,
    pub summary: Option<String>,
    pub ready_in_minutes: Option<u32>,
    pub vegetarian: bool,
    pub very_popular: bool,
    pub instructions: Option<String>,
}

impl RawRecipe {
    /// Returns `None` when the record lacks a numeric `id` or a non-empty `title`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let id = value.get("id")?.as_u64()?;
        let title = value.get("title")?.as_str()?;
        if title.trim().is_empty() {
            return None;
        }

        Some(Self {
            id,
            title: title.to_string(),
            image: string_field(value, "image"),
            summary: string_field(value, "summary"),
            ready_in_minutes: value
                .get("readyInMinutes")
                .and_then(Value::as_u64)
                .and_then(|m| u32::try_from(m).ok()),
            vegetarian: bool_field(value, "vegetarian"),
            very_popular: bool_field(value, "veryPopular"),
            instructions: string_field(value, "instructions"),
        })
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

fn bool_field(value: &Value, key: &str) -> bool {
    value.get(key).and_then(Value::as_bool).unwrap_or(false)
}

/// Category derivation plus pricing, applied record by record.
#[derive(Default)]
pub struct Normalizer {
    rules: RuleEngine,
    pricing: PricingEngine,
}

impl Normalizer {
    pub fn new(rules: RuleEngine, pricing: PricingEngine) -> Self {
        Self { rules, pricing }
    }

    pub fn normalize(&self, raw: RawRecipe) -> PizzaItem {
        let category = self.rules.derive(&CategoryContext {
            title: &raw.title,
            vegetarian: raw.vegetarian,
            very_popular: raw.very_popular,
        });

        let price = self.pricing.price(&PricingContext {
            category: category.label(),
            prep_minutes: raw.ready_in_minutes,
        });

        let description = raw
            .summary
            .as_deref()
            .map(strip_html)
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

        PizzaItem {
            id: raw.id,
            title: raw.title,
            image: raw.image.unwrap_or_default(),
            description,
            category: category.label().to_string(),
            price,
            ready_in_minutes: raw.ready_in_minutes.unwrap_or(0),
            instructions: raw.instructions.as_deref().map(strip_html).unwrap_or_default(),
        }
    }

    /// Normalizes a batch of records, skipping unusable ones and repeated ids.
    pub fn normalize_all(&self, records: &[Value]) -> Vec<PizzaItem> {
        let mut seen = HashSet::new();
        let mut items = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            let Some(raw) = RawRecipe::from_value(record) else {
                tracing::warn!(index, "Skipping recipe without id or title");
                continue;
            };

            if !seen.insert(raw.id) {
                tracing::debug!(id = raw.id, "Skipping duplicate recipe id");
                continue;
            }

            items.push(self.normalize(raw));
        }

        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_record() {
        let record = json!({
            "id": 654812,
            "title": "Pesto Pizza",
            "image": "https://img.spoonacular.com/recipes/654812-312x231.jpg",
            "summary": "A <b>fresh</b> pizza&nbsp;with basil.",
            "readyInMinutes": 30,
            "vegetarian": false,
            "veryPopular": false,
            "instructions": "<ol><li>Bake.</li></ol>"
        });

        let raw = RawRecipe::from_value(&record).unwrap();
        let item = Normalizer::default().normalize(raw);

        assert_eq!(item.id, 654812);
        assert_eq!(item.category, "Gourmet");
        assert_eq!(item.price, 136000);
        assert_eq!(item.description, "A fresh pizza with basil.");
        assert_eq!(item.instructions, "Bake.");
        assert_eq!(item.ready_in_minutes, 30);
    }

    #[test]
    fn test_minimal_record_uses_defaults() {
        let raw = RawRecipe::from_value(&json!({ "id": 1, "title": "Hawaiian" })).unwrap();
        let item = Normalizer::default().normalize(raw);

        assert_eq!(item.description, DEFAULT_DESCRIPTION);
        assert_eq!(item.instructions, "");
        assert_eq!(item.image, "");
        assert_eq!(item.ready_in_minutes, 0);
        assert_eq!(item.category, "Signature");
        // prep time falls back to 20 minutes for pricing only
        assert_eq!(item.price, 95000 + 8000);
    }

    #[test]
    fn test_summary_with_only_markup_gets_default_phrase() {
        let raw = RawRecipe::from_value(&json!({
            "id": 2,
            "title": "Veggie",
            "summary": "<p> </p>",
            "vegetarian": true
        }))
        .unwrap();
        let item = Normalizer::default().normalize(raw);

        assert_eq!(item.description, DEFAULT_DESCRIPTION);
        assert_eq!(item.category, "Vegetarian");
    }

    #[test]
    fn test_mistyped_optional_fields_fall_back() {
        let raw = RawRecipe::from_value(&json!({
            "id": 3,
            "title": "Classic Margherita",
            "readyInMinutes": "soon",
            "vegetarian": "yes",
            "image": null
        }))
        .unwrap();

        assert_eq!(raw.ready_in_minutes, None);
        assert!(!raw.vegetarian);
        assert_eq!(raw.image, None);
    }

    #[test]
    fn test_record_without_id_or_title_is_rejected() {
        assert!(RawRecipe::from_value(&json!({ "title": "No id" })).is_none());
        assert!(RawRecipe::from_value(&json!({ "id": 4 })).is_none());
        assert!(RawRecipe::from_value(&json!({ "id": 4, "title": "  " })).is_none());
        assert!(RawRecipe::from_value(&json!({ "id": -4, "title": "Negative" })).is_none());
        assert!(RawRecipe::from_value(&json!("not an object")).is_none());
    }

    #[test]
    fn test_normalize_all_skips_bad_and_duplicate_records() {
        let records = vec![
            json!({ "id": 10, "title": "Pepperoni" }),
            json!({ "title": "Broken" }),
            json!({ "id": 10, "title": "Pepperoni again" }),
            json!({ "id": 11, "title": "Funghi" }),
        ];

        let items = Normalizer::default().normalize_all(&records);
        let ids: Vec<u64> = items.iter().map(|i| i.id).collect();

        assert_eq!(ids, vec![10, 11]);
        assert_eq!(items[0].title, "Pepperoni");
    }
}
