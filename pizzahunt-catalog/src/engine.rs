use chrono::{DateTime, Utc};
use pizzahunt_shared::Masked;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::fallback::fallback_catalog;
use crate::normalize::Normalizer;
use crate::product::PizzaItem;
use crate::source::{CatalogError, RecipeQuery, RecipeSource};

/// Category filter value that matches every item.
pub const ALL_CATEGORIES: &str = "All";

/// Where the active catalog came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CatalogSource {
    Fallback,
    Remote,
}

/// Settings for the outbound recipe search
#[derive(Debug, Clone)]
pub struct CatalogSettings {
    pub api_key: Option<Masked<String>>,
    pub query: String,
    pub number: u32,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            query: "pizza".to_string(),
            number: 24,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogState {
    pub items: Vec<PizzaItem>,
    pub loading: bool,
    pub error: Option<String>,
    pub search_query: String,
    pub selected_category: String,
    pub source: CatalogSource,
    pub last_refreshed_at: Option<DateTime<Utc>>,
}

impl CatalogState {
    pub fn new(items: Vec<PizzaItem>) -> Self {
        Self {
            items,
            loading: false,
            error: None,
            search_query: String::new(),
            selected_category: ALL_CATEGORIES.to_string(),
            source: CatalogSource::Fallback,
            last_refreshed_at: None,
        }
    }

    /// Items matching both the search query and the selected category
    pub fn filtered_items(&self) -> Vec<PizzaItem> {
        let needle = self.search_query.to_lowercase();
        let any_category = self.selected_category == ALL_CATEGORIES;

        self.items
            .iter()
            .filter(|item| item.matches_query(&needle))
            .filter(|item| any_category || item.category == self.selected_category)
            .cloned()
            .collect()
    }

    /// "All" followed by each distinct category in first-seen order
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for item in &self.items {
            if !categories.contains(&item.category) {
                categories.push(item.category.clone());
            }
        }
        categories
    }
}

/// Owns the product catalog and its search/category view.
///
/// The state sits behind an async `RwLock` that is released while the
/// recipe source is awaited, so readers keep seeing the previous catalog
/// with `loading = true` until the fetch lands. Overlapping fetches are not
/// coalesced: whichever finishes last wins.
pub struct CatalogEngine {
    source: Arc<dyn RecipeSource>,
    settings: CatalogSettings,
    fallback: Vec<PizzaItem>,
    normalizer: Normalizer,
    state: RwLock<CatalogState>,
}

impl CatalogEngine {
    pub fn new(source: Arc<dyn RecipeSource>, settings: CatalogSettings) -> Self {
        Self::with_fallback(source, settings, fallback_catalog())
    }

    pub fn with_fallback(
        source: Arc<dyn RecipeSource>,
        settings: CatalogSettings,
        fallback: Vec<PizzaItem>,
    ) -> Self {
        Self {
            source,
            settings,
            state: RwLock::new(CatalogState::new(fallback.clone())),
            fallback,
            normalizer: Normalizer::default(),
        }
    }

    /// Refreshes the catalog from the recipe source, falling back to the
    /// built-in menu on any failure. Always resolves with the active catalog.
    pub async fn fetch_catalog(&self) -> Vec<PizzaItem> {
        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
        }

        let outcome = self.load_remote().await;

        let mut state = self.state.write().await;
        match outcome {
            Ok(items) => {
                tracing::info!(count = items.len(), "Catalog refreshed from recipe source");
                state.items = items;
                state.source = CatalogSource::Remote;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Catalog refresh failed, serving fallback menu");
                state.items = self.fallback.clone();
                state.source = CatalogSource::Fallback;
                state.error = Some(err.to_string());
            }
        }
        state.loading = false;
        state.last_refreshed_at = Some(Utc::now());

        state.items.clone()
    }

    async fn load_remote(&self) -> Result<Vec<PizzaItem>, CatalogError> {
        let api_key = self
            .settings
            .api_key
            .as_ref()
            .filter(|key| !key.expose().trim().is_empty())
            .ok_or(CatalogError::MissingApiKey)?;

        let query = RecipeQuery {
            query: self.settings.query.clone(),
            number: self.settings.number,
            add_recipe_information: true,
            api_key: api_key.clone(),
        };

        let payload = self.source.search(&query).await?;
        let records = extract_results(&payload)?;
        if records.is_empty() {
            return Err(CatalogError::EmptyResult);
        }

        let items = self.normalizer.normalize_all(records);
        if items.is_empty() {
            return Err(CatalogError::EmptyResult);
        }

        Ok(items)
    }

    pub async fn set_search_query(&self, query: impl Into<String>) {
        self.state.write().await.search_query = query.into();
    }

    pub async fn set_category(&self, category: impl Into<String>) {
        self.state.write().await.selected_category = category.into();
    }

    pub async fn snapshot(&self) -> CatalogState {
        self.state.read().await.clone()
    }

    pub async fn items(&self) -> Vec<PizzaItem> {
        self.state.read().await.items.clone()
    }

    pub async fn item(&self, id: u64) -> Option<PizzaItem> {
        self.state.read().await.items.iter().find(|item| item.id == id).cloned()
    }

    pub async fn filtered_items(&self) -> Vec<PizzaItem> {
        self.state.read().await.filtered_items()
    }

    pub async fn categories(&self) -> Vec<String> {
        self.state.read().await.categories()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }
}

/// Pulls the `results` list out of a search response. A missing list counts
/// as zero results; anything else that is not an array is malformed.
fn extract_results(payload: &Value) -> Result<&[Value], CatalogError> {
    let object = payload
        .as_object()
        .ok_or_else(|| CatalogError::MalformedResponse("response is not a JSON object".to_string()))?;

    match object.get("results") {
        None | Some(Value::Null) => Ok(&[][..]),
        Some(Value::Array(records)) => Ok(records.as_slice()),
        Some(_) => Err(CatalogError::MalformedResponse(
            "`results` is not a list".to_string(),
        )),
    }
}
