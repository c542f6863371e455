use async_trait::async_trait;
use pizzahunt_shared::Masked;
use serde_json::Value;

/// Parameters of one outbound recipe search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeQuery {
    pub query: String,
    pub number: u32,
    pub add_recipe_information: bool,
    pub api_key: Masked<String>,
}

/// Port to the third-party recipe search.
///
/// Implementations return the raw response body; shape validation and
/// normalization happen in the catalog engine.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    async fn search(&self, query: &RecipeQuery) -> Result<Value, CatalogError>;
}

/// Catalog refresh failures. None of these reach callers of
/// `CatalogEngine::fetch_catalog`; they end up as the state's error message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Recipe API key is not configured")]
    MissingApiKey,

    #[error("Recipe source request failed: {0}")]
    Transport(String),

    #[error("Recipe source returned an unexpected payload: {0}")]
    MalformedResponse(String),

    #[error("Recipe source returned no usable pizzas")]
    EmptyResult,
}
