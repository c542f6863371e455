use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use chrono::{DateTime, Utc};
use pizzahunt_catalog::{CatalogSource, CatalogState, PizzaItem};
use pizzahunt_shared::collapse_text;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

/// Card titles longer than this are shortened with an ellipsis
const CARD_TITLE_LIMIT: usize = 30;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCard {
    #[serde(flatten)]
    pub item: PizzaItem,
    pub short_title: String,
}

impl From<PizzaItem> for MenuCard {
    fn from(item: PizzaItem) -> Self {
        Self {
            short_title: collapse_text(&item.title, CARD_TITLE_LIMIT),
            item,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuResponse {
    pub items: Vec<MenuCard>,
    pub categories: Vec<String>,
    pub catalog_size: usize,
    pub loading: bool,
    pub error: Option<String>,
    pub source: CatalogSource,
    pub search_query: String,
    pub selected_category: String,
    pub last_refreshed_at: Option<DateTime<Utc>>,
}

impl From<CatalogState> for MenuResponse {
    fn from(state: CatalogState) -> Self {
        Self {
            items: state.filtered_items().into_iter().map(MenuCard::from).collect(),
            categories: state.categories(),
            catalog_size: state.items.len(),
            loading: state.loading,
            error: state.error,
            source: state.source,
            search_query: state.search_query,
            selected_category: state.selected_category,
            last_refreshed_at: state.last_refreshed_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub category: String,
}

// ============================================================================
// Handlers
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/menu", get(get_menu))
        .route("/v1/menu/categories", get(get_categories))
        .route("/v1/menu/items/{id}", get(get_item))
        .route("/v1/menu/refresh", post(refresh_menu))
        .route("/v1/menu/search", put(set_search))
        .route("/v1/menu/category", put(set_category))
}

/// GET /v1/menu
/// Filtered menu plus the catalog status
pub async fn get_menu(State(state): State<AppState>) -> Json<MenuResponse> {
    Json(state.catalog.snapshot().await.into())
}

/// GET /v1/menu/categories
pub async fn get_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.categories().await)
}

/// GET /v1/menu/items/:id
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<MenuCard>, AppError> {
    let item = state
        .catalog
        .item(id)
        .await
        .ok_or_else(|| AppError::NotFoundError(format!("Pizza {} is not on the menu", id)))?;

    Ok(Json(item.into()))
}

/// POST /v1/menu/refresh
/// Reloads the catalog from the recipe source; failures land in `error`
pub async fn refresh_menu(State(state): State<AppState>) -> Json<MenuResponse> {
    let items = state.catalog.fetch_catalog().await;
    tracing::info!(count = items.len(), "Menu refreshed");

    Json(state.catalog.snapshot().await.into())
}

/// PUT /v1/menu/search
pub async fn set_search(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Json<MenuResponse> {
    state.catalog.set_search_query(req.query).await;
    Json(state.catalog.snapshot().await.into())
}

/// PUT /v1/menu/category
pub async fn set_category(
    State(state): State<AppState>,
    Json(req): Json<CategoryRequest>,
) -> Json<MenuResponse> {
    state.catalog.set_category(req.category).await;
    Json(state.catalog.snapshot().await.into())
}
