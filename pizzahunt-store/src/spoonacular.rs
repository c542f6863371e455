use async_trait::async_trait;
use pizzahunt_catalog::{CatalogError, RecipeQuery, RecipeSource};
use serde_json::Value;
use std::time::Duration;

use crate::app_config::SpoonacularConfig;

const SEARCH_PATH: &str = "/recipes/complexSearch";

/// `RecipeSource` backed by the Spoonacular recipe search API
#[derive(Clone)]
pub struct SpoonacularClient {
    http: reqwest::Client,
    base_url: String,
}

impl SpoonacularClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &SpoonacularConfig) -> Result<Self, reqwest::Error> {
        Self::new(&config.base_url, config.timeout())
    }

    fn search_url(&self) -> String {
        format!("{}{}", self.base_url, SEARCH_PATH)
    }
}

#[async_trait]
impl RecipeSource for SpoonacularClient {
    async fn search(&self, query: &RecipeQuery) -> Result<Value, CatalogError> {
        let number = query.number.to_string();
        let add_info = query.add_recipe_information.to_string();

        tracing::debug!(query = %query.query, number = query.number, "Searching recipes");

        let response = self
            .http
            .get(self.search_url())
            .query(&[
                ("query", query.query.as_str()),
                ("number", number.as_str()),
                ("addRecipeInformation", add_info.as_str()),
                ("apiKey", query.api_key.expose().as_str()),
            ])
            .send()
            .await
            .map_err(into_catalog_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Transport(format!(
                "recipe search answered HTTP {}",
                status
            )));
        }

        response.json::<Value>().await.map_err(into_catalog_error)
    }
}

/// The request URL carries the API key, so it is stripped before the error
/// is turned into a message.
fn into_catalog_error(err: reqwest::Error) -> CatalogError {
    let err = err.without_url();
    if err.is_decode() {
        CatalogError::MalformedResponse(err.to_string())
    } else {
        CatalogError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
    use pizzahunt_shared::Masked;
    use serde_json::json;
    use std::collections::HashMap;
    use std::net::SocketAddr;

    fn query() -> RecipeQuery {
        RecipeQuery {
            query: "pizza".to_string(),
            number: 24,
            add_recipe_information: true,
            api_key: Masked::new("secret-key".to_string()),
        }
    }

    async fn serve(router: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        addr
    }

    fn client(addr: SocketAddr) -> SpoonacularClient {
        SpoonacularClient::new(&format!("http://{}/", addr), Duration::from_secs(5)).unwrap()
    }

    async fn echo_search(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
        Json(json!({
            "results": [{ "id": 1, "title": "Echo" }],
            "params": params,
        }))
    }

    #[tokio::test]
    async fn test_search_sends_expected_parameters() {
        let addr = serve(Router::new().route(SEARCH_PATH, get(echo_search))).await;

        let body = client(addr).search(&query()).await.unwrap();

        assert_eq!(body["results"][0]["title"], "Echo");
        assert_eq!(body["params"]["query"], "pizza");
        assert_eq!(body["params"]["number"], "24");
        assert_eq!(body["params"]["addRecipeInformation"], "true");
        assert_eq!(body["params"]["apiKey"], "secret-key");
    }

    #[tokio::test]
    async fn test_error_status_is_transport_error() {
        let router = Router::new().route(
            SEARCH_PATH,
            get(|| async { (StatusCode::PAYMENT_REQUIRED, "quota exceeded") }),
        );
        let addr = serve(router).await;

        let err = client(addr).search(&query()).await.unwrap_err();

        assert!(matches!(err, CatalogError::Transport(ref msg) if msg.contains("402")));
    }

    #[tokio::test]
    async fn test_non_json_body_is_malformed() {
        let router = Router::new().route(SEARCH_PATH, get(|| async { "<html>oops</html>" }));
        let addr = serve(router).await;

        let err = client(addr).search(&query()).await.unwrap_err();

        assert!(matches!(err, CatalogError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_connection_failure_hides_api_key() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(addr).search(&query()).await.unwrap_err();

        assert!(matches!(err, CatalogError::Transport(_)));
        assert!(!err.to_string().contains("secret-key"));
    }
}
