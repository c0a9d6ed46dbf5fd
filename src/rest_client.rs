//! REST backend client connection management

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Client for the downstream REST backend
///
/// Wraps a [`reqwest::Client`] together with the backend base URL and exposes
/// the five operations the gateway needs: collection fetch, fetch by id,
/// create, replace and delete. The client is cheap to clone; clones share the
/// underlying connection pool.
///
/// # Example
///
/// ```rust,no_run
/// use rest_graphql_gateway::RestClient;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = RestClient::new("http://localhost:3000")?;
///
/// // Or with a request timeout
/// let client = RestClient::builder("http://localhost:3000")
///     .timeout(std::time::Duration::from_secs(10))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct RestClient {
    /// Backend base URL, without trailing slash
    base_url: String,

    /// Shared HTTP client
    http: reqwest::Client,
}

impl RestClient {
    /// Start building a REST client with custom connection behavior.
    ///
    /// Returns a [`RestClientBuilder`] for configuration.
    pub fn builder(base_url: impl Into<String>) -> RestClientBuilder {
        RestClientBuilder::new(base_url)
    }

    /// Create a new REST client with default transport settings.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::builder(base_url).build()
    }

    /// Get the backend base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the whole collection for a resource.
    pub async fn get_all<T: DeserializeOwned>(&self, resource: &str) -> Result<Vec<T>> {
        let response = self
            .http
            .get(self.collection_url(resource))
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Fetch a single item by id. A backend 404 yields `Ok(None)`.
    pub async fn get_one<T: DeserializeOwned>(
        &self,
        resource: &str,
        id: &str,
    ) -> Result<Option<T>> {
        let response = self.http.get(self.item_url(resource, id)).send().await?;
        if response.status() == http::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::decode(response).await.map(Some)
    }

    /// Create a new item (POST to the collection).
    pub async fn create<T, B>(&self, resource: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self
            .http
            .post(self.collection_url(resource))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Replace an existing item (PUT to the item path).
    pub async fn replace<T, B>(&self, resource: &str, id: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self
            .http
            .put(self.item_url(resource, id))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Delete an item and return whatever body the backend answers with.
    pub async fn delete<T: DeserializeOwned>(&self, resource: &str, id: &str) -> Result<T> {
        let response = self.http.delete(self.item_url(resource, id)).send().await?;
        Self::decode(response).await
    }

    fn collection_url(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, resource)
    }

    fn item_url(&self, resource: &str, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, resource, id)
    }

    /// Turn a backend reply into a decoded value or a status-carrying error.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Backend {
                status: http::StatusCode::from_u16(status.as_u16())
                    .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR),
                message,
            });
        }
        Ok(response.json().await?)
    }
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Builder for configuring REST client creation.
pub struct RestClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
}

impl RestClientBuilder {
    fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    /// Set a per-request timeout (transport default when unset).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<RestClient> {
        let base_url = self.base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(Error::Config("backend base URL must not be empty".into()));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(RestClient { base_url, http })
    }
}

#[cfg(test)]
mod tests {
    use super::RestClient;
    use crate::error::Error;
    use serde::{Deserialize, Serialize};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Item {
        id: String,
        name: String,
    }

    #[test]
    fn builder_trims_trailing_slash() {
        let client = RestClient::new("http://localhost:3000/").expect("client builds");
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn builder_rejects_empty_base_url() {
        let result = RestClient::new("/");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn get_one_maps_404_to_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/items/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = RestClient::new(server.uri()).expect("client builds");
        let item: Option<Item> = client
            .get_one("items", "missing")
            .await
            .expect("404 is not an error");
        assert!(item.is_none());
    }

    #[tokio::test]
    async fn get_all_decodes_collection() {
        let server = MockServer::start().await;
        let items = vec![Item {
            id: "1".to_string(),
            name: "widget".to_string(),
        }];
        Mock::given(method("GET"))
            .and(path("/items"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&items))
            .mount(&server)
            .await;

        let client = RestClient::new(server.uri()).expect("client builds");
        let fetched: Vec<Item> = client.get_all("items").await.expect("collection decodes");
        assert_eq!(fetched, items);
    }

    #[tokio::test]
    async fn create_posts_body_and_decodes_echo() {
        let server = MockServer::start().await;
        let item = Item {
            id: "7".to_string(),
            name: "gadget".to_string(),
        };
        Mock::given(method("POST"))
            .and(path("/items"))
            .and(body_json(&item))
            .respond_with(ResponseTemplate::new(201).set_body_json(&item))
            .mount(&server)
            .await;

        let client = RestClient::new(server.uri()).expect("client builds");
        let created: Item = client.create("items", &item).await.expect("create succeeds");
        assert_eq!(created, item);
    }

    #[tokio::test]
    async fn non_2xx_surfaces_backend_error_with_status() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/items/1"))
            .respond_with(ResponseTemplate::new(500).set_body_string("backend down"))
            .mount(&server)
            .await;

        let client = RestClient::new(server.uri()).expect("client builds");
        let result: Result<Item, _> = client.delete("items", "1").await;
        match result {
            Err(Error::Backend { status, message }) => {
                assert_eq!(status, http::StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(message, "backend down");
            }
            other => panic!("expected backend error, got {other:?}"),
        }
    }
}
