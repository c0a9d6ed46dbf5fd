//! Gateway builder and main orchestration

use crate::config::Config;
use crate::error::{Error, GraphQLError, Result};
use crate::middleware::Middleware;
use crate::rest_client::RestClient;
use crate::runtime::ServeMux;
use crate::schema::{build_schema, GatewaySchema};
use axum::Router;
use std::sync::Arc;

/// Main Gateway struct - entry point for the library
pub struct Gateway {
    mux: ServeMux,
    client: RestClient,
    schema: GatewaySchema,
}

impl Gateway {
    /// Create a new gateway builder
    pub fn builder() -> GatewayBuilder {
        GatewayBuilder::new()
    }

    /// Get the ServeMux
    pub fn mux(&self) -> &ServeMux {
        &self.mux
    }

    /// Access the built GraphQL schema
    pub fn schema(&self) -> &GatewaySchema {
        &self.schema
    }

    /// Get the backend client
    pub fn client(&self) -> &RestClient {
        &self.client
    }

    /// Convert gateway into Axum router
    pub fn into_router(self) -> Router {
        self.mux.into_router()
    }
}

/// Builder for creating a Gateway
pub struct GatewayBuilder {
    backend_url: Option<String>,
    client: Option<RestClient>,
    middlewares: Vec<Arc<dyn Middleware>>,
    error_handler: Option<Arc<dyn Fn(Vec<GraphQLError>) + Send + Sync>>,
}

impl GatewayBuilder {
    /// Create a new gateway builder
    pub fn new() -> Self {
        Self {
            backend_url: None,
            client: None,
            middlewares: Vec::new(),
            error_handler: None,
        }
    }

    /// Point the gateway at a REST backend base URL
    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = Some(url.into());
        self
    }

    /// Provide a preconfigured REST client (overrides the backend URL)
    pub fn with_client(mut self, client: RestClient) -> Self {
        self.client = Some(client);
        self
    }

    /// Take the backend address from loaded configuration
    pub fn with_config(self, config: &Config) -> Self {
        self.with_backend_url(config.backend_url.clone())
    }

    /// Add middleware
    pub fn add_middleware<M: Middleware + 'static>(mut self, middleware: M) -> Self {
        self.middlewares.push(Arc::new(middleware));
        self
    }

    /// Provide a handler to inspect/augment GraphQL errors before they are returned.
    pub fn with_error_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(Vec<GraphQLError>) + Send + Sync + 'static,
    {
        self.error_handler = Some(Arc::new(handler));
        self
    }

    /// Build the gateway
    pub fn build(self) -> Result<Gateway> {
        let client = match self.client {
            Some(client) => client,
            None => {
                let url = self
                    .backend_url
                    .ok_or_else(|| Error::Config("backend URL is required".to_string()))?;
                RestClient::new(url)?
            }
        };

        let schema = build_schema(client.clone());
        let mut mux = ServeMux::new(schema.clone());

        // Add middlewares
        for middleware in self.middlewares {
            mux.add_middleware(middleware);
        }

        if let Some(handler) = self.error_handler {
            mux.set_error_handler_arc(handler);
        }

        Ok(Gateway {
            mux,
            client,
            schema,
        })
    }

    /// Build and start the gateway server
    pub async fn serve(self, addr: impl Into<String>) -> Result<()> {
        let gateway = self.build()?;
        let addr = addr.into();
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        tracing::info!(
            "Gateway listening on http://{}/graphql, backend at {}",
            addr,
            gateway.client().base_url()
        );

        let app = gateway.into_router();
        axum::serve(listener, app).await?;

        Ok(())
    }
}

impl Default for GatewayBuilder {
    fn default() -> Self {
        Self::new()
    }
}
