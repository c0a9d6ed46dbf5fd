//! Middleware support for the gateway

use crate::error::Result;

/// Context passed to middleware
#[derive(Debug)]
pub struct Context {
    /// Request headers and metadata
    pub headers: axum::http::HeaderMap,

    /// Additional context data
    pub extensions: std::collections::HashMap<String, serde_json::Value>,
}

impl Context {
    /// Insert extension data
    pub fn insert(&mut self, key: String, value: serde_json::Value) {
        self.extensions.insert(key, value);
    }

    /// Get extension data
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.extensions.get(key)
    }
}

/// Middleware trait for processing requests
///
/// Middleware can intercept requests before they are processed by the GraphQL engine.
///
/// # Example
///
/// ```rust
/// use rest_graphql_gateway::middleware::{Middleware, Context};
/// use rest_graphql_gateway::Result;
///
/// struct MyMiddleware;
///
/// #[async_trait::async_trait]
/// impl Middleware for MyMiddleware {
///     async fn call(&self, ctx: &mut Context) -> Result<()> {
///         println!("Processing request");
///         Ok(())
///     }
/// }
/// ```
#[async_trait::async_trait]
pub trait Middleware: Send + Sync {
    /// Process the request context
    async fn call(&self, ctx: &mut Context) -> Result<()>;
}

/// Logging middleware
///
/// Logs incoming GraphQL requests using the `tracing` crate.
#[derive(Debug, Clone, Default)]
pub struct LoggingMiddleware;

#[async_trait::async_trait]
impl Middleware for LoggingMiddleware {
    async fn call(&self, ctx: &mut Context) -> Result<()> {
        tracing::debug!("Processing GraphQL request with headers: {:?}", ctx.headers);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn context_extensions_round_trip() {
        let mut ctx = Context {
            headers: axum::http::HeaderMap::new(),
            extensions: std::collections::HashMap::new(),
        };
        ctx.insert("tenant".to_string(), serde_json::json!("acme"));
        assert_eq!(ctx.get("tenant"), Some(&serde_json::json!("acme")));
        assert_eq!(ctx.get("missing"), None);
    }
}
