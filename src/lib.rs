//! # rest-graphql-gateway
//!
//! A GraphQL gateway that fronts a REST backend, exposing products and users
//! as typed GraphQL queries and mutations.
//!
//! ## Features
//!
//! - **Typed Schema**: `Product` / `User` objects with the full CRUD operation set
//! - **One call per field**: each resolver maps to exactly one backend REST call
//! - **Not-found as null**: single-item lookups translate a backend 404 into `null`
//! - **Structured errors**: generic per-operation messages with `code`/`status` extensions
//! - **Middleware**: extensible pre-execution hooks for logging and friends
//!
//! ## Main Components
//!
//! - [`Gateway`]: The main entry point for creating and running the gateway.
//! - [`GatewayBuilder`]: Configuration builder for the gateway.
//! - [`RestClient`]: The outbound client for the REST backend.
//! - [`Config`]: Environment-driven process configuration.
//! - [`ServeMux`]: HTTP integration and middleware pipeline.
//!
//! ## Example
//!
//! ```rust,no_run
//! use rest_graphql_gateway::{Config, Gateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!
//!     Gateway::builder()
//!         .with_config(&config)
//!         .serve(config.listen_addr.to_string())
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod gateway;
pub mod middleware;
pub mod rest_client;
pub mod runtime;
pub mod schema;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use gateway::{Gateway, GatewayBuilder};
pub use middleware::{Context, LoggingMiddleware, Middleware};
pub use rest_client::RestClient;
pub use runtime::ServeMux;
pub use schema::{build_schema, GatewaySchema, MutationRoot, QueryRoot};
pub use types::{Gender, Product, User};
