//! GraphQL schema and resolvers for the REST-backed resources.
//!
//! Each resolver maps one GraphQL field to one backend call through
//! [`RestClient`] and reshapes the JSON reply into the typed result. Failures
//! surface as one generic, operation-specific message; the cause is logged and
//! preserved in the error `extensions` (`code`, and `status` when the backend
//! answered with one).

use crate::error::Error;
use crate::rest_client::RestClient;
use crate::types::{Gender, Product, User, PRODUCTS_RESOURCE, USERS_RESOURCE};
use async_graphql::{Context, EmptySubscription, ErrorExtensions, Object, Schema};
use uuid::Uuid;

/// The executable gateway schema.
pub type GatewaySchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the backend client wired into resolver context.
pub fn build_schema(client: RestClient) -> GatewaySchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(client)
        .finish()
}

/// Map a gateway error to the generic resolver error for one operation.
///
/// The message stays generic per operation; structured detail travels in the
/// extensions and the cause goes to the log.
fn resolver_error(message: &str, err: Error) -> async_graphql::Error {
    tracing::warn!(cause = %err, "{message}");
    let status = err.status();
    let code = err.code();
    async_graphql::Error::new(message).extend_with(|_, ext| {
        ext.set("code", code);
        if let Some(status) = status {
            ext.set("status", status.as_u16());
        }
    })
}

fn not_found(resource: &str, id: &str) -> Error {
    Error::Backend {
        status: http::StatusCode::NOT_FOUND,
        message: format!("{resource}/{id} not found"),
    }
}

/// Root query object
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Look up a single product. Unknown ids resolve to null, not an error.
    async fn product(
        &self,
        ctx: &Context<'_>,
        id: String,
    ) -> async_graphql::Result<Option<Product>> {
        let client = ctx.data::<RestClient>()?;
        client
            .get_one(PRODUCTS_RESOURCE, &id)
            .await
            .map_err(|err| resolver_error("Error retrieving the product", err))
    }

    /// Fetch the full product collection.
    async fn all_products(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Product>> {
        let client = ctx.data::<RestClient>()?;
        client
            .get_all(PRODUCTS_RESOURCE)
            .await
            .map_err(|err| resolver_error("Error retrieving products", err))
    }

    /// Look up a single user. Unknown ids resolve to null, not an error.
    async fn user(&self, ctx: &Context<'_>, id: String) -> async_graphql::Result<Option<User>> {
        let client = ctx.data::<RestClient>()?;
        client
            .get_one(USERS_RESOURCE, &id)
            .await
            .map_err(|err| resolver_error("Error retrieving the user", err))
    }

    /// Fetch the full user collection.
    async fn all_users(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<User>> {
        let client = ctx.data::<RestClient>()?;
        client
            .get_all(USERS_RESOURCE)
            .await
            .map_err(|err| resolver_error("Error retrieving users", err))
    }
}

/// Root mutation object
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a product. The id is generated gateway-side; the backend is
    /// never consulted for uniqueness.
    async fn add_product(
        &self,
        ctx: &Context<'_>,
        name: String,
        code: String,
        price: Option<f64>,
        quantity: Option<i32>,
        company: Option<String>,
    ) -> async_graphql::Result<Product> {
        let client = ctx.data::<RestClient>()?;
        let record = Product {
            id: Some(Uuid::new_v4().to_string()),
            name: Some(name),
            code: Some(code),
            price,
            quantity,
            company,
        };
        client
            .create(PRODUCTS_RESOURCE, &record)
            .await
            .map_err(|err| resolver_error("Error creating the product", err))
    }

    /// Update a product: fetch the current record, overlay the supplied
    /// arguments (supplied wins per field) and replace it on the backend.
    async fn update_product(
        &self,
        ctx: &Context<'_>,
        id: String,
        name: Option<String>,
        code: Option<String>,
        price: Option<f64>,
        quantity: Option<i32>,
        company: Option<String>,
    ) -> async_graphql::Result<Product> {
        const MESSAGE: &str = "Error updating the product";

        let client = ctx.data::<RestClient>()?;
        let current: Product = client
            .get_one(PRODUCTS_RESOURCE, &id)
            .await
            .map_err(|err| resolver_error(MESSAGE, err))?
            .ok_or_else(|| resolver_error(MESSAGE, not_found(PRODUCTS_RESOURCE, &id)))?;

        let merged = Product {
            id: Some(id.clone()),
            name: name.or(current.name),
            code: code.or(current.code),
            price: price.or(current.price),
            quantity: quantity.or(current.quantity),
            company: company.or(current.company),
        };

        client
            .replace(PRODUCTS_RESOURCE, &id, &merged)
            .await
            .map_err(|err| resolver_error(MESSAGE, err))
    }

    /// Delete a product and return whatever entity body the backend replies
    /// with (possibly all-null fields).
    async fn delete_product(
        &self,
        ctx: &Context<'_>,
        id: String,
    ) -> async_graphql::Result<Product> {
        let client = ctx.data::<RestClient>()?;
        client
            .delete(PRODUCTS_RESOURCE, &id)
            .await
            .map_err(|err| resolver_error("Error deleting the product", err))
    }

    /// Create a user with a gateway-generated id.
    async fn add_user(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: String,
        age: i32,
        phone: Option<String>,
        gender: Option<Gender>,
    ) -> async_graphql::Result<User> {
        let client = ctx.data::<RestClient>()?;
        let record = User {
            id: Some(Uuid::new_v4().to_string()),
            name: Some(name),
            email: Some(email),
            phone,
            gender,
            age: Some(age),
        };
        client
            .create(USERS_RESOURCE, &record)
            .await
            .map_err(|err| resolver_error("Error creating the user", err))
    }

    /// Update a user by merge-then-replace, same rule as products.
    async fn update_user(
        &self,
        ctx: &Context<'_>,
        id: String,
        name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        gender: Option<Gender>,
        age: Option<i32>,
    ) -> async_graphql::Result<User> {
        const MESSAGE: &str = "Error updating the user";

        let client = ctx.data::<RestClient>()?;
        let current: User = client
            .get_one(USERS_RESOURCE, &id)
            .await
            .map_err(|err| resolver_error(MESSAGE, err))?
            .ok_or_else(|| resolver_error(MESSAGE, not_found(USERS_RESOURCE, &id)))?;

        let merged = User {
            id: Some(id.clone()),
            name: name.or(current.name),
            email: email.or(current.email),
            phone: phone.or(current.phone),
            gender: gender.or(current.gender),
            age: age.or(current.age),
        };

        client
            .replace(USERS_RESOURCE, &id, &merged)
            .await
            .map_err(|err| resolver_error(MESSAGE, err))
    }

    /// Delete a user, echoing the backend reply.
    async fn delete_user(&self, ctx: &Context<'_>, id: String) -> async_graphql::Result<User> {
        let client = ctx.data::<RestClient>()?;
        client
            .delete(USERS_RESOURCE, &id)
            .await
            .map_err(|err| resolver_error("Error deleting the user", err))
    }
}
