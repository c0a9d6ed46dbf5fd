//! Entity models shared between the GraphQL schema and the REST wire format
//!
//! Each struct doubles as the GraphQL output object and the serde shape of the
//! backend JSON. Every output field is nullable: the backend is the system of
//! record and its JSON is loose (a delete reply may be an empty object).

use async_graphql::{Enum, SimpleObject};
use serde::{Deserialize, Serialize};

/// Resource path for products on the REST backend.
pub const PRODUCTS_RESOURCE: &str = "products";

/// Resource path for users on the REST backend.
pub const USERS_RESOURCE: &str = "users";

/// A product owned by the REST backend.
#[derive(Debug, Clone, PartialEq, SimpleObject, Serialize, Deserialize)]
pub struct Product {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

/// A user owned by the REST backend.
#[derive(Debug, Clone, PartialEq, SimpleObject, Serialize, Deserialize)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
}

/// User gender, `male` / `female` / `prefer_not_say` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    PreferNotSay,
}
