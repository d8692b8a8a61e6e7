//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Full book record from the database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub book_id: i32,
    pub title: String,
    /// ISBN, unique across the catalog (13 characters max)
    pub isbn: String,
    pub publication_year: Option<i32>,
    /// Reference to an author record; not validated against any table
    pub author_id: Option<i32>,
    pub available_copies: i32,
}

/// Create/update book request body
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BookPayload {
    pub title: String,
    pub isbn: String,
    pub publication_year: Option<i32>,
    pub author_id: Option<i32>,
    #[serde(default = "default_available_copies")]
    pub available_copies: i32,
}

fn default_available_copies() -> i32 {
    1
}
