//! API handlers for Biblion REST endpoints

pub mod books;
pub mod health;
pub mod members;
pub mod openapi;

use serde::Serialize;
use utoipa::ToSchema;

/// Confirmation body returned by delete endpoints
#[derive(Serialize, ToSchema)]
pub struct DeleteResponse {
    pub message: String,
}
