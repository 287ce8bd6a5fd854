//! Resource Client Contract
//!
//! The `/foods` collection seen through four calls. The browser client
//! implements this over HTTP; tests implement it in memory.

use async_trait::async_trait;

use crate::error::ApiError;
use crate::food::{Food, FoodId, NewFood};

/// CRUD over the remote food collection
///
/// Futures are not `Send`: the browser client runs on the single UI thread.
#[async_trait(?Send)]
pub trait FoodApi {
    /// Fetch the full collection
    async fn list_all(&self) -> Result<Vec<Food>, ApiError>;

    /// Create a record; the server assigns the id
    async fn create(&self, food: &NewFood) -> Result<Food, ApiError>;

    /// Overwrite the record stored under `id`
    async fn update(&self, id: FoodId, food: &Food) -> Result<Food, ApiError>;

    /// Delete the record stored under `id`
    async fn remove(&self, id: FoodId) -> Result<(), ApiError>;
}
