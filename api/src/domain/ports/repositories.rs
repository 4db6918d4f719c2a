//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{
    NewRestaurant, Restaurant, RestaurantFilter, RestaurantId, RestaurantPatch,
};
use crate::error::DomainError;

/// Repository for Restaurant entities
///
/// A narrow, explicitly-typed store interface: every operation is atomic
/// per call, and absence is reported as `None` rather than an error.
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Find a restaurant by ID
    async fn find_by_id(&self, id: &RestaurantId) -> Result<Option<Restaurant>, DomainError>;

    /// Find a restaurant by its unique name
    async fn find_by_name(&self, name: &str) -> Result<Option<Restaurant>, DomainError>;

    /// Fetch the full restaurant set, id-ascending
    async fn find_all(&self) -> Result<Vec<Restaurant>, DomainError>;

    /// Fetch a page of restaurants, id-ascending
    async fn find_page(&self, limit: i64, offset: i64) -> Result<Vec<Restaurant>, DomainError>;

    /// Fetch restaurants whose fields equal the supplied filter fields
    async fn find_by_filter(
        &self,
        filter: &RestaurantFilter,
        limit: i64,
        order_by_rating: bool,
    ) -> Result<Vec<Restaurant>, DomainError>;

    /// Create a new restaurant; the store assigns the id
    async fn create(&self, restaurant: &NewRestaurant) -> Result<Restaurant, DomainError>;

    /// Partially update an existing restaurant; only supplied fields change
    async fn update(
        &self,
        id: &RestaurantId,
        patch: &RestaurantPatch,
    ) -> Result<Option<Restaurant>, DomainError>;

    /// Delete a restaurant by id, returning the removed record
    async fn delete(&self, id: &RestaurantId) -> Result<Option<Restaurant>, DomainError>;
}
