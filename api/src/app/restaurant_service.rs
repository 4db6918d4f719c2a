//! Restaurant service
//!
//! Orchestrates business rules and use-cases for restaurants.

use std::sync::Arc;

use crate::app::sample_diverse;
use crate::domain::entities::{
    NewRestaurant, Restaurant, RestaurantFilter, RestaurantId, RestaurantPatch,
};
use crate::domain::ports::RestaurantRepository;
use crate::error::{AppError, DomainError};

/// Service for managing restaurants
pub struct RestaurantService<R>
where
    R: RestaurantRepository,
{
    restaurants: Arc<R>,
}

impl<R> RestaurantService<R>
where
    R: RestaurantRepository,
{
    pub fn new(restaurants: Arc<R>) -> Self {
        Self { restaurants }
    }

    /// List restaurants with pagination
    pub async fn list_restaurants(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Restaurant>, AppError> {
        Ok(self.restaurants.find_page(limit, offset).await?)
    }

    /// Get a restaurant by id
    pub async fn get_restaurant(&self, id: &RestaurantId) -> Result<Restaurant, AppError> {
        self.restaurants.find_by_id(id).await?.ok_or_else(|| {
            AppError::Domain(DomainError::NotFound(format!(
                "Restaurant {} not found",
                id
            )))
        })
    }

    /// Find restaurants whose fields equal the supplied filter fields
    pub async fn find_by_attributes(
        &self,
        filter: &RestaurantFilter,
        limit: i64,
        order_by_rating: bool,
    ) -> Result<Vec<Restaurant>, AppError> {
        let found = self
            .restaurants
            .find_by_filter(filter, limit, order_by_rating)
            .await?;
        if found.is_empty() {
            return Err(AppError::Domain(DomainError::NotFound(format!(
                "No restaurants match {:?}",
                filter
            ))));
        }
        Ok(found)
    }

    /// Create a new restaurant
    ///
    /// Business rule: the name must be unique.
    pub async fn create_restaurant(&self, data: NewRestaurant) -> Result<Restaurant, AppError> {
        data.validate().map_err(DomainError::Validation)?;

        if self.restaurants.find_by_name(&data.name).await?.is_some() {
            return Err(AppError::Domain(DomainError::DuplicateName(format!(
                "A restaurant named '{}' already exists",
                data.name
            ))));
        }

        Ok(self.restaurants.create(&data).await?)
    }

    /// Partially update an existing restaurant; only supplied fields change
    pub async fn update_restaurant(
        &self,
        id: &RestaurantId,
        patch: RestaurantPatch,
    ) -> Result<Restaurant, AppError> {
        patch.validate().map_err(DomainError::Validation)?;

        self.restaurants.update(id, &patch).await?.ok_or_else(|| {
            AppError::Domain(DomainError::NotFound(format!(
                "Restaurant {} not found",
                id
            )))
        })
    }

    /// Delete a restaurant, returning the removed record
    pub async fn delete_restaurant(&self, id: &RestaurantId) -> Result<Restaurant, AppError> {
        self.restaurants.delete(id).await?.ok_or_else(|| {
            AppError::Domain(DomainError::NotFound(format!(
                "Restaurant {} not found",
                id
            )))
        })
    }

    /// Recommend up to `limit` restaurants favoring cuisine variety
    ///
    /// Degrades gracefully: an empty store or a non-positive limit yields an
    /// empty list rather than an error.
    pub async fn recommend(&self, limit: i64) -> Result<Vec<Restaurant>, AppError> {
        if limit <= 0 {
            return Ok(Vec::new());
        }
        let all = self.restaurants.find_all().await?;
        Ok(sample_diverse(all, limit as usize, &mut rand::thread_rng()))
    }
}
