//! Mock implementations of port traits
//!
//! In-memory implementations that can be pre-populated and inspected
//! by tests.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    NewRestaurant, Restaurant, RestaurantFilter, RestaurantId, RestaurantPatch,
};
use crate::domain::ports::RestaurantRepository;
use crate::error::DomainError;

// ============================================================================
// In-Memory Restaurant Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryRestaurantRepository {
    restaurants: Arc<RwLock<HashMap<i32, Restaurant>>>,
    next_id: Arc<RwLock<i32>>,
}

impl InMemoryRestaurantRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a restaurant for testing
    pub fn with_restaurant(self, restaurant: Restaurant) -> Self {
        {
            let mut restaurants = self.restaurants.write().unwrap();
            let mut next_id = self.next_id.write().unwrap();
            *next_id = (*next_id).max(restaurant.id.0);
            restaurants.insert(restaurant.id.0, restaurant);
        }
        self
    }

    /// All restaurants ordered by id (the insertion order of created rows)
    fn sorted(&self) -> Vec<Restaurant> {
        let restaurants = self.restaurants.read().unwrap();
        let mut all: Vec<Restaurant> = restaurants.values().cloned().collect();
        all.sort_by_key(|r| r.id.0);
        all
    }
}

#[async_trait]
impl RestaurantRepository for InMemoryRestaurantRepository {
    async fn find_by_id(&self, id: &RestaurantId) -> Result<Option<Restaurant>, DomainError> {
        let restaurants = self.restaurants.read().unwrap();
        Ok(restaurants.get(&id.0).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Restaurant>, DomainError> {
        let restaurants = self.restaurants.read().unwrap();
        Ok(restaurants.values().find(|r| r.name == name).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Restaurant>, DomainError> {
        Ok(self.sorted())
    }

    async fn find_page(&self, limit: i64, offset: i64) -> Result<Vec<Restaurant>, DomainError> {
        Ok(self
            .sorted()
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn find_by_filter(
        &self,
        filter: &RestaurantFilter,
        limit: i64,
        order_by_rating: bool,
    ) -> Result<Vec<Restaurant>, DomainError> {
        let mut matches: Vec<Restaurant> = self
            .sorted()
            .into_iter()
            .filter(|r| filter.matches(r))
            .collect();

        if order_by_rating {
            matches.sort_by(|a, b| {
                b.rating
                    .partial_cmp(&a.rating)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }

        Ok(matches.into_iter().take(limit as usize).collect())
    }

    async fn create(&self, restaurant: &NewRestaurant) -> Result<Restaurant, DomainError> {
        let id = {
            let mut next_id = self.next_id.write().unwrap();
            *next_id += 1;
            *next_id
        };

        let created = Restaurant {
            id: RestaurantId(id),
            name: restaurant.name.clone(),
            cuisine: restaurant.cuisine.clone(),
            price_level: restaurant.price_level,
            rating: restaurant.rating,
            created_at: Utc::now(),
        };

        let mut restaurants = self.restaurants.write().unwrap();
        restaurants.insert(id, created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        id: &RestaurantId,
        patch: &RestaurantPatch,
    ) -> Result<Option<Restaurant>, DomainError> {
        let mut restaurants = self.restaurants.write().unwrap();
        let Some(restaurant) = restaurants.get_mut(&id.0) else {
            return Ok(None);
        };

        if let Some(name) = &patch.name {
            restaurant.name = name.clone();
        }
        if let Some(cuisine) = &patch.cuisine {
            restaurant.cuisine = Some(cuisine.clone());
        }
        if let Some(price_level) = patch.price_level {
            restaurant.price_level = price_level;
        }
        if let Some(rating) = patch.rating {
            restaurant.rating = rating;
        }

        Ok(Some(restaurant.clone()))
    }

    async fn delete(&self, id: &RestaurantId) -> Result<Option<Restaurant>, DomainError> {
        let mut restaurants = self.restaurants.write().unwrap();
        Ok(restaurants.remove(&id.0))
    }
}
