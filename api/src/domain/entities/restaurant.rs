//! Restaurant domain entity
//!
//! Represents a restaurant record and the value objects used to create,
//! patch, and look it up.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a restaurant, assigned by the store on insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RestaurantId(pub i32);

impl From<i32> for RestaurantId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lowest valid price level (cheap)
pub const MIN_PRICE_LEVEL: i32 = 1;
/// Highest valid price level (expensive)
pub const MAX_PRICE_LEVEL: i32 = 3;
/// Lowest valid customer rating
pub const MIN_RATING: f64 = 0.0;
/// Highest valid customer rating
pub const MAX_RATING: f64 = 5.0;

/// A restaurant record
#[derive(Debug, Clone, Serialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    /// Cuisine category; restaurants without one group together as "no cuisine"
    pub cuisine: Option<String>,
    pub price_level: i32,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
}

/// Data needed to create a new restaurant
#[derive(Debug, Clone)]
pub struct NewRestaurant {
    pub name: String,
    pub cuisine: Option<String>,
    pub price_level: i32,
    pub rating: f64,
}

impl NewRestaurant {
    /// Check the field constraints for a creation payload
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".to_string());
        }
        validate_price_level(self.price_level)?;
        validate_rating(self.rating)
    }
}

/// Partial update for a restaurant; only supplied fields change
#[derive(Debug, Clone, Default)]
pub struct RestaurantPatch {
    pub name: Option<String>,
    pub cuisine: Option<String>,
    pub price_level: Option<i32>,
    pub rating: Option<f64>,
}

impl RestaurantPatch {
    /// True when no field is supplied
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.cuisine.is_none()
            && self.price_level.is_none()
            && self.rating.is_none()
    }

    /// Check the field constraints for the supplied fields only
    pub fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err("name must not be empty".to_string());
            }
        }
        if let Some(price_level) = self.price_level {
            validate_price_level(price_level)?;
        }
        if let Some(rating) = self.rating {
            validate_rating(rating)?;
        }
        Ok(())
    }
}

/// Field-equality filter for attribute lookups
#[derive(Debug, Clone, Default)]
pub struct RestaurantFilter {
    pub name: Option<String>,
    pub cuisine: Option<String>,
    pub price_level: Option<i32>,
    pub rating: Option<f64>,
}

impl RestaurantFilter {
    /// True when the restaurant matches every supplied filter field
    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        if let Some(name) = &self.name {
            if restaurant.name != *name {
                return false;
            }
        }
        if let Some(cuisine) = &self.cuisine {
            if restaurant.cuisine.as_deref() != Some(cuisine.as_str()) {
                return false;
            }
        }
        if let Some(price_level) = self.price_level {
            if restaurant.price_level != price_level {
                return false;
            }
        }
        if let Some(rating) = self.rating {
            if (restaurant.rating - rating).abs() > f64::EPSILON {
                return false;
            }
        }
        true
    }
}

fn validate_price_level(price_level: i32) -> Result<(), String> {
    if !(MIN_PRICE_LEVEL..=MAX_PRICE_LEVEL).contains(&price_level) {
        return Err(format!(
            "price_level must be between {} and {}",
            MIN_PRICE_LEVEL, MAX_PRICE_LEVEL
        ));
    }
    Ok(())
}

fn validate_rating(rating: f64) -> Result<(), String> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(format!(
            "rating must be between {} and {}",
            MIN_RATING, MAX_RATING
        ));
    }
    Ok(())
}
