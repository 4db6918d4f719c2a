//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::Utc;

use crate::domain::entities::{NewRestaurant, Restaurant, RestaurantId};

/// Create a test restaurant with default values
pub fn test_restaurant(id: i32, name: &str) -> Restaurant {
    Restaurant {
        id: RestaurantId(id),
        name: name.to_string(),
        cuisine: Some("Italian".to_string()),
        price_level: 2,
        rating: 4.2,
        created_at: Utc::now(),
    }
}

/// Create a test restaurant with a specific cuisine (`None` means no cuisine)
pub fn test_restaurant_with_cuisine(id: i32, name: &str, cuisine: Option<&str>) -> Restaurant {
    Restaurant {
        id: RestaurantId(id),
        name: name.to_string(),
        cuisine: cuisine.map(String::from),
        price_level: 2,
        rating: 4.2,
        created_at: Utc::now(),
    }
}

/// Create a test restaurant with a specific rating
pub fn test_restaurant_with_rating(id: i32, name: &str, rating: f64) -> Restaurant {
    Restaurant {
        id: RestaurantId(id),
        name: name.to_string(),
        cuisine: Some("Italian".to_string()),
        price_level: 2,
        rating,
        created_at: Utc::now(),
    }
}

/// Creation payload with valid defaults
pub fn new_restaurant(name: &str) -> NewRestaurant {
    NewRestaurant {
        name: name.to_string(),
        cuisine: Some("Italian".to_string()),
        price_level: 2,
        rating: 4.2,
    }
}

/// Creation payload with a specific cuisine
pub fn new_restaurant_with_cuisine(name: &str, cuisine: Option<&str>) -> NewRestaurant {
    NewRestaurant {
        name: name.to_string(),
        cuisine: cuisine.map(String::from),
        price_level: 2,
        rating: 4.2,
    }
}
