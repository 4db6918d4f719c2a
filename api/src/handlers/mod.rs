//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod restaurants;

pub use restaurants::{
    create_restaurant, delete_restaurant, get_restaurant, list_restaurants, recommend_restaurants,
    search_restaurants, update_restaurant,
};
