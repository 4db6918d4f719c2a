//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod restaurant;

pub use restaurant::{
    NewRestaurant, Restaurant, RestaurantFilter, RestaurantId, RestaurantPatch,
};
