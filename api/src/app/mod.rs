//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod recommendation;
pub mod restaurant_service;

pub use recommendation::sample_diverse;
pub use restaurant_service::RestaurantService;
