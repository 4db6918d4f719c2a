//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod restaurant_repo;

pub use restaurant_repo::PostgresRestaurantRepository;
