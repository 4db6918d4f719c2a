//! Restaurant handlers
//!
//! Endpoints for restaurant CRUD, attribute search, and diverse
//! recommendations.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewRestaurant, Restaurant, RestaurantFilter, RestaurantId, RestaurantPatch};
use crate::error::AppError;
use crate::AppState;

/// Query parameters for listing restaurants
#[derive(Debug, Deserialize)]
pub struct ListRestaurantsQuery {
    #[serde(default = "default_list_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_list_limit() -> i64 {
    100
}

/// Query parameters for attribute search
#[derive(Debug, Deserialize)]
pub struct SearchRestaurantsQuery {
    pub name: Option<String>,
    pub cuisine: Option<String>,
    pub price_level: Option<i32>,
    pub rating: Option<f64>,
    #[serde(default = "default_search_limit")]
    pub limit: i64,
    /// Sort results by rating, highest first
    #[serde(default)]
    pub order_by_rating: bool,
}

fn default_search_limit() -> i64 {
    10
}

/// Query parameters for recommendations
#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    #[serde(default = "default_recommend_limit")]
    pub limit: i64,
}

fn default_recommend_limit() -> i64 {
    5
}

/// Restaurant representation returned by the API
#[derive(Debug, Serialize)]
pub struct RestaurantResponse {
    pub id: i32,
    pub name: String,
    pub cuisine: Option<String>,
    pub price_level: i32,
    pub rating: f64,
    pub created_at: String,
}

impl From<Restaurant> for RestaurantResponse {
    fn from(restaurant: Restaurant) -> Self {
        RestaurantResponse {
            id: restaurant.id.0,
            name: restaurant.name,
            cuisine: restaurant.cuisine,
            price_level: restaurant.price_level,
            rating: restaurant.rating,
            created_at: restaurant.created_at.to_rfc3339(),
        }
    }
}

/// Request to create a new restaurant
#[derive(Debug, Deserialize)]
pub struct CreateRestaurantRequest {
    pub name: String,
    pub cuisine: Option<String>,
    /// Price indicator, 1 (cheap) to 3 (expensive)
    pub price_level: i32,
    /// Customer rating 0.0-5.0
    pub rating: f64,
}

/// Request to update an existing restaurant. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateRestaurantRequest {
    pub name: Option<String>,
    pub cuisine: Option<String>,
    pub price_level: Option<i32>,
    pub rating: Option<f64>,
}

/// GET /restaurants
///
/// List restaurants with pagination.
pub async fn list_restaurants(
    State(state): State<AppState>,
    Query(query): Query<ListRestaurantsQuery>,
) -> Result<Json<Vec<RestaurantResponse>>, AppError> {
    if query.limit < 0 || query.offset < 0 {
        return Err(AppError::BadRequest(
            "limit and offset must be non-negative".to_string(),
        ));
    }

    let restaurants = state
        .restaurant_service
        .list_restaurants(query.limit, query.offset)
        .await?;

    Ok(Json(restaurants.into_iter().map(Into::into).collect()))
}

/// GET /restaurants/:id
///
/// Get a single restaurant.
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<RestaurantResponse>, AppError> {
    let restaurant = state
        .restaurant_service
        .get_restaurant(&RestaurantId(id))
        .await?;

    Ok(Json(restaurant.into()))
}

/// POST /restaurants
///
/// Create a new restaurant. The name must be unique.
pub async fn create_restaurant(
    State(state): State<AppState>,
    Json(request): Json<CreateRestaurantRequest>,
) -> Result<Json<RestaurantResponse>, AppError> {
    let restaurant = state
        .restaurant_service
        .create_restaurant(NewRestaurant {
            name: request.name,
            cuisine: request.cuisine,
            price_level: request.price_level,
            rating: request.rating,
        })
        .await?;

    Ok(Json(restaurant.into()))
}

/// PATCH /restaurants/:id
///
/// Partially update a restaurant; only supplied fields change.
pub async fn update_restaurant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateRestaurantRequest>,
) -> Result<Json<RestaurantResponse>, AppError> {
    let restaurant = state
        .restaurant_service
        .update_restaurant(
            &RestaurantId(id),
            RestaurantPatch {
                name: request.name,
                cuisine: request.cuisine,
                price_level: request.price_level,
                rating: request.rating,
            },
        )
        .await?;

    Ok(Json(restaurant.into()))
}

/// DELETE /restaurants/:id
///
/// Delete a restaurant, returning the removed record.
pub async fn delete_restaurant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<RestaurantResponse>, AppError> {
    let restaurant = state
        .restaurant_service
        .delete_restaurant(&RestaurantId(id))
        .await?;

    Ok(Json(restaurant.into()))
}

/// GET /restaurants/search
///
/// Find restaurants by field equality, optionally ordered by rating.
pub async fn search_restaurants(
    State(state): State<AppState>,
    Query(query): Query<SearchRestaurantsQuery>,
) -> Result<Json<Vec<RestaurantResponse>>, AppError> {
    if query.limit < 0 {
        return Err(AppError::BadRequest(
            "limit must be non-negative".to_string(),
        ));
    }

    let filter = RestaurantFilter {
        name: query.name,
        cuisine: query.cuisine,
        price_level: query.price_level,
        rating: query.rating,
    };

    let restaurants = state
        .restaurant_service
        .find_by_attributes(&filter, query.limit, query.order_by_rating)
        .await?;

    Ok(Json(restaurants.into_iter().map(Into::into).collect()))
}

/// GET /restaurants/recommendations
///
/// Sample restaurants across cuisines for variety.
pub async fn recommend_restaurants(
    State(state): State<AppState>,
    Query(query): Query<RecommendQuery>,
) -> Result<Json<Vec<RestaurantResponse>>, AppError> {
    let restaurants = state.restaurant_service.recommend(query.limit).await?;

    Ok(Json(restaurants.into_iter().map(Into::into).collect()))
}
