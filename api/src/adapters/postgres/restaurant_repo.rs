//! PostgreSQL adapter for RestaurantRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::domain::entities::{
    NewRestaurant, Restaurant, RestaurantFilter, RestaurantId, RestaurantPatch,
};
use crate::domain::ports::RestaurantRepository;
use crate::entity::restaurants;
use crate::error::DomainError;

/// PostgreSQL implementation of RestaurantRepository
pub struct PostgresRestaurantRepository {
    db: DatabaseConnection,
}

impl PostgresRestaurantRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RestaurantRepository for PostgresRestaurantRepository {
    async fn find_by_id(&self, id: &RestaurantId) -> Result<Option<Restaurant>, DomainError> {
        let result = restaurants::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Restaurant>, DomainError> {
        let result = restaurants::Entity::find()
            .filter(restaurants::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self) -> Result<Vec<Restaurant>, DomainError> {
        let results = restaurants::Entity::find()
            .order_by_asc(restaurants::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_page(&self, limit: i64, offset: i64) -> Result<Vec<Restaurant>, DomainError> {
        let results = restaurants::Entity::find()
            .order_by_asc(restaurants::Column::Id)
            .offset(offset as u64)
            .limit(limit as u64)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_filter(
        &self,
        filter: &RestaurantFilter,
        limit: i64,
        order_by_rating: bool,
    ) -> Result<Vec<Restaurant>, DomainError> {
        let mut query = restaurants::Entity::find();

        if let Some(name) = &filter.name {
            query = query.filter(restaurants::Column::Name.eq(name.as_str()));
        }
        if let Some(cuisine) = &filter.cuisine {
            query = query.filter(restaurants::Column::Cuisine.eq(cuisine.as_str()));
        }
        if let Some(price_level) = filter.price_level {
            query = query.filter(restaurants::Column::PriceLevel.eq(price_level));
        }
        if let Some(rating) = filter.rating {
            query = query.filter(restaurants::Column::Rating.eq(rating));
        }

        query = if order_by_rating {
            query.order_by_desc(restaurants::Column::Rating)
        } else {
            query.order_by_asc(restaurants::Column::Id)
        };

        let results = query
            .limit(limit as u64)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, restaurant: &NewRestaurant) -> Result<Restaurant, DomainError> {
        let now = Utc::now().fixed_offset();

        let model = restaurants::ActiveModel {
            name: Set(restaurant.name.clone()),
            cuisine: Set(restaurant.cuisine.clone()),
            price_level: Set(restaurant.price_level),
            rating: Set(restaurant.rating),
            created_at: Set(Some(now)),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update(
        &self,
        id: &RestaurantId,
        patch: &RestaurantPatch,
    ) -> Result<Option<Restaurant>, DomainError> {
        let existing = restaurants::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let Some(model) = existing else {
            return Ok(None);
        };

        // Nothing supplied: skip the round-trip and return the row as-is
        if patch.is_empty() {
            return Ok(Some(model.into()));
        }

        let mut active = model.into_active_model();
        if let Some(name) = &patch.name {
            active.name = Set(name.clone());
        }
        if let Some(cuisine) = &patch.cuisine {
            active.cuisine = Set(Some(cuisine.clone()));
        }
        if let Some(price_level) = patch.price_level {
            active.price_level = Set(price_level);
        }
        if let Some(rating) = patch.rating {
            active.rating = Set(rating);
        }

        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(Some(updated.into()))
    }

    async fn delete(&self, id: &RestaurantId) -> Result<Option<Restaurant>, DomainError> {
        let existing = restaurants::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let Some(model) = existing else {
            return Ok(None);
        };

        restaurants::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(Some(model.into()))
    }
}

/// Convert SeaORM model to domain entity
impl From<restaurants::Model> for Restaurant {
    fn from(model: restaurants::Model) -> Self {
        Restaurant {
            id: RestaurantId(model.id),
            name: model.name,
            cuisine: model.cuisine,
            price_level: model.price_level,
            rating: model.rating,
            created_at: model
                .created_at
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(Utc::now),
        }
    }
}
