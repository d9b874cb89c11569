//! Player repository.

use std::sync::Arc;

use crate::entities::{Player, player};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use usra_common::{AppError, AppResult};

/// Player repository for database operations.
#[derive(Clone)]
pub struct PlayerRepository {
    db: Arc<DatabaseConnection>,
}

impl PlayerRepository {
    /// Create a new player repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a player by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<player::Model>> {
        Player::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// List all players registered under a school.
    pub async fn find_by_school(&self, school_id: &str) -> AppResult<Vec<player::Model>> {
        Player::find()
            .filter(player::Column::SchoolId.eq(school_id))
            .order_by_asc(player::Column::Name)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new player record.
    pub async fn create(&self, model: player::ActiveModel) -> AppResult<player::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
