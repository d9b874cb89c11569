//! School repository.

use std::sync::Arc;

use crate::entities::{School, school};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use usra_common::{AppError, AppResult};

/// School repository for database operations.
#[derive(Clone)]
pub struct SchoolRepository {
    db: Arc<DatabaseConnection>,
}

impl SchoolRepository {
    /// Create a new school repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a school by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<school::Model>> {
        School::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find a school by ID, scoped to an owner account.
    ///
    /// Both a truly missing record and one owned by a different account
    /// come back as `None`.
    pub async fn find_by_id_and_owner(
        &self,
        id: &str,
        account_id: &str,
    ) -> AppResult<Option<school::Model>> {
        School::find()
            .filter(school::Column::Id.eq(id))
            .filter(school::Column::AccountId.eq(account_id))
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find the school owned by an account, if any.
    ///
    /// The one-school-per-owner invariant rests on this lookup; the
    /// newest record wins if data predating that rule exists.
    pub async fn find_by_owner(&self, account_id: &str) -> AppResult<Option<school::Model>> {
        School::find()
            .filter(school::Column::AccountId.eq(account_id))
            .order_by_desc(school::Column::CreatedAt)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new school record.
    pub async fn create(&self, model: school::ActiveModel) -> AppResult<school::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
