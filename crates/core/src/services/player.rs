//! Player registration and listing.

use chrono::{NaiveDate, Utc};
use sea_orm::Set;
use std::sync::Arc;
use usra_common::{AppError, AppResult, IdGenerator, StorageNamespace, generate_storage_key};
use usra_db::{entities::player, repositories::PlayerRepository};

use crate::registration::attachment::Attachment;
use crate::registration::draft::{CLASS_LEVELS, SEX_OPTIONS};
use crate::registration::validation::FieldErrors;

use super::storage::ObjectStore;

/// Input for registering a player under a school.
#[derive(Debug, Clone)]
pub struct RegisterPlayerInput {
    /// Player full name.
    pub name: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Age as entered.
    pub age: i32,
    /// Sex ("Male"/"Female").
    pub sex: String,
    /// Class level (S1-S6).
    pub class_level: String,
    /// Learner ID number (LIN).
    pub learner_id: String,
    /// Next-of-kin contact.
    pub guardian_contact: Option<String>,
    /// Optional player photo.
    pub photo: Option<Attachment>,
}

/// Validate a player registration, field by field.
///
/// Same contract as the wizard's validation engine: a map from field
/// key to message, empty when valid.
#[must_use]
pub fn validate_player(input: &RegisterPlayerInput) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if input.name.trim().is_empty() {
        errors.insert("name", "Player name is required".to_string());
    }
    if input.age <= 0 {
        errors.insert("age", "Age must be a positive number".to_string());
    }
    if !SEX_OPTIONS.contains(&input.sex.as_str()) {
        errors.insert("sex", "Select Male or Female".to_string());
    }
    if !CLASS_LEVELS.contains(&input.class_level.as_str()) {
        errors.insert("class_level", "Select a class from the list".to_string());
    }
    if input.learner_id.trim().is_empty() {
        errors.insert("learner_id", "Learner ID number is required".to_string());
    }

    errors
}

/// Player service over the player repository and object store.
#[derive(Clone)]
pub struct PlayerService {
    player_repo: PlayerRepository,
    objects: Arc<dyn ObjectStore>,
    id_gen: IdGenerator,
}

impl PlayerService {
    /// Create a new player service.
    #[must_use]
    pub fn new(player_repo: PlayerRepository, objects: Arc<dyn ObjectStore>) -> Self {
        Self {
            player_repo,
            objects,
            id_gen: IdGenerator::new(),
        }
    }

    /// Register a player under a school.
    ///
    /// Ownership of the school must already be established by the
    /// caller (the profile resolver gates it). The optional photo is
    /// uploaded before the record is inserted; an upload failure aborts
    /// the registration.
    pub async fn register(
        &self,
        school_id: &str,
        input: RegisterPlayerInput,
    ) -> AppResult<player::Model> {
        let errors = validate_player(&input);
        if !errors.is_empty() {
            let summary = errors.values().cloned().collect::<Vec<_>>().join("; ");
            return Err(AppError::Validation(summary));
        }

        let (photo_key, photo_url) = match &input.photo {
            Some(photo) => {
                let key = generate_storage_key(school_id, &photo.file_name);
                let stored = self
                    .objects
                    .upload(
                        StorageNamespace::PlayerPhotos,
                        &key,
                        &photo.data,
                        &photo.content_type,
                    )
                    .await?;
                (Some(stored.key), Some(stored.url))
            }
            None => (None, None),
        };

        let model = player::ActiveModel {
            id: Set(self.id_gen.generate()),
            school_id: Set(school_id.to_string()),
            name: Set(input.name.trim().to_string()),
            date_of_birth: Set(input.date_of_birth),
            age: Set(input.age),
            sex: Set(input.sex),
            class_level: Set(input.class_level),
            learner_id: Set(input.learner_id.trim().to_string()),
            guardian_contact: Set(input.guardian_contact),
            photo_key: Set(photo_key),
            photo_url: Set(photo_url),
            created_at: Set(Utc::now().into()),
        };

        let created = match self.player_repo.create(model).await {
            Ok(created) => created,
            Err(AppError::Database(msg)) => return Err(AppError::Persist(msg)),
            Err(e) => return Err(e),
        };

        tracing::info!(
            player_id = %created.id,
            school_id = %school_id,
            "Player registered"
        );

        Ok(created)
    }

    /// List players registered under a school.
    pub async fn list(&self, school_id: &str) -> AppResult<Vec<player::Model>> {
        self.player_repo.find_by_school(school_id).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_input() -> RegisterPlayerInput {
        RegisterPlayerInput {
            name: "Okello Junior".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2009, 3, 14).unwrap(),
            age: 16,
            sex: "Male".to_string(),
            class_level: "S3".to_string(),
            learner_id: "LIN-2009-001".to_string(),
            guardian_contact: Some("+256700000002".to_string()),
            photo: None,
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(validate_player(&valid_input()).is_empty());
    }

    #[test]
    fn test_blank_name_and_learner_id_flagged() {
        let mut input = valid_input();
        input.name = "  ".to_string();
        input.learner_id = String::new();

        let errors = validate_player(&input);
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("learner_id"));
    }

    #[test]
    fn test_unknown_sex_and_class_flagged() {
        let mut input = valid_input();
        input.sex = "other".to_string();
        input.class_level = "P7".to_string();

        let errors = validate_player(&input);
        assert!(errors.contains_key("sex"));
        assert!(errors.contains_key("class_level"));
    }

    #[test]
    fn test_non_positive_age_flagged() {
        let mut input = valid_input();
        input.age = 0;

        let errors = validate_player(&input);
        assert!(errors.contains_key("age"));
    }
}
