//! Session-scoped profile resolution.
//!
//! Resolves the authenticated identity to the one school record it
//! owns, and assembles the categorized roster for display.

use usra_common::{AppError, AppResult};
use usra_db::{
    entities::{player, school},
    repositories::{PlayerRepository, SchoolRepository},
};

use super::identity::Identity;
use super::roster::{Roster, categorize};

/// A resolved school profile.
#[derive(Debug, Clone)]
pub struct SchoolProfile {
    /// The owned school record.
    pub school: school::Model,
    /// Flat player list (empty when the secondary fetch failed).
    pub players: Vec<player::Model>,
    /// Categorized roster derived from `players`.
    pub roster: Roster,
}

/// Profile resolver over the school and player repositories.
#[derive(Clone)]
pub struct ProfileService {
    school_repo: SchoolRepository,
    player_repo: PlayerRepository,
}

impl ProfileService {
    /// Create a new profile service.
    #[must_use]
    pub const fn new(school_repo: SchoolRepository, player_repo: PlayerRepository) -> Self {
        Self {
            school_repo,
            player_repo,
        }
    }

    /// Resolve a target school for the ambient identity.
    ///
    /// No identity means the caller must sign in first. With one, the
    /// record must both exist and be owned by that identity; a missing
    /// record and someone else's record are deliberately
    /// indistinguishable in the resulting error.
    ///
    /// The player list is a secondary, independent fetch: its failure
    /// is non-fatal and yields a profile with an empty roster.
    pub async fn resolve(
        &self,
        identity: Option<&Identity>,
        school_id: &str,
    ) -> AppResult<SchoolProfile> {
        let identity = identity.ok_or(AppError::Unauthorized)?;

        let school = self
            .school_repo
            .find_by_id_and_owner(school_id, &identity.id)
            .await?
            .ok_or_else(|| AppError::SchoolNotFound(school_id.to_string()))?;

        let players = match self.player_repo.find_by_school(&school.id).await {
            Ok(players) => players,
            Err(e) => {
                tracing::warn!(
                    school_id = %school.id,
                    error = %e,
                    "Player roster fetch failed; rendering profile with empty roster"
                );
                Vec::new()
            }
        };

        let roster = categorize(&players);

        Ok(SchoolProfile {
            school,
            players,
            roster,
        })
    }

    /// Resolve the ambient identity to its owned school ID, if any.
    ///
    /// This is the sign-in-time lookup the dashboard uses to decide
    /// where to send the administrator.
    pub async fn owned_school_id(&self, identity: &Identity) -> AppResult<Option<String>> {
        Ok(self
            .school_repo
            .find_by_owner(&identity.id)
            .await?
            .map(|school| school.id))
    }
}
