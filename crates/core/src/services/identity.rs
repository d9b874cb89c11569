//! Identity and session management.
//!
//! The registration wizard and the sign-in flow talk to the
//! [`IdentityProvider`] trait; [`AccountIdentityProvider`] is the
//! production adapter over the account repository.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::Utc;
use sea_orm::Set;
use usra_common::{AppError, AppResult, IdGenerator};
use usra_db::{entities::account, repositories::AccountRepository};

/// Minimum password length accepted by the account policy.
const MIN_PASSWORD_LEN: usize = 8;

/// An authenticated principal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Account ID.
    pub id: String,
    /// Account email.
    pub email: String,
    /// Display name, if set.
    pub display_name: Option<String>,
}

impl From<&account::Model> for Identity {
    fn from(model: &account::Model) -> Self {
        Self {
            id: model.id.clone(),
            email: model.email.clone(),
            display_name: model.display_name.clone(),
        }
    }
}

/// A live session token scoping subsequent calls to an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Bearer token.
    pub token: String,
}

/// Identity-service collaborator.
///
/// Account-creation failures surface as [`AppError::Auth`], sign-in
/// failures as [`AppError::Session`].
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create a new account.
    async fn create_account(
        &self,
        email: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> AppResult<Identity>;

    /// Establish a session by verifying credentials.
    async fn create_session(&self, email: &str, password: &str) -> AppResult<Session>;

    /// Resolve a token to the identity it scopes, if any.
    async fn current_identity(&self, token: &str) -> AppResult<Option<Identity>>;

    /// Tear down a session.
    async fn delete_session(&self, token: &str) -> AppResult<()>;
}

/// Production identity provider over the account repository.
#[derive(Clone)]
pub struct AccountIdentityProvider {
    account_repo: AccountRepository,
    id_gen: IdGenerator,
}

impl AccountIdentityProvider {
    /// Create a new identity provider.
    #[must_use]
    pub const fn new(account_repo: AccountRepository) -> Self {
        Self {
            account_repo,
            id_gen: IdGenerator::new(),
        }
    }

    /// Authenticate a bearer token to the full account model.
    ///
    /// Used by the API auth middleware, which stores the model in
    /// request extensions.
    pub async fn authenticate_by_token(&self, token: &str) -> AppResult<account::Model> {
        self.account_repo
            .find_by_token(token)
            .await?
            .ok_or(AppError::Unauthorized)
    }
}

#[async_trait::async_trait]
impl IdentityProvider for AccountIdentityProvider {
    async fn create_account(
        &self,
        email: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> AppResult<Identity> {
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::Auth(format!(
                "Password rejected by policy: must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        if self.account_repo.find_by_email(email).await?.is_some() {
            return Err(AppError::Auth(
                "An account with this email is already registered".to_string(),
            ));
        }

        let password_hash = hash_password(password)?;
        let account_id = self.id_gen.generate();

        let model = account::ActiveModel {
            id: Set(account_id.clone()),
            email: Set(email.to_string()),
            email_lower: Set(email.to_lowercase()),
            password_hash: Set(password_hash),
            display_name: Set(display_name.map(String::from)),
            token: Set(None),
            created_at: Set(Utc::now().into()),
            updated_at: Set(None),
        };

        let created = self.account_repo.create(model).await.map_err(|e| {
            // Covers the unique-index race two concurrent signups can hit.
            AppError::Auth(format!("Could not create account: {e}"))
        })?;

        tracing::info!(account_id = %created.id, "Account created");

        Ok(Identity::from(&created))
    }

    async fn create_session(&self, email: &str, password: &str) -> AppResult<Session> {
        let account = self
            .account_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::Session("Invalid email or password".to_string()))?;

        if !verify_password(password, &account.password_hash)? {
            return Err(AppError::Session("Invalid email or password".to_string()));
        }

        let token = self.id_gen.generate_token();

        let mut active: account::ActiveModel = account.into();
        active.token = Set(Some(token.clone()));
        active.updated_at = Set(Some(Utc::now().into()));

        self.account_repo
            .update(active)
            .await
            .map_err(|e| AppError::Session(format!("Could not establish session: {e}")))?;

        Ok(Session { token })
    }

    async fn current_identity(&self, token: &str) -> AppResult<Option<Identity>> {
        Ok(self
            .account_repo
            .find_by_token(token)
            .await?
            .as_ref()
            .map(Identity::from))
    }

    async fn delete_session(&self, token: &str) -> AppResult<()> {
        if let Some(account) = self.account_repo.find_by_token(token).await? {
            let mut active: account::ActiveModel = account.into();
            active.token = Set(None);
            active.updated_at = Set(Some(Utc::now().into()));
            self.account_repo.update(active).await?;
        }
        Ok(())
    }
}

/// Hash a password with argon2.
fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {e}")))
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| AppError::Internal(format!("Invalid hash: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use sea_orm::{DatabaseBackend, MockDatabase};

    use super::*;

    fn mock_account(id: &str, email: &str, password: &str) -> account::Model {
        account::Model {
            id: id.to_string(),
            email: email.to_string(),
            email_lower: email.to_lowercase(),
            password_hash: hash_password(password).unwrap(),
            display_name: None,
            token: None,
            created_at: Utc::now().into(),
            updated_at: None,
        }
    }

    #[test]
    fn test_password_roundtrip() {
        let hash = hash_password("correct-horse-9").unwrap();
        assert!(verify_password("correct-horse-9", &hash).unwrap());
        assert!(!verify_password("wrong-horse", &hash).unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_email_fails_fast() {
        let existing = mock_account("acc1", "taken@example.com", "correct-horse-9");
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[existing]])
                .into_connection(),
        );
        let provider = AccountIdentityProvider::new(AccountRepository::new(db));

        let result = provider
            .create_account("taken@example.com", "correct-horse-9", None)
            .await;

        assert!(matches!(result, Err(AppError::Auth(_))));
    }

    #[tokio::test]
    async fn test_short_password_rejected_by_policy() {
        let db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
        let provider = AccountIdentityProvider::new(AccountRepository::new(db));

        let result = provider
            .create_account("new@example.com", "short", None)
            .await;

        assert!(matches!(result, Err(AppError::Auth(_))));
    }

    #[tokio::test]
    async fn test_session_with_unknown_email_fails() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<account::Model>::new()])
                .into_connection(),
        );
        let provider = AccountIdentityProvider::new(AccountRepository::new(db));

        let result = provider
            .create_session("nobody@example.com", "whatever-pass")
            .await;

        assert!(matches!(result, Err(AppError::Session(_))));
    }
}
