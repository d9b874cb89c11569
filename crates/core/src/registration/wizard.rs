//! The registration wizard state machine.
//!
//! Owns the step cursor, transition guards, the terms-acceptance flag
//! and the final submission sequence. Collaborators (identity,
//! object storage, school records) are injected as trait objects so the
//! same machine runs against production adapters and test stubs.

use usra_common::{AppError, AppResult, StorageNamespace, generate_storage_key};

use super::draft::{RegistrationDraft, optional};
use super::validation::{FieldErrors, validate_admin_info, validate_school_info};
use crate::services::identity::{IdentityProvider, Session};
use crate::services::school::{NewSchoolRecord, SchoolStore};
use crate::services::storage::{ObjectStore, StoredObject};

/// Wizard steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    /// Step 1: school identity and badge.
    SchoolInfo,
    /// Step 2: administrator identity and credentials.
    AdminInfo,
    /// Step 3: review and submit.
    Review,
}

impl WizardStep {
    /// 1-based step number for display.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::SchoolInfo => 1,
            Self::AdminInfo => 2,
            Self::Review => 3,
        }
    }

    /// Parse a 1-based step number.
    #[must_use]
    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::SchoolInfo),
            2 => Some(Self::AdminInfo),
            3 => Some(Self::Review),
            _ => None,
        }
    }
}

/// Submission phase of the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionPhase {
    /// No submission attempted yet (or a blocked attempt).
    Idle,
    /// The submission sequence is running.
    Submitting,
    /// Submission completed; the school record exists.
    Submitted {
        /// ID of the created school record.
        school_id: String,
    },
    /// Submission failed; the message is retained for display.
    Failed {
        /// The triggering error's message text.
        message: String,
    },
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct RegistrationOutcome {
    /// ID of the created school record.
    pub school_id: String,
    /// The session established for the new account.
    pub session: Session,
    /// Profile path to navigate to.
    pub profile_path: String,
}

/// The three-step registration wizard.
#[derive(Debug)]
pub struct RegistrationWizard {
    draft: RegistrationDraft,
    step: WizardStep,
    terms_accepted: bool,
    phase: SubmissionPhase,
    errors: FieldErrors,
}

impl Default for RegistrationWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationWizard {
    /// Create a wizard with an empty draft, at step 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            draft: RegistrationDraft::new(),
            step: WizardStep::SchoolInfo,
            terms_accepted: false,
            phase: SubmissionPhase::Idle,
            errors: FieldErrors::new(),
        }
    }

    /// The current step.
    #[must_use]
    pub const fn step(&self) -> WizardStep {
        self.step
    }

    /// The current submission phase.
    #[must_use]
    pub const fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    /// The most recently surfaced field errors.
    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Whether the terms checkbox has been ticked.
    #[must_use]
    pub const fn terms_accepted(&self) -> bool {
        self.terms_accepted
    }

    /// Read access to the draft.
    #[must_use]
    pub const fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    /// Mutable access to the draft (field-by-field edits).
    pub const fn draft_mut(&mut self) -> &mut RegistrationDraft {
        &mut self.draft
    }

    /// Set the terms-acceptance flag.
    pub const fn set_terms_accepted(&mut self, accepted: bool) {
        self.terms_accepted = accepted;
    }

    /// Attempt to advance to the next step.
    ///
    /// The forward transition is permitted only when the current step
    /// validates cleanly; otherwise the cursor stays put and the error
    /// map is retained for display. Returns whether the cursor moved.
    pub fn next(&mut self) -> bool {
        let (errors, target) = match self.step() {
            WizardStep::SchoolInfo => (validate_school_info(&self.draft), WizardStep::AdminInfo),
            WizardStep::AdminInfo => (validate_admin_info(&self.draft), WizardStep::Review),
            WizardStep::Review => (FieldErrors::new(), WizardStep::Review),
        };

        if errors.is_empty() {
            self.errors.clear();
            self.step = target;
            true
        } else {
            self.errors = errors;
            false
        }
    }

    /// Go back one step. Always permitted; never below step 1.
    pub fn back(&mut self) {
        self.errors.clear();
        self.step = match self.step() {
            WizardStep::SchoolInfo | WizardStep::AdminInfo => WizardStep::SchoolInfo,
            WizardStep::Review => WizardStep::AdminInfo,
        };
    }

    /// Run the submission sequence.
    ///
    /// Gated on being at the Review step with a clean admin-info
    /// re-validation and the terms accepted; a blocked attempt touches
    /// no collaborator and leaves the cursor where it is.
    ///
    /// The sequence is strictly ordered: create account, establish
    /// session, upload badge (if attached), upload photo (if attached),
    /// insert the school record. Completed steps are not rolled back on
    /// a later failure; the only compensation is a best-effort session
    /// teardown once one was established.
    pub async fn submit(
        &mut self,
        identity: &dyn IdentityProvider,
        objects: &dyn ObjectStore,
        schools: &dyn SchoolStore,
    ) -> AppResult<RegistrationOutcome> {
        if self.step() != WizardStep::Review {
            return Err(AppError::BadRequest(
                "Submission is only available from the review step".to_string(),
            ));
        }

        let errors = validate_admin_info(&self.draft);
        if !errors.is_empty() {
            self.errors = errors;
            return Err(AppError::Validation(
                "Please correct the highlighted fields before submitting".to_string(),
            ));
        }

        if !self.terms_accepted {
            return Err(AppError::Validation(
                "You must accept the terms and conditions to submit".to_string(),
            ));
        }

        self.phase = SubmissionPhase::Submitting;

        match self.run_submission(identity, objects, schools).await {
            Ok(outcome) => {
                self.phase = SubmissionPhase::Submitted {
                    school_id: outcome.school_id.clone(),
                };
                Ok(outcome)
            }
            Err(e) => {
                // Control returns to Review with the message retained.
                self.phase = SubmissionPhase::Failed {
                    message: e.to_string(),
                };
                Err(e)
            }
        }
    }

    async fn run_submission(
        &self,
        identity: &dyn IdentityProvider,
        objects: &dyn ObjectStore,
        schools: &dyn SchoolStore,
    ) -> AppResult<RegistrationOutcome> {
        let draft = &self.draft;

        // 1. Create the account.
        let created = identity
            .create_account(
                &draft.admin_email,
                &draft.admin_password,
                optional(&draft.admin_name).as_deref(),
            )
            .await?;

        // 2. Establish a session for it.
        let session = identity
            .create_session(&draft.admin_email, &draft.admin_password)
            .await?;

        // 3. Upload the badge, if attached.
        let badge = match draft.school_badge.attachment() {
            Some(attachment) => {
                let key = generate_storage_key(&created.id, &attachment.file_name);
                match objects
                    .upload(
                        StorageNamespace::SchoolBadges,
                        &key,
                        &attachment.data,
                        &attachment.content_type,
                    )
                    .await
                {
                    Ok(stored) => Some(stored),
                    Err(e) => return self.abort(identity, &session, e).await,
                }
            }
            None => None,
        };

        // 4. Upload the admin photo, if attached.
        let photo = match draft.admin_photo.attachment() {
            Some(attachment) => {
                let key = generate_storage_key(&created.id, &attachment.file_name);
                match objects
                    .upload(
                        StorageNamespace::AdminPhotos,
                        &key,
                        &attachment.data,
                        &attachment.content_type,
                    )
                    .await
                {
                    Ok(stored) => Some(stored),
                    Err(e) => return self.abort(identity, &session, e).await,
                }
            }
            None => None,
        };

        // 5. Create the school record.
        let record = NewSchoolRecord {
            account_id: created.id.clone(),
            name: draft.school_name.trim().to_string(),
            centre_number: optional(&draft.centre_number),
            email: optional(&draft.school_email),
            office_contact: draft.office_contact.trim().to_string(),
            region: draft.region.clone(),
            district: draft.district.trim().to_string(),
            badge: badge.map(StoredObject::into_parts),
            admin_name: draft.admin_name.trim().to_string(),
            admin_nin: optional(&draft.admin_nin),
            admin_contact: draft.admin_contact.trim().to_string(),
            admin_email: draft.admin_email.trim().to_string(),
            admin_role: draft.admin_role.clone(),
            admin_education: draft.admin_education.clone(),
            admin_photo: photo.map(StoredObject::into_parts),
        };

        let school_id = match schools.insert_school(record).await {
            Ok(id) => id,
            Err(e) => return self.abort(identity, &session, e).await,
        };

        // 6. Hand the new record over for navigation.
        Ok(RegistrationOutcome {
            profile_path: format!("/profile/{school_id}"),
            school_id,
            session,
        })
    }

    /// Best-effort session teardown after a mid-sequence failure.
    ///
    /// The account created in step 1 is left in place (no rollback);
    /// only the session is torn down, and a teardown failure is logged
    /// rather than masking the original error.
    async fn abort<T>(
        &self,
        identity: &dyn IdentityProvider,
        session: &Session,
        error: AppError,
    ) -> AppResult<T> {
        if let Err(teardown) = identity.delete_session(&session.token).await {
            tracing::warn!(error = %teardown, "Session teardown after failed submission failed");
        }
        Err(error)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::registration::attachment::Attachment;
    use crate::services::identity::Identity;

    /// Recording stub for all three collaborators.
    #[derive(Default)]
    struct StubCollaborators {
        calls: Mutex<Vec<String>>,
        registered_emails: Mutex<Vec<String>>,
        fail_account: bool,
        fail_session: bool,
        fail_upload: bool,
        fail_insert: bool,
    }

    impl StubCollaborators {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: impl Into<String>) {
            self.calls.lock().unwrap().push(call.into());
        }
    }

    #[async_trait::async_trait]
    impl IdentityProvider for StubCollaborators {
        async fn create_account(
            &self,
            email: &str,
            _password: &str,
            display_name: Option<&str>,
        ) -> AppResult<Identity> {
            self.record("create_account");
            if self.fail_account {
                return Err(AppError::Auth("Password rejected by policy".to_string()));
            }
            let mut registered = self.registered_emails.lock().unwrap();
            if registered.iter().any(|e| e == email) {
                return Err(AppError::Auth(
                    "An account with this email is already registered".to_string(),
                ));
            }
            registered.push(email.to_string());
            Ok(Identity {
                id: "acc1".to_string(),
                email: email.to_string(),
                display_name: display_name.map(String::from),
            })
        }

        async fn create_session(&self, _email: &str, _password: &str) -> AppResult<Session> {
            self.record("create_session");
            if self.fail_session {
                return Err(AppError::Session("Sign-in failed".to_string()));
            }
            Ok(Session {
                token: "tok1".to_string(),
            })
        }

        async fn current_identity(&self, _token: &str) -> AppResult<Option<Identity>> {
            Ok(None)
        }

        async fn delete_session(&self, _token: &str) -> AppResult<()> {
            self.record("delete_session");
            Ok(())
        }
    }

    #[async_trait::async_trait]
    impl ObjectStore for StubCollaborators {
        async fn upload(
            &self,
            namespace: StorageNamespace,
            key: &str,
            _data: &[u8],
            _content_type: &str,
        ) -> AppResult<StoredObject> {
            self.record(format!("upload:{namespace}"));
            if self.fail_upload {
                return Err(AppError::Upload("Object store unavailable".to_string()));
            }
            Ok(StoredObject {
                key: key.to_string(),
                url: format!("/files/{namespace}/{key}"),
            })
        }

        fn public_url(&self, namespace: StorageNamespace, key: &str) -> String {
            format!("/files/{namespace}/{key}")
        }
    }

    #[async_trait::async_trait]
    impl SchoolStore for StubCollaborators {
        async fn insert_school(&self, _record: NewSchoolRecord) -> AppResult<String> {
            self.record("insert_school");
            if self.fail_insert {
                return Err(AppError::Persist("Insert failed".to_string()));
            }
            Ok("school1".to_string())
        }
    }

    fn badge() -> Attachment {
        Attachment::from_upload("badge.png", "image/png", vec![1, 2, 3]).unwrap()
    }

    fn photo() -> Attachment {
        Attachment::from_upload("photo.jpg", "image/jpeg", vec![4, 5, 6]).unwrap()
    }

    fn filled_wizard() -> RegistrationWizard {
        let mut wizard = RegistrationWizard::new();
        let draft = wizard.draft_mut();
        draft.school_name = "Acme High".to_string();
        draft.office_contact = "+256700000000".to_string();
        draft.region = "Central".to_string();
        draft.district = "Kampala".to_string();
        draft.school_badge.set_file(Some(badge()));
        draft.admin_name = "John Doe".to_string();
        draft.admin_contact = "+256700000001".to_string();
        draft.admin_email = "coordinator@acmehigh.ac.ug".to_string();
        draft.admin_role = "Sports Coordinator".to_string();
        draft.admin_education = "Bachelor's Degree".to_string();
        draft.admin_password = "correct-horse-9".to_string();
        draft.confirm_password = "correct-horse-9".to_string();
        draft.admin_photo.set_file(Some(photo()));
        wizard
    }

    fn wizard_at_review() -> RegistrationWizard {
        let mut wizard = filled_wizard();
        assert!(wizard.next());
        assert!(wizard.next());
        assert_eq!(wizard.step(), WizardStep::Review);
        wizard
    }

    #[test]
    fn test_forward_transition_blocked_by_validation() {
        let mut wizard = RegistrationWizard::new();

        assert!(!wizard.next());
        assert_eq!(wizard.step(), WizardStep::SchoolInfo);
        assert_eq!(wizard.errors().len(), 5);
    }

    #[test]
    fn test_forward_transitions_with_valid_draft() {
        let mut wizard = filled_wizard();

        assert!(wizard.next());
        assert_eq!(wizard.step(), WizardStep::AdminInfo);
        assert!(wizard.next());
        assert_eq!(wizard.step(), WizardStep::Review);
    }

    #[test]
    fn test_back_is_unconditional() {
        let mut wizard = wizard_at_review();

        wizard.back();
        assert_eq!(wizard.step(), WizardStep::AdminInfo);
        wizard.back();
        assert_eq!(wizard.step(), WizardStep::SchoolInfo);
        wizard.back();
        assert_eq!(wizard.step(), WizardStep::SchoolInfo);
    }

    #[tokio::test]
    async fn test_unaccepted_terms_touch_no_collaborator() {
        let stubs = StubCollaborators::default();
        let mut wizard = wizard_at_review();

        let result = wizard.submit(&stubs, &stubs, &stubs).await;

        assert!(result.is_err());
        assert!(stubs.calls().is_empty());
        assert_eq!(wizard.step(), WizardStep::Review);
        assert_eq!(*wizard.phase(), SubmissionPhase::Idle);
    }

    #[tokio::test]
    async fn test_happy_path_calls_collaborators_in_order() {
        let stubs = StubCollaborators::default();
        let mut wizard = wizard_at_review();
        wizard.set_terms_accepted(true);

        let outcome = wizard.submit(&stubs, &stubs, &stubs).await.unwrap();

        assert_eq!(
            stubs.calls(),
            vec![
                "create_account",
                "create_session",
                "upload:school-badges",
                "upload:admin-photos",
                "insert_school",
            ]
        );
        assert_eq!(outcome.school_id, "school1");
        assert_eq!(outcome.profile_path, "/profile/school1");
        assert_eq!(
            *wizard.phase(),
            SubmissionPhase::Submitted {
                school_id: "school1".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_failed_upload_aborts_without_insert() {
        let stubs = StubCollaborators {
            fail_upload: true,
            ..StubCollaborators::default()
        };
        let mut wizard = wizard_at_review();
        wizard.set_terms_accepted(true);

        let result = wizard.submit(&stubs, &stubs, &stubs).await;

        assert!(matches!(result, Err(AppError::Upload(_))));
        // The account survives, no school record was created, and the
        // session was torn down best-effort.
        assert_eq!(
            stubs.calls(),
            vec!["create_account", "create_session", "upload:school-badges", "delete_session"]
        );
        assert!(matches!(wizard.phase(), SubmissionPhase::Failed { .. }));
        assert_eq!(wizard.step(), WizardStep::Review);
    }

    #[tokio::test]
    async fn test_retry_after_partial_failure_fails_fast_on_duplicate_account() {
        let stubs = StubCollaborators {
            fail_insert: true,
            ..StubCollaborators::default()
        };
        let mut wizard = wizard_at_review();
        wizard.set_terms_accepted(true);

        let first = wizard.submit(&stubs, &stubs, &stubs).await;
        assert!(matches!(first, Err(AppError::Persist(_))));

        // The orphaned account from the first attempt makes the retry
        // fail fast with a clear Auth error, not silently succeed.
        let retry = wizard.submit(&stubs, &stubs, &stubs).await;
        assert!(matches!(retry, Err(AppError::Auth(_))));

        let calls = stubs.calls();
        assert_eq!(calls.last().map(String::as_str), Some("create_account"));
        assert_eq!(
            calls.iter().filter(|c| *c == "insert_school").count(),
            1,
            "no second insert may be attempted"
        );
    }

    #[tokio::test]
    async fn test_failed_session_aborts_before_uploads() {
        let stubs = StubCollaborators {
            fail_session: true,
            ..StubCollaborators::default()
        };
        let mut wizard = wizard_at_review();
        wizard.set_terms_accepted(true);

        let result = wizard.submit(&stubs, &stubs, &stubs).await;

        assert!(matches!(result, Err(AppError::Session(_))));
        assert_eq!(stubs.calls(), vec!["create_account", "create_session"]);
    }

    #[tokio::test]
    async fn test_submit_away_from_review_is_rejected() {
        let stubs = StubCollaborators::default();
        let mut wizard = filled_wizard();
        wizard.set_terms_accepted(true);

        let result = wizard.submit(&stubs, &stubs, &stubs).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert!(stubs.calls().is_empty());
    }
}
