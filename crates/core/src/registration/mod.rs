//! The school registration workflow.
//!
//! A three-step wizard (School Info, Admin Info, Review & Submit) with
//! per-step field validation, image attachments and a strictly ordered
//! submission sequence against the identity, object-storage and record
//! collaborators.

pub mod attachment;
pub mod draft;
pub mod validation;
pub mod wizard;

pub use attachment::{Attachment, AttachmentSlot};
pub use draft::{
    ADMIN_ROLES, CLASS_LEVELS, EDUCATION_LEVELS, REGIONS, RegistrationDraft, SEX_OPTIONS,
};
pub use validation::{FieldErrors, PasswordStrength, password_strength, validate_step};
pub use wizard::{RegistrationOutcome, RegistrationWizard, SubmissionPhase, WizardStep};
