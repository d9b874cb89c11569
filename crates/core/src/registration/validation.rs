//! Field validation for the registration wizard.
//!
//! Validation is pure and side-effect free: each step yields a map from
//! field key to a human-readable message for every failing field. An
//! empty map means the step is valid. Errors are returned as data and
//! never raised.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::draft::{ADMIN_ROLES, EDUCATION_LEVELS, REGIONS, RegistrationDraft};
use super::wizard::WizardStep;

/// Field-level validation errors, keyed by field name.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

// Basic local@domain.tld shape; full RFC compliance is not attempted.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// Check an email address against the basic `local@domain.tld` shape.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate the draft for the given wizard step.
///
/// The Review step re-runs the Admin Info rules; terms acceptance is
/// checked by the wizard itself, not here.
#[must_use]
pub fn validate_step(draft: &RegistrationDraft, step: WizardStep) -> FieldErrors {
    match step {
        WizardStep::SchoolInfo => validate_school_info(draft),
        WizardStep::AdminInfo | WizardStep::Review => validate_admin_info(draft),
    }
}

/// Validate the School Info step.
#[must_use]
pub fn validate_school_info(draft: &RegistrationDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if draft.school_name.trim().is_empty() {
        errors.insert("school_name", "School name is required".to_string());
    }
    if draft.office_contact.trim().is_empty() {
        errors.insert("office_contact", "Office contact is required".to_string());
    }
    if draft.region.trim().is_empty() {
        errors.insert("region", "Region is required".to_string());
    } else if !REGIONS.contains(&draft.region.as_str()) {
        errors.insert("region", "Select a region from the list".to_string());
    }
    if draft.district.trim().is_empty() {
        errors.insert("district", "District is required".to_string());
    }
    if !draft.school_badge.is_set() {
        errors.insert("school_badge", "School badge is required".to_string());
    }

    errors
}

/// Validate the Admin Info step.
#[must_use]
pub fn validate_admin_info(draft: &RegistrationDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if draft.admin_name.trim().is_empty() {
        errors.insert("admin_name", "Full name is required".to_string());
    }
    if draft.admin_contact.trim().is_empty() {
        errors.insert("admin_contact", "Contact is required".to_string());
    }
    if draft.admin_email.trim().is_empty() {
        errors.insert("admin_email", "Email is required".to_string());
    } else if !is_valid_email(&draft.admin_email) {
        errors.insert("admin_email", "Enter a valid email address".to_string());
    }
    if draft.admin_role.trim().is_empty() {
        errors.insert("admin_role", "Role is required".to_string());
    } else if !ADMIN_ROLES.contains(&draft.admin_role.as_str()) {
        errors.insert("admin_role", "Select a role from the list".to_string());
    }
    if draft.admin_education.trim().is_empty() {
        errors.insert("admin_education", "Education level is required".to_string());
    } else if !EDUCATION_LEVELS.contains(&draft.admin_education.as_str()) {
        errors.insert(
            "admin_education",
            "Select an education level from the list".to_string(),
        );
    }
    if draft.admin_password.is_empty() {
        errors.insert("admin_password", "Password is required".to_string());
    } else if draft.admin_password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert(
            "admin_password",
            format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
        );
    }
    // An empty confirmation is not flagged; only a mismatching one is.
    if !draft.confirm_password.is_empty() && draft.confirm_password != draft.admin_password {
        errors.insert("confirm_password", "Passwords do not match".to_string());
    }
    if !draft.admin_photo.is_set() {
        errors.insert("admin_photo", "Profile photo is required".to_string());
    }

    errors
}

/// Password strength band for display purposes.
///
/// Informational only; it never gates a wizard transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PasswordStrength {
    TooWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

/// Score a password into a strength band.
///
/// Points for length (8+, 12+) and each character class present,
/// capped at the top band.
#[must_use]
pub fn password_strength(password: &str) -> PasswordStrength {
    if password.is_empty() {
        return PasswordStrength::TooWeak;
    }

    let mut score = 0usize;
    if password.chars().count() >= 8 {
        score += 1;
    }
    if password.chars().count() >= 12 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }

    match score.min(4) {
        0 => PasswordStrength::TooWeak,
        1 => PasswordStrength::Weak,
        2 => PasswordStrength::Medium,
        3 => PasswordStrength::Strong,
        _ => PasswordStrength::VeryStrong,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::registration::attachment::Attachment;

    fn badge() -> Attachment {
        Attachment::from_upload("badge.png", "image/png", vec![1, 2, 3]).unwrap()
    }

    fn photo() -> Attachment {
        Attachment::from_upload("photo.jpg", "image/jpeg", vec![4, 5, 6]).unwrap()
    }

    fn valid_step1_draft() -> RegistrationDraft {
        let mut draft = RegistrationDraft::new();
        draft.school_name = "Acme High".to_string();
        draft.office_contact = "+256700000000".to_string();
        draft.region = "Central".to_string();
        draft.district = "Kampala".to_string();
        draft.school_badge.set_file(Some(badge()));
        draft
    }

    fn valid_step2_draft() -> RegistrationDraft {
        let mut draft = valid_step1_draft();
        draft.admin_name = "John Doe".to_string();
        draft.admin_contact = "+256700000001".to_string();
        draft.admin_email = "coordinator@acmehigh.ac.ug".to_string();
        draft.admin_role = "Sports Coordinator".to_string();
        draft.admin_education = "Bachelor's Degree".to_string();
        draft.admin_password = "correct-horse-9".to_string();
        draft.confirm_password = "correct-horse-9".to_string();
        draft.admin_photo.set_file(Some(photo()));
        draft
    }

    #[test]
    fn test_empty_draft_step1_flags_exactly_five_fields() {
        let errors = validate_school_info(&RegistrationDraft::new());

        let keys: Vec<&str> = errors.keys().copied().collect();
        assert_eq!(
            keys,
            vec![
                "district",
                "office_contact",
                "region",
                "school_badge",
                "school_name"
            ]
        );
    }

    #[test]
    fn test_valid_step1_draft_passes() {
        let errors = validate_school_info(&valid_step1_draft());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_unknown_region_is_flagged() {
        let mut draft = valid_step1_draft();
        draft.region = "Buganda".to_string();

        let errors = validate_school_info(&draft);
        assert!(errors.contains_key("region"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_valid_step2_draft_passes() {
        let errors = validate_admin_info(&valid_step2_draft());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_malformed_email_is_flagged() {
        for bad in ["plainaddress", "no@tld", "spaces in@mail.com", "@missing.local"] {
            let mut draft = valid_step2_draft();
            draft.admin_email = bad.to_string();

            let errors = validate_admin_info(&draft);
            assert!(errors.contains_key("admin_email"), "expected flag for {bad}");
        }
    }

    #[test]
    fn test_short_password_is_flagged() {
        let mut draft = valid_step2_draft();
        draft.admin_password = "seven77".to_string();
        draft.confirm_password = "seven77".to_string();

        let errors = validate_admin_info(&draft);
        assert!(errors.contains_key("admin_password"));
    }

    #[test]
    fn test_mismatching_confirmation_is_flagged() {
        let mut draft = valid_step2_draft();
        draft.confirm_password = "different-pass".to_string();

        let errors = validate_admin_info(&draft);
        assert!(errors.contains_key("confirm_password"));
    }

    #[test]
    fn test_empty_confirmation_is_not_flagged() {
        let mut draft = valid_step2_draft();
        draft.confirm_password = String::new();

        let errors = validate_admin_info(&draft);
        assert!(!errors.contains_key("confirm_password"));
    }

    #[test]
    fn test_review_step_reruns_admin_rules() {
        let mut draft = valid_step2_draft();
        draft.admin_photo.set_file(None);

        let errors = validate_step(&draft, WizardStep::Review);
        assert!(errors.contains_key("admin_photo"));
    }

    #[test]
    fn test_password_strength_bands() {
        assert_eq!(password_strength(""), PasswordStrength::TooWeak);
        assert_eq!(password_strength("abc"), PasswordStrength::Weak);
        assert_eq!(password_strength("abcdefgh"), PasswordStrength::Medium);
        assert_eq!(
            password_strength("Abcdefgh1!"),
            PasswordStrength::VeryStrong
        );
    }
}
