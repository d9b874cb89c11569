//! School registration endpoints.
//!
//! `/validate` exposes the wizard's per-step validation for thin
//! clients gating their forward transitions; the multipart root route
//! drives the full wizard through its steps and submission sequence.

use axum::{
    Json, Router,
    extract::{Multipart, State},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use usra_common::{AppError, AppResult};
use usra_core::{
    ADMIN_ROLES, Attachment, CLASS_LEVELS, EDUCATION_LEVELS, FieldErrors, PasswordStrength,
    REGIONS, RegistrationDraft, RegistrationWizard, SEX_OPTIONS, WizardStep, password_strength,
    validate_step,
};

use crate::{middleware::AppState, response::ApiResponse};

/// The fixed option sets the form selects are built from.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationOptions {
    pub regions: &'static [&'static str],
    pub admin_roles: &'static [&'static str],
    pub education_levels: &'static [&'static str],
    pub class_levels: &'static [&'static str],
    pub sex_options: &'static [&'static str],
}

/// List the enumerated option sets for the registration forms.
async fn options() -> Json<RegistrationOptions> {
    Json(RegistrationOptions {
        regions: &REGIONS,
        admin_roles: &ADMIN_ROLES,
        education_levels: &EDUCATION_LEVELS,
        class_levels: &CLASS_LEVELS,
        sex_options: &SEX_OPTIONS,
    })
}

/// Step-validation request: the client's draft state, minus the raw
/// file bytes (attachment presence is mirrored with flags).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidateRequest {
    pub step: u8,
    pub school_name: String,
    pub centre_number: String,
    pub school_email: String,
    pub office_contact: String,
    pub region: String,
    pub district: String,
    pub school_badge_attached: bool,
    pub admin_name: String,
    pub admin_nin: String,
    pub admin_contact: String,
    pub admin_email: String,
    pub admin_role: String,
    pub admin_education: String,
    pub admin_password: String,
    pub confirm_password: String,
    pub admin_photo_attached: bool,
}

/// Step-validation response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateResponse {
    pub valid: bool,
    pub errors: FieldErrors,
    pub password_strength: PasswordStrength,
}

// Stand-in for a client-held attachment when only presence matters.
fn placeholder_image(name: &str) -> AppResult<Attachment> {
    Attachment::from_upload(name, "image/png", Vec::new())
}

impl ValidateRequest {
    fn into_draft(self) -> AppResult<RegistrationDraft> {
        let mut draft = RegistrationDraft::new();
        draft.school_name = self.school_name;
        draft.centre_number = self.centre_number;
        draft.school_email = self.school_email;
        draft.office_contact = self.office_contact;
        draft.region = self.region;
        draft.district = self.district;
        draft.admin_name = self.admin_name;
        draft.admin_nin = self.admin_nin;
        draft.admin_contact = self.admin_contact;
        draft.admin_email = self.admin_email;
        draft.admin_role = self.admin_role;
        draft.admin_education = self.admin_education;
        draft.admin_password = self.admin_password;
        draft.confirm_password = self.confirm_password;

        if self.school_badge_attached {
            draft
                .school_badge
                .set_file(Some(placeholder_image("badge.png")?));
        }
        if self.admin_photo_attached {
            draft
                .admin_photo
                .set_file(Some(placeholder_image("photo.png")?));
        }

        Ok(draft)
    }
}

/// Validate a wizard step against the submitted draft state.
async fn validate(
    State(_state): State<AppState>,
    Json(req): Json<ValidateRequest>,
) -> AppResult<ApiResponse<ValidateResponse>> {
    let step = WizardStep::from_number(req.step)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown wizard step {}", req.step)))?;

    let strength = password_strength(&req.admin_password);
    let draft = req.into_draft()?;
    let errors = validate_step(&draft, step);

    Ok(ApiResponse::ok(ValidateResponse {
        valid: errors.is_empty(),
        errors,
        password_strength: strength,
    }))
}

/// Registration response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    pub school_id: String,
    pub token: String,
    pub profile_path: String,
}

/// Submit a complete registration via multipart form.
///
/// Drives the wizard through both validated forward transitions before
/// running the submission sequence, so a draft that would not pass the
/// step gates cannot be submitted directly either.
async fn submit_registration(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<ApiResponse<RegistrationResponse>> {
    let mut wizard = RegistrationWizard::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "school_badge" | "admin_photo" => {
                let file_name = field
                    .file_name()
                    .map_or_else(|| "upload.bin".to_string(), ToString::to_string);
                let content_type = field
                    .content_type()
                    .map_or_else(|| "application/octet-stream".to_string(), ToString::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?
                    .to_vec();

                let attachment = Attachment::from_upload(file_name, content_type, data)?;
                let draft = wizard.draft_mut();
                if name == "school_badge" {
                    draft.school_badge.set_file(Some(attachment));
                } else {
                    draft.admin_photo.set_file(Some(attachment));
                }
            }
            "terms_accepted" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                wizard.set_terms_accepted(text == "true" || text == "1");
            }
            _ => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                set_draft_field(wizard.draft_mut(), &name, text);
            }
        }
    }

    // Step 1 -> 2 -> 3, each transition gated by validation.
    for step_name in ["school information", "administrator information"] {
        if !wizard.next() {
            let fields = wizard
                .errors()
                .keys()
                .copied()
                .collect::<Vec<_>>()
                .join(", ");
            return Err(AppError::Validation(format!(
                "Invalid {step_name}: {fields}"
            )));
        }
    }

    let outcome = wizard
        .submit(
            &state.identity_service,
            &state.storage_service,
            &state.school_service,
        )
        .await?;

    Ok(ApiResponse::ok(RegistrationResponse {
        school_id: outcome.school_id,
        token: outcome.session.token,
        profile_path: outcome.profile_path,
    }))
}

fn set_draft_field(draft: &mut RegistrationDraft, name: &str, value: String) {
    match name {
        "school_name" => draft.school_name = value,
        "centre_number" => draft.centre_number = value,
        "school_email" => draft.school_email = value,
        "office_contact" => draft.office_contact = value,
        "region" => draft.region = value,
        "district" => draft.district = value,
        "admin_name" => draft.admin_name = value,
        "admin_nin" => draft.admin_nin = value,
        "admin_contact" => draft.admin_contact = value,
        "admin_email" => draft.admin_email = value,
        "admin_role" => draft.admin_role = value,
        "admin_education" => draft.admin_education = value,
        "password" => draft.admin_password = value,
        "confirm_password" => draft.confirm_password = value,
        _ => {}
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(submit_registration))
        .route("/validate", post(validate))
        .route("/options", get(options))
}
