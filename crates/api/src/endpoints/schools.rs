//! School profile and roster endpoints.

use axum::{
    Router,
    extract::{Multipart, Path, State},
    routing::get,
};
use chrono::NaiveDate;
use serde::Serialize;
use usra_common::{AppError, AppResult};
use usra_core::{Attachment, Identity, RegisterPlayerInput, Roster};
use usra_db::entities::{
    player::Model as PlayerModel,
    school::{Model as SchoolModel, ReviewStatus},
};

use crate::{
    extractors::{AuthAccount, MaybeAuthAccount},
    middleware::AppState,
    response::ApiResponse,
};

/// Player response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub id: String,
    pub name: String,
    pub date_of_birth: String,
    pub age: i32,
    pub sex: String,
    pub class_level: String,
    pub learner_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardian_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub created_at: String,
}

impl From<PlayerModel> for PlayerResponse {
    fn from(p: PlayerModel) -> Self {
        Self {
            id: p.id,
            name: p.name,
            date_of_birth: p.date_of_birth.to_string(),
            age: p.age,
            sex: p.sex,
            class_level: p.class_level,
            learner_id: p.learner_id,
            guardian_contact: p.guardian_contact,
            photo_url: p.photo_url,
            created_at: p.created_at.to_rfc3339(),
        }
    }
}

/// School profile response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolProfileResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub centre_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub office_contact: String,
    pub region: String,
    pub district: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge_url: Option<String>,
    pub admin_name: String,
    pub admin_role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_photo_url: Option<String>,
    pub status: &'static str,
    pub created_at: String,
    pub players: Vec<PlayerResponse>,
    pub roster: Roster,
}

const fn status_label(status: ReviewStatus) -> &'static str {
    match status {
        ReviewStatus::Pending => "pending",
        ReviewStatus::Approved => "approved",
        ReviewStatus::Rejected => "rejected",
    }
}

fn profile_response(
    school: SchoolModel,
    players: Vec<PlayerModel>,
    roster: Roster,
) -> SchoolProfileResponse {
    SchoolProfileResponse {
        id: school.id,
        name: school.name,
        centre_number: school.centre_number,
        email: school.email,
        office_contact: school.office_contact,
        region: school.region,
        district: school.district,
        badge_url: school.badge_url,
        admin_name: school.admin_name,
        admin_role: school.admin_role,
        admin_photo_url: school.admin_photo_url,
        status: status_label(school.status),
        created_at: school.created_at.to_rfc3339(),
        players: players.into_iter().map(PlayerResponse::from).collect(),
        roster,
    }
}

/// Get the profile of an owned school, with its categorized roster.
async fn get_profile(
    MaybeAuthAccount(account): MaybeAuthAccount,
    State(state): State<AppState>,
    Path(school_id): Path<String>,
) -> AppResult<ApiResponse<SchoolProfileResponse>> {
    let identity = account.as_ref().map(Identity::from);

    let profile = state
        .profile_service
        .resolve(identity.as_ref(), &school_id)
        .await?;

    Ok(ApiResponse::ok(profile_response(
        profile.school,
        profile.players,
        profile.roster,
    )))
}

/// List the flat roster of an owned school.
async fn list_players(
    AuthAccount(account): AuthAccount,
    State(state): State<AppState>,
    Path(school_id): Path<String>,
) -> AppResult<ApiResponse<Vec<PlayerResponse>>> {
    let identity = Identity::from(&account);

    // Ownership gate; the flat listing surfaces fetch errors directly.
    state
        .profile_service
        .resolve(Some(&identity), &school_id)
        .await?;

    let players = state.player_service.list(&school_id).await?;

    Ok(ApiResponse::ok(
        players.into_iter().map(PlayerResponse::from).collect(),
    ))
}

/// Register a player under an owned school (multipart form).
async fn register_player(
    AuthAccount(account): AuthAccount,
    State(state): State<AppState>,
    Path(school_id): Path<String>,
    mut multipart: Multipart,
) -> AppResult<ApiResponse<PlayerResponse>> {
    let identity = Identity::from(&account);

    // Ownership gate before anything is written.
    state
        .profile_service
        .resolve(Some(&identity), &school_id)
        .await?;

    let mut name = String::new();
    let mut date_of_birth: Option<NaiveDate> = None;
    let mut age: Option<i32> = None;
    let mut sex = String::new();
    let mut class_level = String::new();
    let mut learner_id = String::new();
    let mut guardian_contact: Option<String> = None;
    let mut photo: Option<Attachment> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let field_name = field.name().unwrap_or("").to_string();

        if field_name == "photo" {
            let file_name = field
                .file_name()
                .map_or_else(|| "photo.bin".to_string(), ToString::to_string);
            let content_type = field
                .content_type()
                .map_or_else(|| "application/octet-stream".to_string(), ToString::to_string);
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?
                .to_vec();
            photo = Some(Attachment::from_upload(file_name, content_type, data)?);
            continue;
        }

        let text = field
            .text()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        match field_name.as_str() {
            "name" => name = text,
            "date_of_birth" => {
                let parsed = NaiveDate::parse_from_str(&text, "%Y-%m-%d").map_err(|_| {
                    AppError::BadRequest(format!("Invalid date of birth: {text}"))
                })?;
                date_of_birth = Some(parsed);
            }
            "age" => {
                let parsed = text
                    .parse::<i32>()
                    .map_err(|_| AppError::BadRequest(format!("Invalid age: {text}")))?;
                age = Some(parsed);
            }
            "sex" => sex = text,
            "class_level" => class_level = text,
            "learner_id" => learner_id = text,
            "guardian_contact" => {
                if !text.trim().is_empty() {
                    guardian_contact = Some(text);
                }
            }
            _ => {}
        }
    }

    let input = RegisterPlayerInput {
        name,
        date_of_birth: date_of_birth
            .ok_or_else(|| AppError::BadRequest("Date of birth is required".to_string()))?,
        age: age.ok_or_else(|| AppError::BadRequest("Age is required".to_string()))?,
        sex,
        class_level,
        learner_id,
        guardian_contact,
        photo,
    };

    let player = state.player_service.register(&school_id, input).await?;

    Ok(ApiResponse::ok(player.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(get_profile))
        .route("/{id}/players", get(list_players).post(register_player))
}
