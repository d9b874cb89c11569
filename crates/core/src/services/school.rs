//! School record persistence.

use chrono::Utc;
use sea_orm::Set;
use usra_common::{AppError, AppResult, IdGenerator};
use usra_db::{
    entities::school::{self, ReviewStatus},
    repositories::SchoolRepository,
};

/// Everything needed to create a school record at the end of a
/// successful registration.
#[derive(Debug, Clone)]
pub struct NewSchoolRecord {
    /// Owner account ID.
    pub account_id: String,
    /// School name.
    pub name: String,
    /// UNEB centre number.
    pub centre_number: Option<String>,
    /// School email.
    pub email: Option<String>,
    /// Office/school contact.
    pub office_contact: String,
    /// Region.
    pub region: String,
    /// District.
    pub district: String,
    /// Uploaded badge `(key, url)`, if a badge was attached.
    pub badge: Option<(String, String)>,
    /// Administrator full name.
    pub admin_name: String,
    /// Administrator NIN.
    pub admin_nin: Option<String>,
    /// Administrator contact.
    pub admin_contact: String,
    /// Administrator email.
    pub admin_email: String,
    /// Administrator role.
    pub admin_role: String,
    /// Administrator education level.
    pub admin_education: String,
    /// Uploaded admin photo `(key, url)`, if attached.
    pub admin_photo: Option<(String, String)>,
}

/// Record-store collaborator for the registration wizard.
///
/// Failures surface as [`AppError::Persist`].
#[async_trait::async_trait]
pub trait SchoolStore: Send + Sync {
    /// Insert a school record, returning its ID.
    async fn insert_school(&self, record: NewSchoolRecord) -> AppResult<String>;
}

/// School service over the school repository.
#[derive(Clone)]
pub struct SchoolService {
    school_repo: SchoolRepository,
    id_gen: IdGenerator,
}

impl SchoolService {
    /// Create a new school service.
    #[must_use]
    pub const fn new(school_repo: SchoolRepository) -> Self {
        Self {
            school_repo,
            id_gen: IdGenerator::new(),
        }
    }

    /// Get a school by ID.
    pub async fn get(&self, id: &str) -> AppResult<Option<school::Model>> {
        self.school_repo.find_by_id(id).await
    }
}

#[async_trait::async_trait]
impl SchoolStore for SchoolService {
    async fn insert_school(&self, record: NewSchoolRecord) -> AppResult<String> {
        let school_id = self.id_gen.generate();
        let (badge_key, badge_url) = split(record.badge);
        let (admin_photo_key, admin_photo_url) = split(record.admin_photo);

        let model = school::ActiveModel {
            id: Set(school_id.clone()),
            account_id: Set(record.account_id.clone()),
            name: Set(record.name),
            centre_number: Set(record.centre_number),
            email: Set(record.email),
            office_contact: Set(record.office_contact),
            region: Set(record.region),
            district: Set(record.district),
            badge_key: Set(badge_key),
            badge_url: Set(badge_url),
            admin_name: Set(record.admin_name),
            admin_nin: Set(record.admin_nin),
            admin_contact: Set(record.admin_contact),
            admin_email: Set(record.admin_email),
            admin_role: Set(record.admin_role),
            admin_education: Set(record.admin_education),
            admin_photo_key: Set(admin_photo_key),
            admin_photo_url: Set(admin_photo_url),
            status: Set(ReviewStatus::Pending),
            created_at: Set(Utc::now().into()),
        };

        let created = match self.school_repo.create(model).await {
            Ok(created) => created,
            Err(AppError::Database(msg)) => return Err(AppError::Persist(msg)),
            Err(e) => return Err(e),
        };

        tracing::info!(
            school_id = %created.id,
            account_id = %record.account_id,
            "School registration recorded"
        );

        Ok(created.id)
    }
}

fn split(pair: Option<(String, String)>) -> (Option<String>, Option<String>) {
    match pair {
        Some((key, url)) => (Some(key), Some(url)),
        None => (None, None),
    }
}
