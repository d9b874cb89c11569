//! School entity (one registered school per record).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Review status of a school registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[derive(Default)]
pub enum ReviewStatus {
    #[sea_orm(string_value = "pending")]
    #[default]
    Pending,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "school")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Owner account ID.
    ///
    /// Not declared unique: one-school-per-owner is enforced by
    /// lookup-by-owner, not by a database constraint.
    pub account_id: String,

    /// School name
    pub name: String,

    /// UNEB centre number
    #[sea_orm(nullable)]
    pub centre_number: Option<String>,

    /// School email
    #[sea_orm(nullable)]
    pub email: Option<String>,

    /// Office/school contact number
    pub office_contact: String,

    /// Region (one of the fixed region set)
    pub region: String,

    /// District
    pub district: String,

    /// Storage key of the uploaded badge
    #[sea_orm(nullable)]
    pub badge_key: Option<String>,

    /// Public URL of the uploaded badge
    #[sea_orm(nullable)]
    pub badge_url: Option<String>,

    /// Administrator full name
    pub admin_name: String,

    /// Administrator national ID (NIN)
    #[sea_orm(nullable)]
    pub admin_nin: Option<String>,

    /// Administrator contact number
    pub admin_contact: String,

    /// Administrator email
    pub admin_email: String,

    /// Administrator role (one of the fixed role set)
    pub admin_role: String,

    /// Administrator education level
    pub admin_education: String,

    /// Storage key of the administrator photo
    #[sea_orm(nullable)]
    pub admin_photo_key: Option<String>,

    /// Public URL of the administrator photo
    #[sea_orm(nullable)]
    pub admin_photo_url: Option<String>,

    /// Registration review status
    pub status: ReviewStatus,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::AccountId",
        to = "super::account::Column::Id"
    )]
    Account,

    #[sea_orm(has_many = "super::player::Entity")]
    Players,
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Players.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
