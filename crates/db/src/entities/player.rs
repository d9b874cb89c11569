//! Player entity (a registered student athlete).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Owning school ID
    pub school_id: String,

    /// Player full name
    pub name: String,

    /// Date of birth
    pub date_of_birth: Date,

    /// Age as entered at registration
    pub age: i32,

    /// Sex as entered ("Male"/"Female")
    pub sex: String,

    /// Class level (S1-S6)
    pub class_level: String,

    /// Learner ID number (LIN)
    pub learner_id: String,

    /// Next-of-kin contact
    #[sea_orm(nullable)]
    pub guardian_contact: Option<String>,

    /// Storage key of the player photo
    #[sea_orm(nullable)]
    pub photo_key: Option<String>,

    /// Public URL of the player photo
    #[sea_orm(nullable)]
    pub photo_url: Option<String>,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::school::Entity",
        from = "Column::SchoolId",
        to = "super::school::Column::Id",
        on_delete = "Cascade"
    )]
    School,
}

impl Related<super::school::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::School.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
