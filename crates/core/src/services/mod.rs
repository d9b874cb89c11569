//! Core services.

pub mod identity;
pub mod player;
pub mod profile;
pub mod roster;
pub mod school;
pub mod storage;

pub use identity::{AccountIdentityProvider, Identity, IdentityProvider, Session};
pub use player::{PlayerService, RegisterPlayerInput, validate_player};
pub use profile::{ProfileService, SchoolProfile};
pub use roster::{AgeBands, Roster, categorize};
pub use school::{NewSchoolRecord, SchoolService, SchoolStore};
pub use storage::{ObjectStore, StorageService, StoredObject};
