//! Static association content.
//!
//! The promotional pages (events calendar, leadership roster, annual
//! workplan, medical fund, photo collections) are curated content, not
//! behavior; the datasets live here as plain constants and are served
//! as typed JSON.

pub mod events;
pub mod leadership;
pub mod medical_fund;
pub mod photos;
pub mod workplan;
