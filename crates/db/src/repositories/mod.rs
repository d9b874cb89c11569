//! Database repositories.

mod account;
mod player;
mod school;

pub use account::AccountRepository;
pub use player::PlayerRepository;
pub use school::SchoolRepository;
