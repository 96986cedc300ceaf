//! Membership storage and account rules.
//!
//! [`Engine`] owns the database handle and exposes two layers:
//!
//! - store operations keyed by id, username or email (`create_member`,
//!   `member`, `update_member`, ...);
//! - account workflows (`register`, `login`, `update_profile`) that trim and
//!   validate form input before touching the store.
//!
//! Pre-checks such as [`Engine::username_exists`] only improve the error
//! message. The unique indexes on `members` remain the authoritative guard.

pub use error::EngineError;
pub use ops::{Engine, EngineBuilder};

pub mod error;
mod members;
mod ops;

type ResultEngine<T> = Result<T, EngineError>;

/// A registered member.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    pub id: i32,
    pub username: String,
    pub email: String,
    /// Stored and compared as plain text.
    pub password: String,
    pub phone: String,
    pub birthdate: String,
}

/// Input for [`Engine::register`] and [`Engine::create_member`].
#[derive(Clone, Debug, Default)]
pub struct NewMember {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub birthdate: String,
}

/// Editable profile fields. The username cannot be changed after registration.
#[derive(Clone, Debug, Default)]
pub struct ProfileUpdate {
    pub email: String,
    pub password: String,
    pub phone: String,
    pub birthdate: String,
}
