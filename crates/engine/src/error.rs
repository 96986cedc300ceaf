//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`Validation`] thrown when a required field is missing.
//! - [`ExistingKey`] thrown when a unique column (username, email) collides.
//! - [`KeyNotFound`] thrown when a member or a credential pair is not found.
//!
//! The message carried by the first three variants is shown to the user as is.
//!
//!  [`Validation`]: EngineError::Validation
//!  [`ExistingKey`]: EngineError::ExistingKey
//!  [`KeyNotFound`]: EngineError::KeyNotFound
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

pub const MISSING_REGISTRATION_FIELDS: &str = "enter username, email, and password";
pub const MISSING_CREDENTIALS: &str = "enter email and password";
pub const USERNAME_TAKEN: &str = "username already exists";
pub const EMAIL_IN_USE: &str = "email already in use";
pub const WRONG_CREDENTIALS: &str = "incorrect email or password";
pub const MEMBER_NOT_FOUND: &str = "user does not exist";

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    ExistingKey(String),
    #[error("{0}")]
    KeyNotFound(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl EngineError {
    /// Maps a unique-constraint violation on `members` to [`EngineError::ExistingKey`].
    ///
    /// SQLite reports the offending column as `members.<column>`; anything
    /// that is not the username index is treated as an email collision.
    pub(crate) fn from_unique(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                if detail.contains("username") {
                    Self::ExistingKey(USERNAME_TAKEN.to_string())
                } else {
                    Self::ExistingKey(EMAIL_IN_USE.to_string())
                }
            }
            _ => Self::Database(err),
        }
    }
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Validation(a), Self::Validation(b)) => a == b,
            (Self::ExistingKey(a), Self::ExistingKey(b)) => a == b,
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_constraint_errors_stay_database_errors() {
        let err = EngineError::from_unique(DbErr::Custom("boom".to_string()));
        assert!(matches!(err, EngineError::Database(_)));
    }

    #[test]
    fn display_is_the_user_message() {
        let err = EngineError::ExistingKey(EMAIL_IN_USE.to_string());
        assert_eq!(err.to_string(), "email already in use");
    }
}
