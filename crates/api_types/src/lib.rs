//! Form and query payloads accepted by the web surface.
//!
//! Every field defaults to an empty string, so a missing input behaves like a
//! blank one and is rejected by validation rather than by deserialization.

use serde::{Deserialize, Serialize};

pub mod member {
    use super::*;

    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct RegisterForm {
        pub username: String,
        pub email: String,
        pub password: String,
        pub phone: String,
        pub birthdate: String,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct LoginForm {
        pub email: String,
        pub password: String,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct ProfileForm {
        pub email: String,
        pub password: String,
        pub phone: String,
        pub birthdate: String,
    }
}

pub mod error {
    use super::*;

    pub const DEFAULT_MESSAGE: &str = "unknown error occurred";

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct ErrorQuery {
        pub message: Option<String>,
    }

    impl ErrorQuery {
        /// The message to display, falling back to [`DEFAULT_MESSAGE`].
        pub fn message(&self) -> &str {
            self.message.as_deref().unwrap_or(DEFAULT_MESSAGE)
        }
    }
}
