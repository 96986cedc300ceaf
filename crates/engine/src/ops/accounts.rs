//! Account workflows: form-level validation in front of the store.

use crate::{
    EngineError, Member, NewMember, ProfileUpdate, ResultEngine,
    error::{
        EMAIL_IN_USE, MEMBER_NOT_FOUND, MISSING_CREDENTIALS, MISSING_REGISTRATION_FIELDS,
        USERNAME_TAKEN, WRONG_CREDENTIALS,
    },
};

use super::{Engine, require_fields};

impl Engine {
    /// Registers a new member and returns its id.
    ///
    /// Checks run in order: required fields, username taken, then the insert
    /// itself, whose unique index reports a taken email.
    pub async fn register(&self, input: NewMember) -> ResultEngine<i32> {
        let [username, email, password] = require_fields(
            [
                input.username.as_str(),
                input.email.as_str(),
                input.password.as_str(),
            ],
            MISSING_REGISTRATION_FIELDS,
        )?;

        if self.username_exists(&username).await? {
            return Err(EngineError::ExistingKey(USERNAME_TAKEN.to_string()));
        }

        self.create_member(NewMember {
            username,
            email,
            password,
            phone: input.phone.trim().to_string(),
            birthdate: input.birthdate.trim().to_string(),
        })
        .await
    }

    /// Looks a member up by email and password.
    pub async fn login(&self, email: &str, password: &str) -> ResultEngine<Member> {
        let [email, password] = require_fields([email, password], MISSING_CREDENTIALS)?;

        self.member_by_credentials(&email, &password)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound(WRONG_CREDENTIALS.to_string()))
    }

    /// Like [`Engine::member`], but a missing member is an error.
    pub async fn require_member(&self, id: i32) -> ResultEngine<Member> {
        self.member(id)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound(MEMBER_NOT_FOUND.to_string()))
    }

    /// Updates email, password, phone and birthdate of member `id`.
    pub async fn update_profile(&self, id: i32, input: ProfileUpdate) -> ResultEngine<()> {
        self.require_member(id).await?;

        let [email, password] = require_fields(
            [input.email.as_str(), input.password.as_str()],
            MISSING_CREDENTIALS,
        )?;

        if self.email_used_by_other(&email, id).await? {
            return Err(EngineError::ExistingKey(EMAIL_IN_USE.to_string()));
        }

        self.update_member(
            id,
            ProfileUpdate {
                email,
                password,
                phone: input.phone.trim().to_string(),
                birthdate: input.birthdate.trim().to_string(),
            },
        )
        .await
    }
}
