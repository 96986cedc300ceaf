//! Single-row store operations on the `members` table.

use sea_orm::{ActiveValue, QueryFilter, prelude::*};

use crate::{
    EngineError, Member, NewMember, ProfileUpdate, ResultEngine,
    error::MEMBER_NOT_FOUND, members,
};

use super::Engine;

impl Engine {
    /// Inserts a member and returns its id.
    ///
    /// Fails with [`EngineError::ExistingKey`] when the username or the email
    /// is already stored.
    pub async fn create_member(&self, member: NewMember) -> ResultEngine<i32> {
        let active = members::ActiveModel {
            id: ActiveValue::NotSet,
            username: ActiveValue::Set(member.username),
            email: ActiveValue::Set(member.email),
            password: ActiveValue::Set(member.password),
            phone: ActiveValue::Set(Some(member.phone)),
            birthdate: ActiveValue::Set(Some(member.birthdate)),
        };

        let res = members::Entity::insert(active)
            .exec(&self.database)
            .await
            .map_err(EngineError::from_unique)?;
        Ok(res.last_insert_id)
    }

    pub async fn member(&self, id: i32) -> ResultEngine<Option<Member>> {
        let model = members::Entity::find_by_id(id).one(&self.database).await?;
        Ok(model.map(Member::from))
    }

    /// Exact, case-sensitive match on both email and password.
    pub async fn member_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> ResultEngine<Option<Member>> {
        let model = members::Entity::find()
            .filter(members::Column::Email.eq(email))
            .filter(members::Column::Password.eq(password))
            .one(&self.database)
            .await?;
        Ok(model.map(Member::from))
    }

    pub async fn username_exists(&self, username: &str) -> ResultEngine<bool> {
        let count = members::Entity::find()
            .filter(members::Column::Username.eq(username))
            .count(&self.database)
            .await?;
        Ok(count > 0)
    }

    /// Returns `true` if `email` belongs to a member other than `excluding_id`.
    pub async fn email_used_by_other(&self, email: &str, excluding_id: i32) -> ResultEngine<bool> {
        let count = members::Entity::find()
            .filter(members::Column::Email.eq(email))
            .filter(members::Column::Id.ne(excluding_id))
            .count(&self.database)
            .await?;
        Ok(count > 0)
    }

    /// Overwrites the editable fields of member `id`.
    pub async fn update_member(&self, id: i32, update: ProfileUpdate) -> ResultEngine<()> {
        let active = members::ActiveModel {
            email: ActiveValue::Set(update.email),
            password: ActiveValue::Set(update.password),
            phone: ActiveValue::Set(Some(update.phone)),
            birthdate: ActiveValue::Set(Some(update.birthdate)),
            ..Default::default()
        };

        let res = members::Entity::update_many()
            .set(active)
            .filter(members::Column::Id.eq(id))
            .exec(&self.database)
            .await
            .map_err(EngineError::from_unique)?;
        if res.rows_affected == 0 {
            return Err(EngineError::KeyNotFound(MEMBER_NOT_FOUND.to_string()));
        }
        Ok(())
    }

    /// Deletes member `id`. Deleting a missing id is not an error.
    pub async fn delete_member(&self, id: i32) -> ResultEngine<()> {
        members::Entity::delete_by_id(id)
            .exec(&self.database)
            .await?;
        Ok(())
    }
}
