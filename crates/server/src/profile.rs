//! Pages addressed by member id: welcome, profile editing and deletion.
//!
//! The id travels in the URL. Nothing checks that the caller owns it.

use api_types::member::ProfileForm;
use axum::{
    Form,
    extract::{Path, State},
    response::{Html, Redirect},
};
use engine::ProfileUpdate;

use crate::{ServerError, server::ServerState, views};

pub async fn welcome(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Html<String>, ServerError> {
    let member = state
        .engine
        .require_member(id)
        .await
        .map_err(ServerError::Render)?;

    Ok(views::welcome(&member))
}

pub async fn edit_profile_form(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Html<String>, ServerError> {
    let member = state
        .engine
        .require_member(id)
        .await
        .map_err(ServerError::Render)?;

    Ok(views::edit_profile(&member))
}

pub async fn edit_profile(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Form(form): Form<ProfileForm>,
) -> Result<Redirect, ServerError> {
    state
        .engine
        .update_profile(
            id,
            ProfileUpdate {
                email: form.email,
                password: form.password,
                phone: form.phone,
                birthdate: form.birthdate,
            },
        )
        .await
        .inspect_err(|err| tracing::debug!("profile update of member {id} rejected: {err}"))
        .map_err(ServerError::Render)?;

    tracing::info!("updated profile of member {id}");
    Ok(Redirect::to(&format!("/welcome/{id}")))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Redirect, ServerError> {
    state.engine.delete_member(id).await?;

    tracing::info!("deleted member {id}");
    Ok(Redirect::to("/"))
}
