//! Registration and login.

use api_types::member::{LoginForm, RegisterForm};
use axum::{
    Form,
    extract::State,
    response::{Html, Redirect},
};
use engine::NewMember;

use crate::{
    ServerError,
    server::ServerState,
    views::{self, View},
};

pub async fn register_form() -> Html<String> {
    View::Register.render(&[])
}

pub async fn register(
    State(state): State<ServerState>,
    Form(form): Form<RegisterForm>,
) -> Result<Redirect, ServerError> {
    let id = state
        .engine
        .register(NewMember {
            username: form.username,
            email: form.email,
            password: form.password,
            phone: form.phone,
            birthdate: form.birthdate,
        })
        .await
        .inspect_err(|err| tracing::debug!("registration rejected: {err}"))?;

    tracing::info!("registered member {id}");
    Ok(Redirect::to("/login"))
}

pub async fn login_form() -> Html<String> {
    View::Login.render(&[])
}

/// On success the welcome view is the response itself; there is no session.
pub async fn login(
    State(state): State<ServerState>,
    Form(form): Form<LoginForm>,
) -> Result<Html<String>, ServerError> {
    let member = state
        .engine
        .login(&form.email, &form.password)
        .await
        .inspect_err(|err| tracing::debug!("login rejected: {err}"))?;

    Ok(views::welcome(&member))
}
