use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect},
};
use engine::EngineError;

pub use server::{app, run_with_listener};

mod account;
mod pages;
mod profile;
mod server;
pub mod views;

/// Failure of a request handler.
///
/// Both variants carry the engine error whose message is shown to the user;
/// they differ only in how the error page is reached.
#[derive(Debug)]
pub enum ServerError {
    /// Redirect to `/error?message=...`.
    Redirect(EngineError),
    /// Render the error view as the response to the current request.
    Render(EngineError),
}

/// Location of the error page carrying `message`.
pub fn error_location(message: &str) -> String {
    format!("/error?message={}", urlencoding::encode(message))
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (err, redirect) = match self {
            ServerError::Redirect(err) => (err, true),
            ServerError::Render(err) => (err, false),
        };

        if let EngineError::Database(db_err) = &err {
            tracing::error!("database error: {db_err}");
            return (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response();
        }

        let message = err.to_string();
        if redirect {
            Redirect::to(&error_location(&message)).into_response()
        } else {
            views::error(&message).into_response()
        }
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Redirect(value)
    }
}

#[cfg(test)]
mod tests {
    use axum::http::header::LOCATION;
    use engine::error::{EMAIL_IN_USE, MEMBER_NOT_FOUND};

    use super::*;

    #[test]
    fn redirect_points_to_encoded_error_page() {
        let res =
            ServerError::from(EngineError::ExistingKey(EMAIL_IN_USE.to_string())).into_response();
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            res.headers()[LOCATION],
            "/error?message=email%20already%20in%20use"
        );
    }

    #[test]
    fn render_answers_in_place() {
        let res =
            ServerError::Render(EngineError::KeyNotFound(MEMBER_NOT_FOUND.to_string()))
                .into_response();
        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers().get(LOCATION).is_none());
    }

    #[test]
    fn database_errors_map_to_500() {
        let err = EngineError::Database(sea_orm::DbErr::Custom("connection lost".to_string()));
        let res = ServerError::Redirect(err).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
