//! Static pages and the error sink every other handler reports to.

use api_types::error::ErrorQuery;
use axum::{extract::RawQuery, response::Html};

use crate::views::{self, View};

pub async fn home() -> Html<String> {
    View::Home.render(&[])
}

/// Reads the raw query so a malformed `message` still reaches the error view.
pub async fn error(RawQuery(query): RawQuery) -> Html<String> {
    let query = ErrorQuery {
        message: query.as_deref().and_then(message_param),
    };
    views::error(query.message())
}

/// First `message` parameter, percent-decoded with invalid UTF-8 replaced.
fn message_param(query: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        (key == "message").then(|| decode_lossy(value))
    })
}

fn decode_lossy(value: &str) -> String {
    let value = value.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(value.as_bytes())).into_owned()
}
