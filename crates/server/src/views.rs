//! HTML views.
//!
//! A view is a template identified by name plus a set of named values. Values
//! are substituted into `{{ name }}` placeholders and are always HTML-escaped.

use axum::response::Html;
use engine::Member;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Home,
    Register,
    Login,
    Welcome,
    EditProfile,
    Error,
}

impl View {
    pub fn name(self) -> &'static str {
        match self {
            Self::Home => "index",
            Self::Register => "register",
            Self::Login => "login",
            Self::Welcome => "welcome",
            Self::EditProfile => "edit_profile",
            Self::Error => "error",
        }
    }

    fn template(self) -> &'static str {
        match self {
            Self::Home => include_str!("../templates/index.html"),
            Self::Register => include_str!("../templates/register.html"),
            Self::Login => include_str!("../templates/login.html"),
            Self::Welcome => include_str!("../templates/welcome.html"),
            Self::EditProfile => include_str!("../templates/edit_profile.html"),
            Self::Error => include_str!("../templates/error.html"),
        }
    }

    /// Fills every `{{ key }}` placeholder in one pass over the template.
    ///
    /// Substituted values are never scanned again, so a value containing
    /// placeholder syntax is shown literally. Unknown keys are left as is.
    pub fn render(self, context: &[(&str, &str)]) -> Html<String> {
        tracing::trace!("rendering view {}", self.name());
        let template = self.template();
        let mut page = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            page.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                page.push_str(&rest[start..]);
                rest = "";
                break;
            };

            let key = after[..end].trim();
            match context.iter().find(|(name, _)| *name == key) {
                Some((_, value)) => page.push_str(&escape(value)),
                None => {
                    tracing::trace!("view {} has no value for {key}", self.name());
                    page.push_str(&rest[start..start + 2 + end + 2]);
                }
            }
            rest = &after[end + 2..];
        }
        page.push_str(rest);

        Html(page)
    }
}

/// Decorates a username for display: `admin` becomes `★admin★`.
pub fn stars(username: &str) -> String {
    format!("★{username}★")
}

pub fn welcome(member: &Member) -> Html<String> {
    let username = stars(&member.username);
    let iid = member.id.to_string();
    View::Welcome.render(&[("username", username.as_str()), ("iid", iid.as_str())])
}

pub fn edit_profile(member: &Member) -> Html<String> {
    let iid = member.id.to_string();
    View::EditProfile.render(&[
        ("username", member.username.as_str()),
        ("iid", iid.as_str()),
        ("email", member.email.as_str()),
        ("password", member.password.as_str()),
        ("phone", member.phone.as_str()),
        ("birthdate", member.birthdate.as_str()),
    ])
}

pub fn error(message: &str) -> Html<String> {
    View::Error.render(&[("error_message", message)])
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}
