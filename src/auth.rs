use crate::error::AppError;
use crate::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
    Form,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use std::sync::Arc;

const AUTH_COOKIE_NAME: &str = "babyfoot_admin";

/// What the current visitor may do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Viewer,
}

impl Role {
    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }

    /// Fail with `Unauthorized` unless admin
    pub fn require_admin(self) -> Result<(), AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::Unauthorized)
        }
    }
}

/// Resolve the visitor's role from the session cookie
pub fn role(jar: &CookieJar, state: &AppState) -> Role {
    role_for(jar, state.config.admin_password.as_deref())
}

fn role_for(jar: &CookieJar, admin_password: Option<&str>) -> Role {
    // No password configured: local setup, everyone administers
    let Some(password) = admin_password else {
        return Role::Admin;
    };

    let valid = jar
        .get(AUTH_COOKIE_NAME)
        .map(|cookie| cookie.value() == password)
        .unwrap_or(false);

    if valid {
        Role::Admin
    } else {
        Role::Viewer
    }
}

/// Login form data
#[derive(serde::Deserialize)]
pub struct LoginForm {
    password: String,
}

/// Handle login POST
pub async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> impl IntoResponse {
    let Some(ref password) = state.config.admin_password else {
        return (jar, Redirect::to("/")).into_response();
    };

    if form.password == *password {
        tracing::info!("Admin logged in");
        let cookie = Cookie::build((AUTH_COOKIE_NAME, password.clone()))
            .path("/")
            .http_only(true)
            .secure(state.config.secure_cookies)
            .build();
        (jar.add(cookie), Redirect::to("/")).into_response()
    } else {
        tracing::warn!("Rejected admin login attempt");
        (jar, Redirect::to("/?auth_error=1")).into_response()
    }
}

/// Handle logout POST
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    let cookie = Cookie::build(AUTH_COOKIE_NAME).path("/").build();
    (jar.remove(cookie), Redirect::to("/"))
}
