use crate::models::{MatchError, PlayerError};
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::html;
use thiserror::Error;

/// Errors surfaced by request handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Unauthorized. Please log in as admin.")]
    Unauthorized,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error(transparent)]
    InvalidMatch(#[from] MatchError),

    #[error(transparent)]
    InvalidPlayer(#[from] PlayerError),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            // htmx only swaps 2xx responses by default; validation notices go inline
            AppError::InvalidMatch(_) | AppError::InvalidPlayer(_) => StatusCode::OK,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                "Something went wrong talking to the database. Please try again.".to_string()
            }
            other => other.to_string(),
        };

        (
            self.status(),
            Html(html! { p class="error" { (message) } }.into_string()),
        )
            .into_response()
    }
}
