use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

/// Error type shared by every operation of the dashboard service. The HTTP
/// layer renders it as `{"message": ..., "error": ...}` with a status code
/// derived from the variant.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Seed fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Error fetching combined data: {0}")]
    Combined(String),

    #[error("Error initializing database: {0}")]
    Initialize(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn context(&self) -> &'static str {
        match self {
            Error::InvalidInput(_) => "Invalid request parameters",
            Error::Database(_) => "Error querying transactions",
            Error::Fetch(_) => "Error initializing database",
            Error::Config(_) => "Invalid configuration",
            Error::Combined(_) => "Error fetching combined data",
            Error::Initialize(_) => "Error initializing database",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Error::InvalidInput(msg) => json!({ "message": msg }),
            Error::Combined(msg) | Error::Initialize(msg) => {
                json!({ "message": self.context(), "error": msg })
            }
            _ => json!({ "message": self.context(), "error": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}
