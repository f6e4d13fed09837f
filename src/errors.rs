use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::errors::PageError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Fetch(String),
}

impl From<PageError> for AppError {
    fn from(e: PageError) -> Self {
        match e {
            PageError::Config(c) => AppError::Config(c.to_string()),
            fetch @ PageError::Fetch(_) => AppError::Fetch(fetch.to_string()),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        log::error!("{}", self);
        match self {
            AppError::Fetch(_) => HttpResponse::InternalServerError().json(serde_json::json!({
                "error": self.to_string()
            })),
            AppError::Config(_) => HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Internal server error"
            })),
        }
    }
}
