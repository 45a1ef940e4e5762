use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Field name -> list of messages, serialized as the 400 response body.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug, Error)]
pub enum AppError {
    // request-shaped failures
    #[error("validation failed")]
    Validation(FieldErrors),
    #[error("authentication credentials were not provided")]
    AuthenticationMissing,
    #[error("invalid token")]
    AuthenticationInvalid,
    #[error("not found")]
    NotFound,
    #[error("already exists")]
    AlreadyExists,

    // infra things
    #[error(transparent)]
    Db(DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        match &e {
            DbErr::RecordNotFound(_) => AppError::NotFound,
            _ => AppError::Db(e),
        }
    }
}

#[derive(Serialize)]
struct Detail<'a> {
    detail: &'a str,
}

impl AppError {
    fn detail(&self) -> &'static str {
        match self {
            Self::Validation(_) => "Invalid input.",
            Self::AuthenticationMissing => "Authentication credentials were not provided.",
            Self::AuthenticationInvalid => "Invalid token.",
            Self::NotFound => "Not found.",
            Self::AlreadyExists => "A record with this identity already exists.",
            Self::Db(_) | Self::Internal(_) => "Internal server error.",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::AuthenticationMissing | Self::AuthenticationInvalid => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::AlreadyExists => StatusCode::CONFLICT,
            Self::Db(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let Self::Db(e) = self {
            log::error!("database error: {e}");
        }
        match self {
            Self::Validation(fields) => HttpResponse::build(self.status_code()).json(fields),
            _ => HttpResponse::build(self.status_code()).json(Detail {
                detail: self.detail(),
            }),
        }
    }
}
