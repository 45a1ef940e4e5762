//! Bearer-token authentication for the books surface.
//!
//! Two middlewares run in order on protected scopes: `authenticate` resolves
//! an `Authorization: Token <key>` header to a user and stashes it in the
//! request extensions; `require_user` rejects anything still anonymous.
//! A missing header is not an error at the authenticate stage — the 401 for
//! that case belongs to the gate, with a different detail message.

use std::future::{ready, Ready};
use std::sync::Arc;

use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{Payload, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::middleware::Next;
use actix_web::{web, FromRequest, HttpMessage, HttpRequest, ResponseError};
use entity::user::Model as UserModel;

use crate::db::service::DbService;
use crate::types::error::AppError;

/// Parse an `Authorization` header value of the exact shape `Token <key>`.
/// Scheme keyword is case-sensitive; exactly one space; non-empty key.
fn parse_token_header(value: &str) -> Option<&str> {
    let mut parts = value.split(' ');
    let scheme = parts.next()?;
    let key = parts.next()?;
    if scheme != "Token" || key.is_empty() || parts.next().is_some() {
        return None;
    }
    Some(key)
}

/// Short-circuit the pipeline with the error's own JSON response. Rejections
/// are complete responses, not service errors, so they reach the client (and
/// the test harness) as plain 401s.
fn reject(req: ServiceRequest, err: AppError) -> ServiceResponse<BoxBody> {
    req.into_response(err.error_response())
}

/// Resolve the presented token, if any. Malformed or unknown tokens fail
/// here; absent credentials pass through as anonymous.
pub async fn authenticate(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<BoxBody>, actix_web::Error> {
    let Some(raw) = req.headers().get(header::AUTHORIZATION) else {
        return next
            .call(req)
            .await
            .map(ServiceResponse::map_into_boxed_body);
    };
    let key = match raw.to_str().ok().and_then(parse_token_header) {
        Some(key) => key.to_owned(),
        None => return Ok(reject(req, AppError::AuthenticationInvalid)),
    };

    let Some(db) = req.app_data::<web::Data<Arc<DbService>>>().cloned() else {
        return Ok(reject(
            req,
            AppError::Internal("database handle missing from app data".into()),
        ));
    };
    let user = match db.find_user_by_token(&key).await {
        Ok(Some(user)) => user,
        Ok(None) => return Ok(reject(req, AppError::AuthenticationInvalid)),
        Err(e) => return Ok(reject(req, e)),
    };

    req.extensions_mut().insert(user);
    next.call(req)
        .await
        .map(ServiceResponse::map_into_boxed_body)
}

/// The authorization gate: anonymous requests stop here.
pub async fn require_user(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<BoxBody>, actix_web::Error> {
    if req.extensions().get::<UserModel>().is_none() {
        return Ok(reject(req, AppError::AuthenticationMissing));
    }
    next.call(req)
        .await
        .map(ServiceResponse::map_into_boxed_body)
}

/// The user resolved by `authenticate`, for handlers that want the identity.
pub struct AuthedUser(pub UserModel);

impl FromRequest for AuthedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<UserModel>()
                .cloned()
                .map(AuthedUser)
                .ok_or_else(|| AppError::AuthenticationMissing.into()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::parse_token_header;

    #[test]
    fn well_formed_header_yields_key() {
        assert_eq!(parse_token_header("Token abc123"), Some("abc123"));
    }

    #[test]
    fn scheme_keyword_is_case_sensitive() {
        assert_eq!(parse_token_header("token abc123"), None);
        assert_eq!(parse_token_header("TOKEN abc123"), None);
        assert_eq!(parse_token_header("Bearer abc123"), None);
    }

    #[test]
    fn missing_or_extra_parts_rejected() {
        assert_eq!(parse_token_header("Token"), None);
        assert_eq!(parse_token_header("Token "), None);
        assert_eq!(parse_token_header("Token abc 123"), None);
        assert_eq!(parse_token_header(""), None);
    }
}
