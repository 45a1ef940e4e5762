use actix_web::{post, web, Either};
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::error::{AppError, FieldErrors};
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{LoginPayload, LoginResponse};
use crate::utils::token::verify_password;
use crate::utils::validation::validate_login;

/// Same response for unknown username and wrong password.
fn rejected() -> AppError {
    let mut errors = FieldErrors::new();
    errors.insert(
        "non_field_errors".to_string(),
        vec!["Unable to log in with provided credentials.".to_string()],
    );
    AppError::Validation(errors)
}

#[post("/login/")]
async fn login(
    db: web::Data<Arc<DbService>>,
    body: Either<web::Json<LoginPayload>, web::Form<LoginPayload>>,
) -> ApiResult<LoginResponse> {
    let creds = validate_login(&body.into_inner())?;

    let Some(user) = db.find_user_by_username(&creds.username).await? else {
        return Err(rejected());
    };
    let verified = verify_password(&creds.password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("stored password hash unreadable: {e}")))?;
    if !verified {
        return Err(rejected());
    }

    // Normally created with the user; the lazy arm covers rows that predate
    // that rule.
    let token = db.get_or_create_token(user.id).await?;

    Ok(ApiResponse::Ok(LoginResponse {
        token,
        user_id: user.id,
        username: user.username,
    }))
}
