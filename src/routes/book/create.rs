use actix_web::{post, web, Either};
use entity::book::Model as BookModel;
use std::sync::Arc;

use crate::auth::AuthedUser;
use crate::db::service::DbService;
use crate::types::book::BookPayload;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::validation::validate_book;

#[post("/")]
async fn create(
    _user: AuthedUser,
    db: web::Data<Arc<DbService>>,
    body: Either<web::Json<BookPayload>, web::Form<BookPayload>>,
) -> ApiResult<BookModel> {
    let new_book = validate_book(&body.into_inner())?;
    Ok(ApiResponse::Created(db.insert_book(new_book).await?))
}
