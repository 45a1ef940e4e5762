use actix_web::{put, web, Either};
use entity::book::Model as BookModel;
use std::sync::Arc;

use crate::auth::AuthedUser;
use crate::db::service::DbService;
use crate::types::book::BookPayload;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::validation::validate_book;

#[put("/{id}/update/")]
async fn update(
    _user: AuthedUser,
    db: web::Data<Arc<DbService>>,
    path: web::Path<i32>,
    body: Either<web::Json<BookPayload>, web::Form<BookPayload>>,
) -> ApiResult<BookModel> {
    let new_book = validate_book(&body.into_inner())?;
    Ok(ApiResponse::Ok(
        db.update_book(path.into_inner(), new_book).await?,
    ))
}
