use actix_web::{get, web};
use entity::book::Model as BookModel;
use std::sync::Arc;

use crate::auth::AuthedUser;
use crate::db::service::DbService;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/{id}/")]
async fn retrieve(
    _user: AuthedUser,
    db: web::Data<Arc<DbService>>,
    path: web::Path<i32>,
) -> ApiResult<BookModel> {
    Ok(ApiResponse::Ok(db.find_book_by_id(path.into_inner()).await?))
}
