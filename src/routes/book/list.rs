use actix_web::{get, web};
use entity::book::Model as BookModel;
use std::sync::Arc;

use crate::auth::AuthedUser;
use crate::db::service::DbService;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/")]
async fn list(_user: AuthedUser, db: web::Data<Arc<DbService>>) -> ApiResult<Vec<BookModel>> {
    Ok(ApiResponse::Ok(db.list_books().await?))
}
