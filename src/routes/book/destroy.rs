use actix_web::{delete, web};
use std::sync::Arc;

use crate::auth::AuthedUser;
use crate::db::service::DbService;
use crate::types::response::{ApiResponse, ApiResult};

#[delete("/{id}/delete/")]
async fn destroy(
    _user: AuthedUser,
    db: web::Data<Arc<DbService>>,
    path: web::Path<i32>,
) -> ApiResult<()> {
    db.delete_book(path.into_inner()).await?;
    Ok(ApiResponse::NoContent)
}
