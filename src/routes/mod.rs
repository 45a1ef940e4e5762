use actix_web::middleware::from_fn;
use actix_web::web;

use crate::auth::{authenticate, require_user};

pub mod book;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(web::scope("/users").service(user::login::login))
            .service(
                web::scope("/books")
                    // last-registered wrap runs first: resolve the token,
                    // then gate on the resolved identity
                    .wrap(from_fn(require_user))
                    .wrap(from_fn(authenticate))
                    .service(book::list::list)
                    .service(book::create::create)
                    .service(book::retrieve::retrieve)
                    .service(book::update::update)
                    .service(book::destroy::destroy),
            ),
    );
}
