//! Admin tooling: create a user (and its token) from the command line.
//!
//! Usage: create-user <username> <password>

use book_api::config::EnvConfig;
use book_api::db::service::DbService;
use book_api::types::user::NewUser;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let mut args = std::env::args().skip(1);
    let (Some(username), Some(password)) = (args.next(), args.next()) else {
        eprintln!("usage: create-user <username> <password>");
        std::process::exit(2);
    };

    let config = EnvConfig::from_env();
    let db = Arc::new(
        DbService::new(&config.db_url)
            .await
            .expect("Failed to initialize database service"),
    );

    match db.create_user(NewUser { username, password }).await {
        Ok((user_id, token)) => {
            println!("created user {user_id}");
            println!("token: {token}");
            Ok(())
        }
        Err(e) => {
            eprintln!("could not create user: {e}");
            std::process::exit(1);
        }
    }
}
