use book_api::db::service::DbService;
use sea_orm::ConnectOptions;
use std::sync::Arc;

pub mod client;

pub struct TestContext {
    pub db: Arc<DbService>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        // SQLite in-memory lives and dies with its connection, so the pool
        // is pinned to a single one.
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).min_connections(1);

        let db = Arc::new(
            DbService::connect_with(options)
                .await
                .expect("Failed to initialize test database"),
        );

        TestContext { db }
    }
}

// Test data helpers
pub mod test_data {
    use book_api::types::user::NewUser;
    use serde_json::{json, Value};

    #[allow(dead_code)]
    pub fn sample_user() -> NewUser {
        NewUser {
            username: "tester".to_string(),
            password: "testpass".to_string(),
        }
    }

    #[allow(dead_code)]
    pub fn sample_book() -> Value {
        book_json("T", "A", "2024-01-01")
    }

    #[allow(dead_code)]
    pub fn book_json(title: &str, author: &str, published_date: &str) -> Value {
        json!({
            "title": title,
            "author": author,
            "published_date": published_date,
        })
    }
}
