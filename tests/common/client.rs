use actix_web::{web, App};
use book_api::db::service::DbService;
use std::sync::Arc;
use uuid::Uuid;

use super::test_data;

pub struct TestClient {
    pub db: Arc<DbService>,
}

impl TestClient {
    pub fn new(db: Arc<DbService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(book_api::routes::configure_routes)
    }

    /// Provision `tester`/`testpass` and hand back its id and token key.
    #[allow(dead_code)]
    pub async fn create_test_user(&self) -> (Uuid, String) {
        self.db
            .create_user(test_data::sample_user())
            .await
            .expect("Failed to create test user")
    }
}
