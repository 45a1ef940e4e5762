use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Shared handle around the ORM connection pool. Postgres in production;
/// the test suite points it at SQLite in-memory.
#[derive(Clone)]
pub struct DbService {
    pub(crate) db: DatabaseConnection,
}

impl DbService {
    pub async fn new(uri: &str) -> Result<Self, DbErr> {
        Self::connect_with(ConnectOptions::new(uri)).await
    }

    /// Connect with caller-supplied pool options and bring the schema up to
    /// date. SQLite in-memory needs a single-connection pool, so tests go
    /// through here.
    pub async fn connect_with(options: ConnectOptions) -> Result<Self, DbErr> {
        log::info!("connecting to database...");
        let db = Database::connect(options).await?;
        log::info!("running migrations...");
        Migrator::up(&db, None).await?;
        log::info!("database ready");
        Ok(Self { db })
    }
}
