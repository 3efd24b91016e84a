//! SeaORM storage implementation
//!
//! A unified database storage layer supporting SQLite, PostgreSQL and MySQL.

mod assignments;
mod course_users;
mod courses;
mod users;

use crate::config::AppConfig;
use crate::errors::{CourseSystemError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM-backed storage
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// Create a storage instance from the application configuration
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::connect(
            &config.database.url,
            config.database.pool_size,
            config.database.timeout,
        )
        .await
    }

    /// Create a storage instance against an explicit URL (tests use an
    /// in-memory SQLite database through this path)
    pub async fn new_with_url(url: &str) -> Result<Self> {
        Self::connect(url, 4, 5).await
    }

    async fn connect(url: &str, pool_size: u32, timeout: u64) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, pool_size, timeout).await?
        } else {
            Self::connect_generic(&db_url, pool_size, timeout).await?
        };

        // Run migrations
        Migrator::up(&db, None)
            .await
            .map_err(|e| CourseSystemError::database_operation(format!("Migration failed: {e}")))?;

        info!("SeaORM storage initialized, database: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite connection (WAL + pragma tuning, foreign keys on)
    async fn connect_sqlite(url: &str, pool_size: u32, timeout: u64) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| {
                CourseSystemError::database_config(format!("Failed to parse SQLite URL: {e}"))
            })?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            // cascade deletes depend on foreign keys being enforced
            .foreign_keys(true)
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        // an in-memory database exists per connection, so the pool must
        // hold exactly one
        let pool_options = if url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
                .max_connections(pool_size)
                .min_connections(1)
                .test_before_acquire(true)
                .acquire_timeout(Duration::from_secs(timeout))
                .idle_timeout(Duration::from_secs(300))
        };

        let pool = pool_options.connect_with(opt).await.map_err(|e| {
            CourseSystemError::database_connection(format!("SQLite connection failed: {e}"))
        })?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// Generic connection (PostgreSQL, MySQL)
    async fn connect_generic(
        url: &str,
        pool_size: u32,
        timeout: u64,
    ) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(timeout))
            .acquire_timeout(Duration::from_secs(timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt).await.map_err(|e| {
            CourseSystemError::database_connection(format!("Failed to connect to database: {e}"))
        })
    }

    /// Infer the database backend from the URL and normalize it
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(CourseSystemError::database_config(format!(
                "Cannot infer database backend from URL: {url}. Supported: sqlite://, postgres://, mysql://, or a .db/.sqlite file path"
            )))
        }
    }
}

// Storage trait implementation
use crate::models::{
    assignments::{requests::CreateAssignmentRequest, responses::AssignmentResponse},
    courses::{
        entities::CourseRole,
        requests::CreateCourseRequest,
        responses::{CourseListResponse, CourseResponse},
    },
    users::{requests::CreateUserRequest, responses::UserResponse},
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // Course module
    async fn create_course(&self, course: CreateCourseRequest) -> Result<CourseResponse> {
        self.create_course_impl(course).await
    }

    async fn list_courses(&self) -> Result<CourseListResponse> {
        self.list_courses_impl().await
    }

    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<CourseResponse>> {
        self.get_course_by_id_impl(course_id).await
    }

    async fn delete_course(&self, course_id: i64) -> Result<bool> {
        self.delete_course_impl(course_id).await
    }

    // User module
    async fn create_user(&self, user: CreateUserRequest) -> Result<UserResponse> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, user_id: i64) -> Result<Option<UserResponse>> {
        self.get_user_by_id_impl(user_id).await
    }

    // Membership module
    async fn add_course_user(&self, course_id: i64, user_id: i64, role: CourseRole) -> Result<()> {
        self.add_course_user_impl(course_id, user_id, role).await
    }

    // Assignment module
    async fn create_assignment(
        &self,
        course_id: i64,
        assignment: CreateAssignmentRequest,
    ) -> Result<AssignmentResponse> {
        self.create_assignment_impl(course_id, assignment).await
    }
}
