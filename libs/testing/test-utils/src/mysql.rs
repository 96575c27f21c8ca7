//! MySQL test infrastructure
//!
//! Provides a `TestDatabase` helper that starts a MySQL container, applies
//! the embedded migrations, and exposes both the raw pool and a SeaORM
//! connection. The container is stopped when the struct is dropped.

use sea_orm::{DatabaseConnection, SqlxMySqlConnector};
use sqlx::mysql::MySqlPool;
use testcontainers::runners::AsyncRunner;
use testcontainers::ContainerAsync;
use testcontainers_modules::mysql::Mysql;

pub struct TestDatabase {
    #[allow(dead_code)]
    container: ContainerAsync<Mysql>,
    pub pool: MySqlPool,
    pub connection: DatabaseConnection,
    pub connection_string: String,
}

impl TestDatabase {
    /// Start a MySQL container and apply the embedded migrations.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// // Use db.connection to create your repository
    /// # }
    /// ```
    pub async fn new() -> Self {
        let container = Mysql::default()
            .start()
            .await
            .expect("Failed to start MySQL container");

        let host_port = container
            .get_host_port_ipv4(3306)
            .await
            .expect("Failed to get host port");

        // The image runs with a passwordless root user and a "test" database
        let connection_string = format!("mysql://root@127.0.0.1:{host_port}/test");

        let pool = MySqlPool::connect(&connection_string)
            .await
            .expect("Failed to connect to test database");

        migration::apply(&pool)
            .await
            .expect("Failed to apply migrations");

        let connection = SqlxMySqlConnector::from_sqlx_mysql_pool(pool.clone());

        tracing::info!(port = host_port, "Test database ready (MySQL)");

        Self {
            container,
            pool,
            connection,
            connection_string,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn starts_and_migrates() {
        let db = TestDatabase::new().await;
        assert!(db.connection_string.starts_with("mysql://root@127.0.0.1:"));
    }
}
