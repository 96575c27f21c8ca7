use std::time::Duration;

use sea_orm::{DatabaseConnection, SqlxMySqlConnector};
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions, MySqlSslMode};
use sqlx::ConnectOptions;
use tracing::info;

use super::{Dsn, MysqlConfig};
use crate::common::DatabaseResult;

/// Open a MySQL connection pool for a normalized DSN.
///
/// The DSN's forced parameters are mapped onto driver options: `tls=true`
/// becomes a required TLS session, the character set is handed through, and
/// statement logging follows the config. Time parsing needs no flag here;
/// the driver decodes temporal columns into chrono types natively.
pub async fn connect(dsn: &Dsn, config: &MysqlConfig) -> DatabaseResult<MySqlPool> {
    let mut options = MySqlConnectOptions::new()
        .host(&dsn.host)
        .port(dsn.port)
        .username(&dsn.username)
        .database(&dsn.database)
        .charset(dsn.charset().unwrap_or("utf8mb4"));

    if let Some(password) = &dsn.password {
        options = options.password(password);
    }

    let ssl_mode = if dsn.tls_enabled() {
        MySqlSslMode::Required
    } else {
        MySqlSslMode::Preferred
    };

    let options = options
        .ssl_mode(ssl_mode)
        .log_statements(config.statement_level());

    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_with(options)
        .await?;

    info!(host = %dsn.host, database = %dsn.database, "Connected to MySQL");

    Ok(pool)
}

/// Wrap an open pool in a SeaORM client bound to the MySQL dialect.
pub fn into_client(pool: MySqlPool) -> DatabaseConnection {
    SqlxMySqlConnector::from_sqlx_mysql_pool(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires actual database
    async fn test_connect() {
        let raw = std::env::var("DSN")
            .unwrap_or_else(|_| "mysql://root@localhost:3306/test".to_string());

        let dsn = Dsn::parse(&raw).unwrap().normalized(false);
        let result = connect(&dsn, &MysqlConfig::default()).await;
        assert!(result.is_ok());
    }
}
