use core_config::database::DatabaseConfig;
use core_config::FromEnv;
use database::mysql::{self, DatabaseConnection, Dsn, MysqlConfig};
use eyre::{Result, WrapErr};
use migration::MigrateOutcome;
use tracing::info;

/// Everything a command handler needs for one invocation.
///
/// Built once per process, passed down explicitly; there is no shared
/// state across invocations.
pub struct AppContext {
    pub db: DatabaseConnection,
}

impl AppContext {
    /// Connect to the database named by the `DSN` environment variable,
    /// optionally applying pending migrations first, and hand back a ready
    /// client.
    pub async fn connect(migrate: bool) -> Result<Self> {
        let config = DatabaseConfig::from_env()?;

        let dsn = Dsn::parse(&config.dsn)
            .wrap_err("failed to parse DSN")?
            .normalized(migrate);

        let pool = mysql::connect(&dsn, &MysqlConfig::default())
            .await
            .wrap_err("failed to connect to MySQL")?;

        if migrate {
            match migration::apply(&pool)
                .await
                .wrap_err("db migrations update")?
            {
                MigrateOutcome::NoChange => info!("Database already up to date"),
                MigrateOutcome::Applied(n) => info!(applied = n, "Database migrated"),
            }
        }

        Ok(Self {
            db: mysql::into_client(pool),
        })
    }

    /// Release the connection. Called at the end of every command.
    pub async fn close(self) -> Result<()> {
        self.db.close().await?;
        Ok(())
    }
}
