use tracing::log::LevelFilter;

/// MySQL connection pool configuration
///
/// The CLI issues one operation per invocation, so the defaults keep the
/// pool small. Query logging is on by default; every statement is echoed at
/// the configured level.
#[derive(Clone, Debug)]
pub struct MysqlConfig {
    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,

    /// Connection acquire timeout in seconds
    pub acquire_timeout_secs: u64,

    /// Enable SQL statement logging
    pub sqlx_logging: bool,

    /// SQL statement logging level
    pub sqlx_logging_level: LevelFilter,
}

impl MysqlConfig {
    pub fn new() -> Self {
        Self {
            max_connections: 5,
            min_connections: 1,
            acquire_timeout_secs: 8,
            sqlx_logging: true,
            sqlx_logging_level: LevelFilter::Info,
        }
    }

    pub fn with_pool_size(max_connections: u32, min_connections: u32) -> Self {
        Self {
            max_connections,
            min_connections,
            ..Self::new()
        }
    }

    /// The statement log level, `Off` when logging is disabled.
    pub fn statement_level(&self) -> LevelFilter {
        if self.sqlx_logging {
            self.sqlx_logging_level
        } else {
            LevelFilter::Off
        }
    }
}

impl Default for MysqlConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_enables_statement_logging() {
        let config = MysqlConfig::default();
        assert!(config.sqlx_logging);
        assert_eq!(config.statement_level(), LevelFilter::Info);
    }

    #[test]
    fn disabled_logging_maps_to_off() {
        let config = MysqlConfig {
            sqlx_logging: false,
            ..MysqlConfig::new()
        };
        assert_eq!(config.statement_level(), LevelFilter::Off);
    }

    #[test]
    fn with_pool_size_overrides_only_the_pool() {
        let config = MysqlConfig::with_pool_size(20, 2);
        assert_eq!(config.max_connections, 20);
        assert_eq!(config.min_connections, 2);
        assert!(config.sqlx_logging);
    }
}
