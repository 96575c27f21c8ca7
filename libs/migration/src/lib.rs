//! Embedded schema migrations for the user directory database
//!
//! Migration files live in `migrations/` as plain SQL named
//! `<version>_<description>.sql` and are embedded at build time. The
//! applied-version watermark is tracked by the runner in its
//! `_sqlx_migrations` bookkeeping table on the target database.

mod apply;
mod create;
mod error;

pub use apply::{apply, MigrateOutcome};
pub use create::create_migration;
pub use error::MigrationError;

use sqlx::migrate::Migrator;

/// Every migration shipped with this build, ascending by version.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");
