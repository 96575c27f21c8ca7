use std::path::PathBuf;

use clap::Subcommand;
use core_config::env_or_default;
use eyre::Result;

use crate::context::AppContext;

/// Where new migration files land unless `--dir` or `MIGRATIONS_DIR` says
/// otherwise.
const DEFAULT_MIGRATIONS_DIR: &str = "libs/migration/migrations";

#[derive(Subcommand)]
pub enum MigrationCommands {
    /// Execute the migrations
    Execute,

    /// Create a new migration file
    Create {
        /// Migration name, e.g. `create_users`
        name: String,

        /// Directory holding the migration history
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

pub async fn run(cmd: MigrationCommands) -> Result<()> {
    match cmd {
        MigrationCommands::Execute => {
            // Connecting with migrate=true applies anything pending.
            let ctx = AppContext::connect(true).await?;
            ctx.close().await
        }
        MigrationCommands::Create { name, dir } => {
            let dir = dir.unwrap_or_else(|| {
                PathBuf::from(env_or_default("MIGRATIONS_DIR", DEFAULT_MIGRATIONS_DIR))
            });

            let path = migration::create_migration(&dir, &name)?;
            println!("created {}", path.display());
            Ok(())
        }
    }
}
