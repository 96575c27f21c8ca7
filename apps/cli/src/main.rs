//! userdb
//!
//! A demonstration CLI that connects to a MySQL-compatible database
//! (PlanetScale/Vitess), applies embedded schema migrations, and performs
//! CRUD operations on the user directory.

use clap::{Parser, Subcommand};
use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::Environment;
use eyre::Result;

mod commands;
mod context;

use commands::migration::MigrationCommands;
use commands::user::UserCommands;

#[derive(Parser)]
#[command(name = "userdb")]
#[command(about = "User directory CRUD against a PlanetScale/Vitess database")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// User DB CRUD commands
    #[command(subcommand)]
    User(UserCommands),

    /// Migration authoring and execution
    #[command(subcommand)]
    Migration(MigrationCommands),
}

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();

    let environment = Environment::from_env();
    init_tracing(&environment);

    let cli = Cli::parse();

    match cli.command {
        Commands::User(cmd) => commands::user::run(cmd).await,
        Commands::Migration(cmd) => commands::migration::run(cmd).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_user_create() {
        let cli = Cli::try_parse_from([
            "userdb", "user", "create", "-n", "John Deer", "-e", "dearjohn@gmail.com",
        ])
        .unwrap();

        match cli.command {
            Commands::User(UserCommands::Create { name, email }) => {
                assert_eq!(name, "John Deer");
                assert_eq!(email, "dearjohn@gmail.com");
            }
            _ => panic!("expected user create"),
        }
    }

    #[test]
    fn parses_user_delete_id() {
        let cli = Cli::try_parse_from(["userdb", "user", "delete", "-i", "4"]).unwrap();

        match cli.command {
            Commands::User(UserCommands::Delete { id }) => assert_eq!(id, 4),
            _ => panic!("expected user delete"),
        }
    }

    #[test]
    fn parses_migration_create_with_name() {
        let cli = Cli::try_parse_from(["userdb", "migration", "create", "add_users_index"])
            .unwrap();

        match cli.command {
            Commands::Migration(MigrationCommands::Create { name, dir }) => {
                assert_eq!(name, "add_users_index");
                assert!(dir.is_none());
            }
            _ => panic!("expected migration create"),
        }
    }

    #[test]
    fn migration_create_requires_a_name() {
        assert!(Cli::try_parse_from(["userdb", "migration", "create"]).is_err());
    }
}
