use clap::Subcommand;
use domain_users::{CreateUser, MysqlUserRepository, UserRepository};
use eyre::Result;

use crate::context::AppContext;

#[derive(Subcommand)]
pub enum UserCommands {
    /// Create a user in the DB
    Create {
        /// -n "John Deer"
        #[arg(short, long)]
        name: String,

        /// -e dearjohn@gmail.com
        #[arg(short, long)]
        email: String,
    },

    /// List the users in the DB
    List,

    /// Delete the user from the DB
    Delete {
        /// -i 4
        #[arg(short, long)]
        id: i64,
    },
}

pub async fn run(cmd: UserCommands) -> Result<()> {
    let ctx = AppContext::connect(false).await?;
    let repo = MysqlUserRepository::new(ctx.db.clone());

    // Close the connection whether the operation succeeded or not; the
    // operation's error decides the exit code.
    let outcome = execute(&repo, cmd).await;
    ctx.close().await?;
    outcome
}

async fn execute(repo: &MysqlUserRepository, cmd: UserCommands) -> Result<()> {
    match cmd {
        UserCommands::Create { name, email } => {
            let user = repo.create(CreateUser { name, email }).await?;
            println!("{user}");
        }
        UserCommands::List => {
            for user in repo.list().await? {
                println!("{user}");
            }
        }
        UserCommands::Delete { id } => {
            let deleted = repo.delete(id).await?;
            println!("deleted {deleted} user(s)");
        }
    }

    Ok(())
}
