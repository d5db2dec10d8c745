//! User use case - command-line harness over the in-memory repository.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use domain::{CreateUser, DomainError, User};
use user_usecase::config::ValidationPolicy;
use user_usecase::repository::InMemoryUserStore;
use user_usecase::service::UserUseCase;

#[derive(Parser)]
#[command(name = "user-usecase")]
#[command(about = "User business-rule checks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a user through the create (or update) use case
    Check {
        /// JSON file with the candidate user
        #[arg(long)]
        user: PathBuf,
        /// JSON array of users already stored
        #[arg(long)]
        existing: Option<PathBuf>,
        /// Validate as an update instead of a creation
        #[arg(long)]
        update: bool,
    },
    /// Print the effective validation policy
    Policy,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let policy = ValidationPolicy::from_env();

    match cli.command {
        Commands::Check {
            user,
            existing,
            update,
        } => {
            let candidate: CreateUser = read_json(&user)?;
            let stored: Vec<CreateUser> = match existing {
                Some(path) => read_json(&path)?,
                None => Vec::new(),
            };

            let store = InMemoryUserStore::with_users(stored.into_iter().map(User::from))?;
            let manager = user_usecase::build_user_manager(Arc::new(store), policy);

            let candidate = candidate.into_user();
            let result = if update {
                manager.update_user(candidate).await
            } else {
                manager.create_user(candidate).await
            };

            match result {
                Ok(user) => println!("{}", serde_json::to_string_pretty(&user)?),
                Err(DomainError::Validation(err)) => {
                    eprintln!("[{}] {}: {}", err.violation, err.field(), err.message);
                    std::process::exit(1);
                }
                Err(err) => {
                    tracing::error!("Check failed: {}", err);
                    std::process::exit(1);
                }
            }
        }
        Commands::Policy => {
            println!("minimum_age          = {}", policy.minimum_age);
            println!("min_password_length  = {}", policy.min_password_length);
            println!("min_salary           = {}", policy.min_salary);
            println!("max_salary           = {}", policy.max_salary);
        }
    }

    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
