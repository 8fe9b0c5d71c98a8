//! Jurassic CLI - Operator tooling for the catalog API.
//!
//! # Usage
//!
//! ```bash
//! # Provision a login credential
//! jurassic-cli user create -u TESTE -p 'TESTE123'
//!
//! # Print an argon2 hash for manual provisioning
//! jurassic-cli user hash -p 'TESTE123'
//! ```
//!
//! # Commands
//!
//! - `user create` - Create a user or reset its password
//! - `user hash` - Hash a password without touching the database

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "jurassic-cli")]
#[command(author, version, about = "Jurassic catalog operator tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage login credentials
    User {
        #[command(subcommand)]
        action: UserAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Create a user, or replace the password of an existing one
    Create {
        /// Username (login key)
        #[arg(short, long)]
        username: String,

        /// Plaintext password (hashed with argon2 before storage)
        #[arg(short, long)]
        password: String,
    },
    /// Print the argon2 hash of a password
    Hash {
        /// Plaintext password
        #[arg(short, long)]
        password: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

#[allow(clippy::print_stdout)] // `user hash` writes the hash to stdout
async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::User { action } => match action {
            UserAction::Create { username, password } => {
                commands::user::create(&username, &password).await?;
            }
            UserAction::Hash { password } => {
                let hash = commands::user::hash(&password)?;
                println!("{hash}");
            }
        },
    }
    Ok(())
}
