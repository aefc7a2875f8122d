//! CLI administration tool for url-shortener-api.
//!
//! Provides commands for managing accounts, issuing access tokens
//! and checking storage without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create an account (prompts for the password)
//! cargo run --bin admin -- account create --email ops@example.com
//!
//! # Log in and print a bearer token
//! cargo run --bin admin -- account token --email ops@example.com
//!
//! # Check storage connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL` (or `DB_*` components) and
//! `TOKEN_SIGNING_SECRET` are required.

use url_shortener_api::config::{self, StorageBackend};
use url_shortener_api::infrastructure::persistence::Store;
use url_shortener_api::state::AppState;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use std::sync::Arc;

/// CLI tool for managing url-shortener-api.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage accounts
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },

    /// Storage operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Account management subcommands.
#[derive(Subcommand)]
enum AccountAction {
    /// Register a new account
    Create {
        /// Account email (prompted if omitted)
        #[arg(short, long)]
        email: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Log in and print an access token
    Token {
        /// Account email (prompted if omitted)
        #[arg(short, long)]
        email: Option<String>,
    },
}

/// Storage operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check storage connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    if config.storage_backend == StorageBackend::Memory {
        println!(
            "{}",
            "Warning: STORAGE_BACKEND=memory, changes are discarded on exit".yellow()
        );
    }

    let store = Arc::new(Store::connect(&config).await?);
    let state = AppState::from_store(store.clone(), &config)?;

    let result = match cli.command {
        Commands::Account { action } => handle_account_action(action, &state).await,
        Commands::Db { action } => handle_db_action(action, &store).await,
    };

    store.disconnect().await;

    result
}

/// Dispatches account management commands.
async fn handle_account_action(action: AccountAction, state: &AppState) -> Result<()> {
    match action {
        AccountAction::Create { email, yes } => create_account(state, email, yes).await,
        AccountAction::Token { email } => issue_token(state, email).await,
    }
}

fn prompt_email(email: Option<String>) -> Result<String> {
    match email {
        Some(e) => Ok(e),
        None => Ok(Input::new().with_prompt("Email").interact_text()?),
    }
}

/// Registers an account with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for email (or use provided)
/// 2. Prompt for password with confirmation
/// 3. Confirm creation (unless `--yes` flag)
/// 4. Register through the account service
async fn create_account(state: &AppState, email: Option<String>, skip_confirm: bool) -> Result<()> {
    println!("{}", "Create account".bright_blue().bold());
    println!();

    let email = prompt_email(email)?;

    let password = Password::new().with_prompt("Password").interact()?;
    let confirm_password = Password::new().with_prompt("Confirm password").interact()?;

    println!();
    println!("  Email: {}", email.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this account?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let id = state
        .account_service
        .register(&email, &password, &confirm_password)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create account: {}", e))?;

    println!();
    println!("{}", "Account created successfully!".green().bold());
    println!("  ID: {}", id.to_string().bright_black());
    println!();

    Ok(())
}

/// Logs in and prints a bearer token.
async fn issue_token(state: &AppState, email: Option<String>) -> Result<()> {
    let email = prompt_email(email)?;
    let password = Password::new().with_prompt("Password").interact()?;

    let token = state
        .account_service
        .login(&email, &password)
        .await
        .map_err(|e| anyhow::anyhow!("Login failed: {}", e))?;

    println!();
    println!("{}", "Access token:".bright_white().bold());
    println!("  {}", token.bright_yellow());
    println!();
    println!(
        "  Valid for {} hours",
        state.token_service.ttl().num_hours().to_string().bright_white()
    );
    println!();
    println!("{}", "Example:".bright_white());
    println!("  {}", curl_example(&token.bright_yellow().to_string()));
    println!();

    Ok(())
}

/// Sample request creating a link with `token`.
fn curl_example(token: &str) -> String {
    format!(
        "curl -X POST -H \"Authorization: Bearer {}\" -H \"Content-Type: application/json\" -d '{{\"url\":\"https://example.com\"}}' http://localhost:3000/url",
        token
    )
}

/// Handles storage diagnostic commands.
async fn handle_db_action(action: DbAction, store: &Store) -> Result<()> {
    match action {
        DbAction::Check => {
            println!(
                "{}",
                format!("Checking {} storage...", store.backend_name()).bright_blue()
            );

            store
                .ping()
                .await
                .map_err(|e| anyhow::anyhow!("Storage check failed: {}", e))?;

            println!("{}", "Storage connection OK".green().bold());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curl_example_sends_json() {
        let example = curl_example("abc.def.ghi");

        assert!(example.contains("-H \"Content-Type: application/json\""));
        assert!(example.contains("Authorization: Bearer abc.def.ghi"));
        assert!(example.contains("'{\"url\":\"https://example.com\"}'"));
    }
}
