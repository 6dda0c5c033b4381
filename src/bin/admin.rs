//! CLI administration tool for smallurl.
//!
//! Manages short URLs stored in PostgreSQL without going through the HTTP
//! API. All operations go through [`UrlService`], so the same alias rules and
//! id derivation apply.
//!
//! # Usage
//!
//! ```bash
//! # List short URLs
//! cargo run --bin admin -- url list
//!
//! # Create a short URL with a derived id, or under an alias
//! cargo run --bin admin -- url create https://example.com/a
//! cargo run --bin admin -- url create https://example.com/docs --alias docs
//!
//! # Delete a short URL
//! cargo run --bin admin -- url delete docs
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use smallurl::application::services::UrlService;
use smallurl::infrastructure::persistence::PgUrlRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

type Service = UrlService<PgUrlRepository>;

/// CLI tool for managing smallurl.
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
    /// Manage short URLs
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Short URL subcommands.
#[derive(Subcommand)]
enum UrlAction {
    /// List all short URLs
    List,

    /// Create a short URL
    Create {
        /// Destination URL
        destination: String,

        /// Use this alias instead of a derived id
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Delete a short URL
    Delete {
        /// Id or alias to delete
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to apply migrations")?;

    let service = UrlService::new(Arc::new(PgUrlRepository::new(Arc::new(pool))));

    match cli.command {
        Commands::Url { action } => handle_url_action(action, &service).await?,
        Commands::Db { action } => handle_db_action(action, &service).await?,
    }

    Ok(())
}

/// Dispatches short URL commands.
async fn handle_url_action(action: UrlAction, service: &Service) -> Result<()> {
    match action {
        UrlAction::List => list_urls(service).await,
        UrlAction::Create { destination, alias } => create_url(service, destination, alias).await,
        UrlAction::Delete { id, yes } => delete_url(service, id, yes).await,
    }
}

/// Lists all short URLs.
///
/// # Output Format
///
/// ```text
/// 📋 Short URLs
///
///   ID                           Created              Destination
///   ────────────────────────────────────────────────────────────────
///   docs                         2026-01-15 10:30     https://example.com/docs
/// ```
async fn list_urls(service: &Service) -> Result<()> {
    println!("{}", "📋 Short URLs".bright_blue().bold());
    println!();

    let urls = service
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list short URLs: {}", e))?;

    if urls.is_empty() {
        println!("{}", "  No short URLs found".yellow());
        println!();
        println!(
            "  Create one with: {} admin url create <destination>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<28} {:<20} {}",
        "ID".bright_white().bold(),
        "Created".bright_white().bold(),
        "Destination".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for url in &urls {
        println!(
            "  {:<28} {:<20} {}",
            url.id.cyan(),
            url.created
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            url.destination
        );
    }

    println!();
    println!("  Total: {}", urls.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Creates a short URL, derived or aliased.
async fn create_url(service: &Service, destination: String, alias: Option<String>) -> Result<()> {
    let url = match alias {
        Some(alias) => service.create_with_alias(alias, destination).await,
        None => service.create(destination).await,
    }
    .map_err(|e| anyhow::anyhow!("Failed to create short URL: {}", e))?;

    println!("{}", "✅ Short URL created".green().bold());
    println!("  ID:          {}", url.id.bright_yellow().bold());
    println!("  Destination: {}", url.destination.cyan());
    println!();

    Ok(())
}

/// Deletes a short URL after confirmation.
async fn delete_url(service: &Service, id: String, skip_confirm: bool) -> Result<()> {
    let url = service
        .get_by_id(&id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to find short URL: {}", e))?;

    println!("{}", "🗑️  Delete short URL".bright_blue().bold());
    println!("  ID:          {}", url.id.cyan());
    println!("  Destination: {}", url.destination);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this short URL?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete(&id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("{}", "✅ Short URL deleted".green().bold());
    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, service: &Service) -> Result<()> {
    match action {
        DbAction::Check => {
            if service.storage_healthy().await {
                println!("{}", "✅ Database connection OK".green().bold());
                Ok(())
            } else {
                println!("{}", "❌ Database connection failed".red().bold());
                anyhow::bail!("Database check failed")
            }
        }
    }
}
