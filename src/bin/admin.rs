//! CLI administration tool for alias-shortener.
//!
//! Provides commands for managing short links and performing database
//! operations without going through the HTTP API. Saves and deletes use the
//! same [`LinkService`] and validation rules as the server.
//!
//! # Usage
//!
//! ```bash
//! # Apply pending migrations
//! cargo run --bin admin -- migrate
//!
//! # Shorten a URL (alias generated unless given)
//! cargo run --bin admin -- save https://example.com/page --alias abc123
//!
//! # Look up where an alias points
//! cargo run --bin admin -- lookup abc123
//!
//! # Delete a short link
//! cargo run --bin admin -- delete abc123
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`alias_shortener::config`].

use alias_shortener::application::services::{LinkService, SaveOutcome, SaveSettings};
use alias_shortener::config::{self, Config};
use alias_shortener::domain::repositories::ShortLinkRepository;
use alias_shortener::infrastructure::persistence::PgShortLinkRepository;
use alias_shortener::server;
use alias_shortener::utils::validation::Validator;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing alias-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,

    /// Shorten a URL
    Save {
        /// URL to shorten
        url: String,

        /// Alias to use (generated if omitted)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Show the URL stored under an alias
    Lookup {
        alias: String,
    },

    /// Delete a short link
    Delete {
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = server::connect_pool(&config).await?;

    match cli.command {
        Commands::Migrate => handle_migrate(&pool).await?,
        Commands::Save { url, alias } => {
            handle_save(&link_service(&pool, &config), &url, alias.as_deref()).await?
        }
        Commands::Lookup { alias } => handle_lookup(&link_service(&pool, &config), &alias).await?,
        Commands::Delete { alias, yes } => {
            handle_delete(&link_service(&pool, &config), &alias, yes).await?
        }
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn link_service(pool: &PgPool, config: &Config) -> LinkService<dyn ShortLinkRepository> {
    let repository: Arc<dyn ShortLinkRepository> =
        Arc::new(PgShortLinkRepository::new(Arc::new(pool.clone())));

    LinkService::new(
        repository,
        Validator::from_config(config),
        SaveSettings::from_config(config),
    )
}

async fn handle_migrate(pool: &PgPool) -> Result<()> {
    println!("{}", "🛠  Applying migrations...".bright_blue());

    server::migrate(pool).await?;

    println!("{}", "✅ Migrations applied".green().bold());
    Ok(())
}

/// Saves a URL and prints the resulting alias.
async fn handle_save(
    service: &LinkService<dyn ShortLinkRepository>,
    url: &str,
    alias: Option<&str>,
) -> Result<()> {
    println!("{}", "🔗 Save Short Link".bright_blue().bold());
    println!();

    let saved = service.save(url, alias).await?;

    let note = match saved.outcome {
        SaveOutcome::Created => "created".green(),
        SaveOutcome::CreatedAfterRetry => format!("created after {} attempts", saved.attempts).green(),
        SaveOutcome::Existing => "already stored".yellow(),
    };

    println!("  URL:   {}", url.cyan());
    println!("  Alias: {} ({})", saved.alias.bright_yellow().bold(), note);
    println!();

    Ok(())
}

async fn handle_lookup(service: &LinkService<dyn ShortLinkRepository>, alias: &str) -> Result<()> {
    let url = service.resolve(alias).await?;

    println!("  {} → {}", alias.bright_yellow(), url.cyan());
    Ok(())
}

/// Deletes a short link after showing its target.
///
/// Requires confirmation (default: No) unless `--yes` is given.
async fn handle_delete(
    service: &LinkService<dyn ShortLinkRepository>,
    alias: &str,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🗑  Delete Short Link".bright_blue().bold());
    println!();

    let url = service.resolve(alias).await?;

    println!("  Alias: {}", alias.bright_yellow());
    println!("  URL:   {}", url.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service.delete(alias).await?;

    println!();
    println!("{}", "✅ Link deleted".green().bold());
    println!();

    Ok(())
}

/// Displays the number of stored links and the newest one.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_links")
        .fetch_one(pool)
        .await?;

    let newest: Option<String> =
        sqlx::query_scalar("SELECT alias FROM short_links ORDER BY id DESC LIMIT 1")
            .fetch_optional(pool)
            .await?;

    println!(
        "  Links:  {}",
        links_count.to_string().bright_green().bold()
    );
    if let Some(alias) = newest {
        println!("  Newest: {}", alias.cyan());
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
