//! CLI administration tool for linktrail.
//!
//! Talks to the PostgreSQL store directly, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (prompts for the URL when --url is omitted)
//! cargo run --bin admin -- link create --url https://example.com/a/b
//!
//! # Show click analytics for a link
//! cargo run --bin admin -- link show AbC12xyz
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
//! Same store settings as the server (`DATABASE_URL` or `DB_*`, `BASE_URL`).

use linktrail::application::services::{AnalyticsService, LinkService};
use linktrail::config::{Config, StorageBackend};
use linktrail::server::Store;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};

/// CLI tool for managing linktrail.
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
    /// Create and inspect short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Shorten a URL
    Create {
        /// Target URL (prompted for when omitted)
        #[arg(short, long)]
        url: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show click analytics for a link
    Show {
        /// Short link identifier
        identifier: String,
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

    let config = Config::from_env()?;
    if config.storage_backend != StorageBackend::Postgres {
        anyhow::bail!("The admin tool only works with the postgres storage backend");
    }
    config.validate()?;

    let store = Store::open(&config).await?;

    let result = match cli.command {
        Commands::Link { action } => handle_link_action(action, &store, &config).await,
        Commands::Stats => handle_stats(&store).await,
        Commands::Db { action } => handle_db_action(action, &store).await,
    };

    store.close().await;
    result
}

/// Dispatches link commands.
async fn handle_link_action(action: LinkAction, store: &Store, config: &Config) -> Result<()> {
    match action {
        LinkAction::Create { url, yes } => {
            let service = LinkService::new(store.repository.clone(), config.base_url.clone());
            create_link(&service, url, yes).await
        }
        LinkAction::Show { identifier } => {
            let service = AnalyticsService::new(store.repository.clone());
            show_link(&service, &identifier).await
        }
    }
}

/// Shortens a URL with interactive prompts.
async fn create_link(service: &LinkService, url: Option<String>, skip_confirm: bool) -> Result<()> {
    println!("{}", "🔗 Create Short Link".bright_blue().bold());
    println!();

    let url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("Target URL")
            .with_initial_text("https://")
            .interact_text()?,
    };

    println!("  Target: {}", url.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this link?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let short_link = service
        .shorten(&url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!();
    println!("{}", "✅ Link created successfully!".green().bold());
    println!();
    println!("  Identifier: {}", short_link.identifier.bright_white());
    println!("  Short URL:  {}", short_link.short_url.bright_yellow().bold());
    println!();

    Ok(())
}

/// Prints the click count and visit history of a link.
///
/// # Output Format
///
/// ```text
/// 📊 Analytics for AbC12xyz
///
///   Target:       https://example.com/a/b
///   Created:      2024-01-15 10:30
///   Total clicks: 2
///
///   #   Visited at (UTC)
///   ─────────────────────────────
///   1   2024-01-15 10:31:02.117
///   2   2024-01-15 11:02:45.903
/// ```
async fn show_link(service: &AnalyticsService, identifier: &str) -> Result<()> {
    let analytics = service
        .get_analytics(identifier)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!(
        "{} {}",
        "📊 Analytics for".bright_blue().bold(),
        identifier.bright_white().bold()
    );
    println!();
    println!("  Target:       {}", analytics.link.target_url.cyan());
    println!(
        "  Created:      {}",
        analytics
            .link
            .created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!(
        "  Total clicks: {}",
        analytics.total_clicks.to_string().bright_green().bold()
    );
    println!();

    if analytics.history.is_empty() {
        println!("{}", "  No visits yet".yellow());
        println!();
        return Ok(());
    }

    println!(
        "  {:<4}{}",
        "#".bright_white().bold(),
        "Visited at (UTC)".bright_white().bold()
    );
    println!("  {}", "─".repeat(29).bright_black());

    for (index, visit) in analytics.history.iter().enumerate() {
        let visited_at = visit
            .visited_at()
            .map(|t| t.format("%Y-%m-%d %H:%M:%S%.3f").to_string())
            .unwrap_or_else(|| format!("{} ms", visit.timestamp));

        println!("  {:<4}{}", (index + 1).to_string().bright_black(), visited_at);
    }
    println!();

    Ok(())
}

/// Displays store-wide statistics.
async fn handle_stats(store: &Store) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let service = AnalyticsService::new(store.repository.clone());
    let (links, visits) = service
        .totals()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load statistics: {}", e))?;

    println!("  Links:  {}", links.to_string().bright_green().bold());
    println!("  Visits: {}", visits.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, store: &Store) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            store
                .repository
                .health_check()
                .await
                .context("Database check failed")?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
    }

    Ok(())
}
