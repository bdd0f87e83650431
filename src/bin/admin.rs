//! CLI administration tool for the storefront backend.
//!
//! Provides commands for inspecting action statistics, testing geolocation,
//! and seeding demo data without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # View user-action statistics
//! cargo run --bin admin -- stats
//!
//! # Resolve an IP the way the recorder would
//! cargo run --bin admin -- resolve-ip 81.2.69.142
//!
//! # Insert demo catalog products
//! cargo run --bin admin -- seed-products
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `GEOIP_BASE_URL` / `GEOIP_TIMEOUT_SECS` (optional): resolver settings

use storefront::application::services::AnalyticsService;
use storefront::domain::entities::{Category, NewProduct};
use storefront::domain::repositories::ProductRepository;
use storefront::infrastructure::geo::{GeoResolver, IpApiResolver};
use storefront::infrastructure::persistence::{PgActionRepository, PgProductRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the storefront backend.
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
    /// Show user-action statistics
    Stats,

    /// Resolve an IP address to a country (same path as the recorder)
    ResolveIp {
        /// The IP address to look up
        ip: String,
    },

    /// Insert demo catalog products
    SeedProducts {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

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
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Stats => {
            let pool = connect().await?;
            show_stats(&pool).await?;
        }
        Commands::ResolveIp { ip } => {
            resolve_ip(&ip).await?;
        }
        Commands::SeedProducts { yes } => {
            let pool = connect().await?;
            seed_products(&pool, yes).await?;
        }
        Commands::Db { action } => {
            let pool = connect().await?;
            match action {
                DbAction::Check => db_check(&pool).await?,
            }
        }
    }

    Ok(())
}

async fn connect() -> Result<PgPool> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")
}

/// Prints the same summary the admin dashboard shows.
async fn show_stats(pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgActionRepository::new(Arc::new(pool.clone())));
    let analytics = AnalyticsService::new(repo);

    let stats = analytics
        .get_stats()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load stats: {}", e))?;

    println!("{}", "📊 User Action Statistics".bright_blue().bold());
    println!();
    println!(
        "  Total checkouts (distinct IPs): {}",
        stats.total_checkouts.to_string().bright_yellow()
    );
    println!(
        "  Total buy-nows  (distinct IPs): {}",
        stats.total_buy_nows.to_string().bright_yellow()
    );
    println!(
        "  Today checkouts:                {}",
        stats.today_checkouts.to_string().cyan()
    );
    println!(
        "  Today buy-nows:                 {}",
        stats.today_buy_nows.to_string().cyan()
    );
    println!();

    if stats.recent_groups.is_empty() {
        println!("{}", "No recent activity.".dimmed());
        return Ok(());
    }

    println!("{}", "Recent activity by IP:".bright_white().bold());
    for group in &stats.recent_groups {
        let country = group.country.as_deref().unwrap_or("-");
        println!(
            "  {:>15}  {:<20}  {} actions, latest {}",
            group.ip_address.cyan(),
            country,
            group.action_count().to_string().bright_yellow(),
            group.latest_action.format("%Y-%m-%d %H:%M:%S")
        );
    }

    Ok(())
}

/// Runs a one-off geolocation lookup through the production resolver.
async fn resolve_ip(ip: &str) -> Result<()> {
    let base_url =
        std::env::var("GEOIP_BASE_URL").unwrap_or_else(|_| "http://ip-api.com".to_string());
    let timeout = std::env::var("GEOIP_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5);

    let resolver = IpApiResolver::with_base_url(timeout, &base_url)?;

    println!("🌍 Resolving {}...", ip.cyan());
    match resolver.resolve(ip).await {
        Some(country) => println!("{} {}", "✅".green(), country.bright_yellow().bold()),
        None => println!(
            "{}",
            "❌ No country (private range, lookup failure, or timeout)".red()
        ),
    }

    Ok(())
}

/// Inserts a handful of demo products for local development.
async fn seed_products(pool: &PgPool, skip_confirm: bool) -> Result<()> {
    println!("{}", "🌱 Seed Demo Products".bright_blue().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Insert 3 demo products into this database?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let repo = PgProductRepository::new(Arc::new(pool.clone()));

    let demos = [
        NewProduct {
            name: "Blue Dream".to_string(),
            category: Category::Flowers,
            price: Decimal::new(2500, 2),
            rate: 8,
            flavour: "Berry".to_string(),
            images: vec!["/media/demo-blue-dream.jpg".to_string()],
            video: None,
        },
        NewProduct {
            name: "Citrus Gummies".to_string(),
            category: Category::Nonflower,
            price: Decimal::new(1499, 2),
            rate: 7,
            flavour: "Citrus".to_string(),
            images: vec!["/media/demo-citrus-gummies.jpg".to_string()],
            video: None,
        },
        NewProduct {
            name: "Wholesale Pack".to_string(),
            category: Category::Bulk,
            price: Decimal::new(19900, 2),
            rate: 9,
            flavour: "Mixed".to_string(),
            images: vec!["/media/demo-wholesale-pack.jpg".to_string()],
            video: None,
        },
    ];

    for demo in demos {
        let name = demo.name.clone();
        repo.create(demo)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to insert '{}': {}", name, e))?;
        println!("  {} {}", "✅".green(), name);
    }

    println!();
    println!("{}", "Done.".green().bold());

    Ok(())
}

/// Verifies connectivity and prints table counts.
async fn db_check(pool: &PgPool) -> Result<()> {
    let products: Option<i64> = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;
    let actions: Option<i64> = sqlx::query_scalar("SELECT COUNT(*) FROM user_actions")
        .fetch_one(pool)
        .await?;

    println!("{}", "✅ Database connection OK".green().bold());
    println!("  products:     {}", products.unwrap_or(0));
    println!("  user_actions: {}", actions.unwrap_or(0));

    Ok(())
}
