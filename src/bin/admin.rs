//! CLI administration tool for subway-lines.
//!
//! Manages lines directly in the PostgreSQL store without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin admin -- line list
//! cargo run --bin admin -- line create --name "1호선"
//! cargo run --bin admin -- line rename 1 "2호선"
//! cargo run --bin admin -- line delete 1
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use subway_lines::application::services::LineService;
use subway_lines::domain::entities::NewLine;
use subway_lines::infrastructure::persistence::PgLineRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

type Service = LineService<PgLineRepository>;

/// CLI tool for managing subway-lines.
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
    /// Manage lines
    Line {
        #[command(subcommand)]
        action: LineAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Line management subcommands.
#[derive(Subcommand)]
enum LineAction {
    /// List all lines
    List,

    /// Create a new line
    Create {
        /// Line name (prompted for if omitted)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Rename a line
    Rename {
        /// Line id
        id: i64,
        /// New name
        name: String,
    },

    /// Delete a line
    Delete {
        /// Line id
        id: i64,

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

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Line { action } => {
            let service = LineService::new(Arc::new(PgLineRepository::new(Arc::new(pool))));
            handle_line_action(action, &service).await?
        }
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches line management commands.
async fn handle_line_action(action: LineAction, service: &Service) -> Result<()> {
    match action {
        LineAction::List => list_lines(service).await,
        LineAction::Create { name } => create_line(service, name).await,
        LineAction::Rename { id, name } => rename_line(service, id, name).await,
        LineAction::Delete { id, yes } => delete_line(service, id, yes).await,
    }
}

/// Lists all lines.
///
/// ```text
/// 🚇 Lines
///
///   ID   Name                           Updated
///   ──────────────────────────────────────────────────────────
///   1    1호선                           2025-01-15 10:30
/// ```
async fn list_lines(service: &Service) -> Result<()> {
    println!("{}", "🚇 Lines".bright_blue().bold());
    println!();

    let lines = service
        .list_lines()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list lines: {}", e))?;

    if lines.is_empty() {
        println!("{}", "  No lines found".yellow());
        println!();
        println!(
            "  Create one with: {} admin line create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<30} {:<20}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Updated".bright_white().bold()
    );
    println!("  {}", "─".repeat(58).bright_black());

    for line in &lines {
        println!(
            "  {:<4} {:<30} {}",
            line.id.to_string().bright_black(),
            line.name.cyan(),
            line.updated_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!("  Total: {}", lines.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Creates a line, prompting for the name when not given.
async fn create_line(service: &Service, name: Option<String>) -> Result<()> {
    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Line name").interact_text()?,
    };

    let line = service
        .create_line(NewLine::new(name))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create line: {}", e))?;

    println!(
        "{} {} (id {})",
        "✅ Created".green().bold(),
        line.name.cyan(),
        line.id.to_string().bright_white()
    );

    Ok(())
}

async fn rename_line(service: &Service, id: i64, name: String) -> Result<()> {
    let before = service
        .get_line(id)
        .await
        .map_err(|e| anyhow::anyhow!("Line {}: {}", id, e))?;

    let line = service
        .update_line(id, name)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to rename line: {}", e))?;

    println!(
        "{} {} → {}",
        "✅ Renamed".green().bold(),
        before.name.bright_black(),
        line.name.cyan()
    );

    Ok(())
}

/// Deletes a line after confirmation (default: No).
async fn delete_line(service: &Service, id: i64, skip_confirm: bool) -> Result<()> {
    let line = service
        .get_line(id)
        .await
        .map_err(|e| anyhow::anyhow!("Line {}: {}", id, e))?;

    println!("  Line: {}", line.name.cyan());
    println!("  ID:   {}", line.id.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this line?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_line(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete line: {}", e))?;

    println!("{}", "✅ Line deleted".green().bold());

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let lines_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM lines")
                .fetch_one(pool)
                .await
                .context("lines table missing, run `admin db migrate`")?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  Lines: {}", lines_count.to_string().bright_green().bold());
        }
        DbAction::Migrate => {
            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to migrate")?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
