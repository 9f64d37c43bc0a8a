use anyhow::Result;
use clap::{Parser, Subcommand};
use sqlx::migrate::MigrateDatabase;

mod cli;

/// mealslot - meal slot planning
#[derive(Parser)]
#[command(name = "mealslot")]
#[command(about = "Plan meals per day and slot, with nutrition lookups", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Auto-fill a weekly or monthly plan and print it
    Plan(cli::plan::PlanArgs),
    /// One cuisine dish per day
    Menu(cli::plan::MenuArgs),
    /// Search recipes
    Search(cli::lookup::SearchArgs),
    /// Nutrition facts of comma-separated ingredients
    Nutrition {
        ingredients: String,
    },
    /// List saved plans
    History,
    /// Export saved plans as CSV
    Export {
        /// Output file, `-` for stdout
        #[arg(long)]
        output: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = mealslot::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealslot::observability::init_observability(&config.observability.log_level)?;

    match cli.command {
        Commands::Migrate => migrate_command(config).await,
        Commands::Reset => reset_command(config).await,
        Commands::Plan(args) => cli::plan::plan(config, args).await,
        Commands::Menu(args) => cli::plan::menu(args),
        Commands::Search(args) => cli::lookup::search(config, args).await,
        Commands::Nutrition { ingredients } => cli::lookup::nutrition(config, ingredients).await,
        Commands::History => cli::history::history(config).await,
        Commands::Export { output } => cli::history::export(config, output).await,
    }
}

#[tracing::instrument(skip(config))]
async fn migrate_command(config: mealslot::Config) -> Result<()> {
    tracing::info!("Running database migrations...");

    if !sqlx::Sqlite::database_exists(&config.database.url).await? {
        tracing::info!("Database does not exist, creating: {}", config.database.url);
        sqlx::Sqlite::create_database(&config.database.url).await?;
    }

    let db_pool = mealslot::create_pool(&config.database.url, 1).await?;
    mealslot::run_migrations(&db_pool).await?;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

#[tracing::instrument(skip(config))]
async fn reset_command(config: mealslot::Config) -> Result<()> {
    tracing::info!("Resetting database...");

    if sqlx::Sqlite::database_exists(&config.database.url).await? {
        tracing::warn!("Dropping existing database: {}", config.database.url);
        sqlx::Sqlite::drop_database(&config.database.url).await?;
        tracing::info!("Database dropped successfully");
    } else {
        tracing::info!("Database does not exist, nothing to drop");
    }

    migrate_command(config).await?;

    tracing::info!("Database reset completed successfully");

    Ok(())
}
