//! Folio catalog server entry point.
//!
//! Runs the HTTP server by default; `db preflight` and `db migrate` check and
//! prepare the PostgreSQL backend without serving.

use std::sync::Arc;

use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_core::CatalogService;
use folio_core::database::memory::{InMemoryAuthorsRepository, InMemoryBooksRepository};
use folio_core::database::postgres::PostgresDatabase;
use folio_server::infra::config::Config;
use folio_server::{AppState, create_app, seed};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "folio-server")]
#[command(about = "REST service for the Folio author and book catalog")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(ClapArgs, Debug, Clone)]
struct ServeArgs {
    /// Server port (overrides config)
    #[arg(short, long, env = "FOLIO_PORT")]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long, env = "FOLIO_HOST")]
    host: Option<String>,

    /// Run against an in-memory store seeded with demo data
    #[arg(long, env = "FOLIO_DEMO", default_value_t = false)]
    demo: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(subcommand)]
    Db(DbCommand),
}

#[derive(Debug, Subcommand)]
enum DbCommand {
    /// Check database connectivity and exit
    Preflight,
    /// Apply database migrations and exit
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(command) = cli.command {
        match command {
            Command::Db(DbCommand::Preflight) => {
                run_db_preflight(&cli.serve).await?;
                return Ok(());
            }
            Command::Db(DbCommand::Migrate) => {
                run_db_migrate(&cli.serve).await?;
                return Ok(());
            }
        }
    }

    run_server(cli.serve).await
}

fn load_runtime_config(args: &ServeArgs) -> anyhow::Result<Config> {
    let mut config = Config::load().context("failed to load configuration")?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host.clone() {
        config.server.host = host;
    }
    if args.demo {
        config.demo = true;
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // Request traces stay quiet by default. Override via RUST_LOG.
                "info,folio_server=debug,folio_core=debug,tower_http=warn".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if config.env_file_loaded {
        info!("loaded .env file");
    }

    Ok(config)
}

fn require_database_url(config: &Config) -> anyhow::Result<String> {
    config.database.url.clone().ok_or_else(|| {
        anyhow::anyhow!(
            "no database configured: set DATABASE_URL (or PGDATABASE / DATABASE_NAME), \
            or run with --demo for an in-memory store"
        )
    })
}

async fn run_db_preflight(args: &ServeArgs) -> anyhow::Result<()> {
    let config = load_runtime_config(args)?;
    let database_url = require_database_url(&config)?;
    let pg = PostgresDatabase::new(&database_url)
        .await
        .context("failed to connect to PostgreSQL for preflight")?;
    pg.ping().await.context("database preflight failed")?;
    info!("Database preflight passed");
    Ok(())
}

async fn run_db_migrate(args: &ServeArgs) -> anyhow::Result<()> {
    let config = load_runtime_config(args)?;
    let database_url = require_database_url(&config)?;
    let pg = PostgresDatabase::new(&database_url)
        .await
        .context("failed to connect to PostgreSQL for migration")?;
    pg.initialize_schema()
        .await
        .context("database migration failed")?;
    info!("Database migrations applied successfully");
    Ok(())
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let config = Arc::new(load_runtime_config(&args)?);

    let catalog = if config.demo {
        info!("Demo mode enabled - serving from the in-memory store");
        let books = InMemoryBooksRepository::new();
        let authors = InMemoryAuthorsRepository::new(books.clone());
        let catalog = CatalogService::new(Arc::new(authors), Arc::new(books));
        seed::seed_demo_catalog(&catalog)
            .await
            .context("failed to seed demo catalog")?;
        catalog
    } else {
        let database_url = require_database_url(&config)?;
        let pg = PostgresDatabase::new(&database_url)
            .await
            .context("failed to connect to PostgreSQL")?;
        pg.initialize_schema()
            .await
            .context("failed to apply database migrations")?;
        CatalogService::new(Arc::new(pg.authors()), Arc::new(pg.books()))
    };

    let state = AppState::new(Arc::clone(&config), catalog);
    let app = create_app(state);

    let addr = config.bind_addr();
    info!(
        "Starting Folio catalog server on {}:{}",
        config.server.host, config.server.port
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
