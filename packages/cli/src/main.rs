use axum::http::Method;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use tasklist_todos::DbState;

mod api;
mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "Tasklist - todo list REST API server")]
#[command(version)]
struct Cli {
    /// Port to listen on (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Path to the SQLite database file (overrides DATABASE_PATH)
    #[arg(long)]
    database: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let port = cli.port.unwrap_or(config.port);
    let database_path = cli.database.or(config.database_path);

    println!("🚀 Starting Tasklist server...");
    println!("📡 Server will run on http://localhost:{}", port);
    println!("🔗 CORS origin: {}", config.cors_origin);

    let db = DbState::init_with_path(database_path).await?;

    // Create CORS layer
    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.parse::<axum::http::HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    // Create the router with CORS
    let app = api::create_router(db).layer(cors);

    // Create socket address
    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    println!("✅ Server listening on {}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
