use studydesk::bootstrap;
use studydesk::config::Config;
use studydesk::infrastructure::http::router::build_router;
use studydesk::infrastructure::observability;
use studydesk::infrastructure::persistence::Database;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing and metrics
    observability::init(&config)?;
    tracing::info!("Configuration loaded");

    // Initialize database connection
    let db = Database::connect(&config.database_url).await?;
    tracing::info!("Database connection established");

    // Run migrations
    db.run_migrations().await?;
    tracing::info!("Database migrations applied");

    // Build application state
    let state = bootstrap::build_app_state(db, &config)?;

    // Build router
    let app = build_router(state);

    // Start server
    let addr = config.server_address();
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
