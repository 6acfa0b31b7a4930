// Start of file: src/main.rs

use axum::{serve, Router};
use tokio::net::TcpListener;

use library_catalog_api::config::environment::EnvironmentVariables;
use library_catalog_api::config::state::AppState;
use library_catalog_api::core::{logging, server};
use library_catalog_api::database::DatabaseService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let environment: EnvironmentVariables = EnvironmentVariables::load()?;
    let (state, database): (AppState, Option<DatabaseService>) =
        AppState::from_environment(environment).await?;

    let listener: TcpListener = server::setup_listener(&state.environment).await?;
    let app: Router = server::create_app(state);

    tracing::info!("Server listening on: {}", listener.local_addr()?);

    serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    // Gracefully close database connections
    if let Some(database) = database {
        database.shutdown().await;
    }

    Ok(())
}

// End of file: src/main.rs
