use dotenv::dotenv;
use log::{error, info};
use sales_dashboard::config::Config;
use sales_dashboard::repositories::MongoTransactionStore;
use sales_dashboard::routes;
use sales_dashboard::services::database;
use sales_dashboard::state::AppState;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();

    info!("Starting sales dashboard API");
    let config = Config::from_env().map_err(|e| {
        error!("{}", e);
        e
    })?;

    let db = database::connect_to_database(&config.mongo_uri, &config.db_name).await?;
    let store = Arc::new(MongoTransactionStore::new(&db, &config.collection_name));
    let state = Arc::new(AppState::new(
        store,
        reqwest::Client::new(),
        config.seed_url.clone(),
    ));

    let app = routes::router(state, &config.route_prefix);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(
        "Listening on http://{}{}/transactions",
        addr, config.route_prefix
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
