use std::net::SocketAddr;
use lambda_http::{run, Error};
use book_catalogue::catalogue::controller::build_router;
use book_catalogue::core::controller::AppState;
use book_catalogue::core::domain::Configuration;
use book_catalogue::utils::logging::setup_tracing;

// Set by the Lambda runtime; without it the router is served over plain HTTP.
const LAMBDA_RUNTIME_ENV: &str = "AWS_LAMBDA_RUNTIME_API";

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let config = Configuration::from_env()?;
    tracing::info!(branch = %config.branch_id, store = %config.store, "starting catalogue service");

    let state = AppState::build(&config).await?;
    let app = build_router(state);

    if std::env::var(LAMBDA_RUNTIME_ENV).is_ok() {
        return run(app).await;
    }

    let addr: SocketAddr = config.bind_address.parse()?;
    tracing::info!(%addr, "listening");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
