use std::net::SocketAddr;

use axum::Router;
use dotenv::dotenv;

use casegen::ai::client::GeminiClient;
use casegen::ai::generator::TestCaseGenerator;
use casegen::config::Config;
use casegen::flow::GenerationFlow;
use casegen::handler::RequestHandler;
use casegen::routes;
use casegen::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::builder().filter_level(log::LevelFilter::Info).init();

    let config = Config::from_env()?;

    // One long-lived model client for the life of the process.
    let client = GeminiClient::new(&config);
    let handler = RequestHandler::new(GenerationFlow::new(TestCaseGenerator::new(client)));
    let state = AppState::new(handler);

    let app = Router::new().merge(routes::routes()).with_state(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    log::info!("Listening on {addr}");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    log::info!("Shutdown signal received");
}
