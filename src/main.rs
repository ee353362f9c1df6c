use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};
use std::sync::Arc;

use rafiki::config::Config;
use rafiki::model::AnthropicClient;
use rafiki::ratelimit;
use rafiki::web::routes;
use rafiki::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    let provider = match AnthropicClient::new(&config.upstream) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to initialize completion client: {:#}", e);
            std::process::exit(1);
        }
    };

    let state = Data::new(AppState::new(Arc::new(provider), config.public_dir.clone()));
    ratelimit::spawn_sweeper(state.limiter.clone());

    info!(
        "🦁 Rafiki anaendesha seva kwenye http://localhost:{} (static files from {})",
        config.port,
        config.public_dir.display()
    );

    HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(Logger::default())
            .configure(move |cfg| routes::configure(cfg, state))
    })
    .bind(("0.0.0.0", config.port))?
    .run()
    .await
}
