//! # Pen Master API Server
//!
//! Actix-web entry point for the social post scheduling backend.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod background;
mod config;
mod handlers;
mod middleware;
mod state;

use config::AppConfig;
use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    init_tracing();

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Pen Master API server on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::new(&config);

    // The scheduler handle must stay alive for the cron job to fire.
    let _sweeper = if config.sweep_enabled {
        match background::sweep::start(state.clone(), &config.sweep_schedule).await {
            Ok(scheduler) => Some(scheduler),
            Err(e) => {
                tracing::error!(error = %e, "Overdue sweep failed to start");
                None
            }
        }
    } else {
        tracing::info!("Overdue sweep disabled");
        None
    };

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,api_server=debug,penmaster_infra=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}
