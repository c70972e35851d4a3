use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use anyhow::Result;
use tracing_subscriber::EnvFilter;

use ewastenet_backend::{AppState, Config, SystemClock, TracingNavigator, routes};

#[actix_web::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "ewastenet_backend=info".into()),
        )
        .init();

    let config = Config::from_env()?;
    tracing::info!(?config.timings, host = %config.host, port = config.port, "loaded configuration");

    let bind = (config.host.clone(), config.port);
    let state = web::Data::new(AppState::new(
        config,
        Arc::new(SystemClock),
        Arc::new(TracingNavigator),
    ));

    HttpServer::new(move || App::new().app_data(state.clone()).configure(routes::init))
        .bind(bind)?
        .run()
        .await?;

    Ok(())
}
