use actix_cors::Cors;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use dotenv::dotenv;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use services::store_utils::{start_store, AppState};

mod services;
#[cfg(test)]
mod test;
mod types;

#[derive(Debug, Deserialize)]
struct ServerConfig {
    host: String,
    port: u16,
}

fn load_config() -> ServerConfig {
    config::Config::builder()
        .set_default("host", "127.0.0.1")
        .expect("default host must be a valid config value")
        .set_default("port", 8080)
        .expect("default port must be a valid config value")
        .add_source(config::Environment::with_prefix("QE"))
        .build()
        .expect("unable to assemble server configuration")
        .try_deserialize()
        .expect("server configuration is malformed")
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    init_tracing();

    let config = load_config();
    let store = start_store();

    tracing::info!(host = %config.host, port = config.port, "starting QuickEats backend");

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(Data::new(AppState { store: store.clone() }))
            .configure(services::api_routes)
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
