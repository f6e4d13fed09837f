use dotenvy::dotenv;
use std::env;
use trolley_inventory::{build_server, StoreConfig, SupabaseFactory};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .expect("PORT must be a valid number");

    // Store credentials are read per request, so a missing key does not stop startup.
    if let Err(e) = StoreConfig::from_env() {
        log::warn!("{}; store-backed pages will fail until it is set", e);
    }

    log::info!("Starting server at http://{}:{}", host, port);

    build_server(SupabaseFactory::from_env(), &host, port)?.await
}
