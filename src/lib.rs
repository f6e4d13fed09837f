pub mod application;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod openapi;

#[cfg(test)]
mod testing;

use actix_web::{middleware::Logger, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use application::catalog_service::CatalogService;
pub use config::{ConfigError, StoreConfig};
pub use domain::ports::{CatalogStore, StoreFactory};
pub use infrastructure::{get_supabase_server, SupabaseClient, SupabaseFactory};

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The store is not contacted here; every request asks `factory` for a fresh
/// handle. The caller is responsible for `.await`-ing (or `tokio::spawn`-ing)
/// the returned server.
pub fn build_server<F: StoreFactory>(
    factory: F,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let service = web::Data::new(CatalogService::new(factory));
    Ok(HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(Logger::default())
            .route("/", web::get().to(handlers::pages::home::<F>))
            .service(
                web::resource("/productos")
                    .route(web::get().to(handlers::pages::list_products::<F>))
                    .route(web::post().to(handlers::pages::create_product::<F>)),
            )
            .route("/health", web::get().to(handlers::health::health))
            .service(
                SwaggerUi::new("/docs/{_:.*}")
                    .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
