use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, web};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod error;
mod store;

use store::RecordStore;

pub struct AppState {
    pub store: Arc<RecordStore>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    log::info!("notes-backend v{}", env!("CARGO_PKG_VERSION"));

    let data_file = config::data_file();
    log::info!("Using data file: {}", data_file.display());

    // A data file that exists but does not parse is fatal: serving with an
    // unreadable store would overwrite it on the first mutation.
    let store = match RecordStore::load(data_file) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            log::error!("Failed to load record store: {}", e);
            std::process::exit(1);
        }
    };

    let port = config::port();
    log::info!("Starting HTTP server on port {}", port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(AppState {
                store: Arc::clone(&store),
            }))
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::health::config)
            .configure(controllers::notes::config)
            .configure(controllers::accounts::config)
            .configure(controllers::auth::config)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
