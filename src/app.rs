//! Actix-Web application wiring.

use std::sync::Arc;

use actix_web::{App, HttpServer, middleware, web};
use tera::Tera;

use crate::config_store::{ConfigStore, FileConfigStore};
use crate::db::ConnectionFactory;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::api::{api_citizens, update_citizen};
use crate::routes::main::show_citizens;
use crate::routes::settings::{get_db_config, test_db_connection, update_db_config};
use crate::routes::{form_error_handler, json_error_handler};

/// Registers every HTTP handler of the service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().error_handler(form_error_handler))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(show_citizens)
        .service(api_citizens)
        .service(update_citizen)
        .service(get_db_config)
        .service(update_db_config)
        .service(test_db_connection);
}

/// Builds the repository over the profile file at `db_config_path`.
pub fn build_repository(server_config: &ServerConfig) -> (Arc<FileConfigStore>, DieselRepository) {
    // The profile file is re-read on every connection, never cached.
    let store = Arc::new(FileConfigStore::new(&server_config.db_config_path));
    let connections = ConnectionFactory::new(
        store.clone() as Arc<dyn ConfigStore>,
        server_config.connection_options(),
    );
    (store, DieselRepository::new(connections))
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let (store, repo) = build_repository(&server_config);

    log::info!("Database config file: {}", store.path().display());

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);
    let store = web::Data::from(store);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .configure(configure)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(store.clone())
    })
    .bind(bind_address)?
    .run()
    .await
}
