use actix_web::{App, HttpServer, middleware, web};
use tera::Tera;

use crate::catalog::rest::RestCatalog;
use crate::models::config::ServerConfig;
use crate::routes::books::{book_detail, books_index};
use crate::routes::main::{index, toggle_theme};
use crate::routes::not_found;
use crate::routes::shows::{show_detail, shows_index};
use crate::routes::stations::station_detail;
use crate::routes::topics::{topic_detail, topics_index};

pub mod catalog;
pub mod domain;
pub mod dto;
pub mod listing;
pub mod models;
pub mod pagination;
pub mod routes;
pub mod services;
pub mod theme;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let catalog = RestCatalog::new(&server_config.api_base_url)
        .map_err(|e| std::io::Error::other(format!("Failed to build catalog client: {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(index)
            .service(toggle_theme)
            .service(books_index)
            .service(book_detail)
            .service(shows_index)
            .service(show_detail)
            .service(station_detail)
            .service(topics_index)
            .service(topic_detail)
            .default_service(web::route().to(not_found))
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(catalog.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
