use actix_web::{HttpRequest, Responder, get, web};
use tera::Tera;

use crate::catalog::rest::RestCatalog;
use crate::listing::query::ListingParams;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, error_response, render_template};
use crate::services::shows as show_service;
use crate::theme::Theme;

#[get("/shows")]
pub async fn shows_index(
    params: web::Query<ListingParams>,
    catalog: web::Data<RestCatalog>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
    req: HttpRequest,
) -> impl Responder {
    let theme = Theme::from_request(&req);

    match show_service::load_shows_page(catalog.get_ref(), &params, server_config.page_size).await
    {
        Ok(data) => {
            let mut context = base_context(theme, "shows");
            context.insert("shows", &data.shows);
            context.insert("count", &data.count);
            context.insert("search_query", &data.search_query);
            context.insert("url_query", &data.url_query);
            render_template(&tera, "shows/index.html", &context)
        }
        Err(err) => error_response(&tera, theme, &err),
    }
}

#[get("/shows/{id}")]
pub async fn show_detail(
    path: web::Path<i64>,
    params: web::Query<ListingParams>,
    catalog: web::Data<RestCatalog>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
    req: HttpRequest,
) -> impl Responder {
    let theme = Theme::from_request(&req);

    match show_service::load_show_page(
        catalog.get_ref(),
        path.into_inner(),
        &params,
        server_config.page_size,
    )
    .await
    {
        Ok(data) => {
            let mut context = base_context(theme, "shows");
            context.insert("show", &data.show);
            context.insert("books", &data.books);
            context.insert("count", &data.count);
            context.insert("url_query", &data.url_query);
            render_template(&tera, "shows/detail.html", &context)
        }
        Err(err) => error_response(&tera, theme, &err),
    }
}
