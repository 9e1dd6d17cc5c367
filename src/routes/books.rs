use actix_web::{HttpRequest, Responder, get, web};
use tera::Tera;

use crate::catalog::rest::RestCatalog;
use crate::listing::query::ListingParams;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, error_response, render_template};
use crate::services::books as book_service;
use crate::theme::Theme;

#[get("/books")]
pub async fn books_index(
    params: web::Query<ListingParams>,
    catalog: web::Data<RestCatalog>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
    req: HttpRequest,
) -> impl Responder {
    let theme = Theme::from_request(&req);

    match book_service::load_books_page(catalog.get_ref(), &params, server_config.page_size).await
    {
        Ok(data) => {
            let mut context = base_context(theme, "books");
            context.insert("books", &data.books);
            context.insert("count", &data.count);
            context.insert("search_query", &data.search_query);
            context.insert("url_query", &data.url_query);
            render_template(&tera, "books/index.html", &context)
        }
        Err(err) => error_response(&tera, theme, &err),
    }
}

#[get("/books/{id}")]
pub async fn book_detail(
    path: web::Path<i64>,
    catalog: web::Data<RestCatalog>,
    tera: web::Data<Tera>,
    req: HttpRequest,
) -> impl Responder {
    let theme = Theme::from_request(&req);

    match book_service::load_book_page(catalog.get_ref(), path.into_inner()).await {
        Ok(data) => {
            let mut context = base_context(theme, "books");
            context.insert("book", &data.book);
            render_template(&tera, "books/detail.html", &context)
        }
        Err(err) => error_response(&tera, theme, &err),
    }
}
