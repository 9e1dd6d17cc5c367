use actix_web::cookie::Cookie;
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use tera::Tera;

use crate::catalog::rest::RestCatalog;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, error_response, render_template};
use crate::services::main as main_service;
use crate::theme::{THEME_COOKIE, Theme};

#[get("/")]
pub async fn index(
    catalog: web::Data<RestCatalog>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
    req: HttpRequest,
) -> impl Responder {
    let theme = Theme::from_request(&req);

    match main_service::load_home_page(catalog.get_ref(), server_config.page_size).await {
        Ok(data) => {
            let mut context = base_context(theme, "home");
            context.insert("books", &data.books);
            context.insert("shows", &data.shows);
            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => error_response(&tera, theme, &err),
    }
}

/// Flips the theme cookie and returns to the referring page.
#[post("/theme")]
pub async fn toggle_theme(req: HttpRequest) -> impl Responder {
    let next = Theme::from_request(&req).toggled();

    let back = req
        .headers()
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("/")
        .to_string();

    let cookie = Cookie::build(THEME_COOKIE, next.as_str()).path("/").finish();

    HttpResponse::SeeOther()
        .cookie(cookie)
        .insert_header((header::LOCATION, back))
        .finish()
}
