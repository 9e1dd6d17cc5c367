use actix_web::{HttpRequest, Responder, get, web};
use tera::Tera;

use crate::catalog::rest::RestCatalog;
use crate::listing::query::ListingParams;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, error_response, render_template};
use crate::services::topics as topic_service;
use crate::theme::Theme;

#[get("/topics")]
pub async fn topics_index(
    catalog: web::Data<RestCatalog>,
    tera: web::Data<Tera>,
    req: HttpRequest,
) -> impl Responder {
    let theme = Theme::from_request(&req);

    match topic_service::load_topics_page(catalog.get_ref()).await {
        Ok(data) => {
            let mut context = base_context(theme, "topics");
            context.insert("topics", &data.topics);
            context.insert("station_names", &data.station_names);
            render_template(&tera, "topics/index.html", &context)
        }
        Err(err) => error_response(&tera, theme, &err),
    }
}

#[get("/topics/{slug}")]
pub async fn topic_detail(
    path: web::Path<String>,
    params: web::Query<ListingParams>,
    catalog: web::Data<RestCatalog>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
    req: HttpRequest,
) -> impl Responder {
    let theme = Theme::from_request(&req);

    match topic_service::load_topic_page(
        catalog.get_ref(),
        &path,
        &params,
        server_config.page_size,
    )
    .await
    {
        Ok(data) => {
            let mut context = base_context(theme, "topics");
            context.insert("topic", &data.topic);
            context.insert("books", &data.books);
            context.insert("count", &data.count);
            context.insert("url_query", &data.url_query);
            render_template(&tera, "topics/detail.html", &context)
        }
        Err(err) => error_response(&tera, theme, &err),
    }
}
