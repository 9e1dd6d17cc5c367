use actix_web::{HttpRequest, Responder, get, web};
use tera::Tera;

use crate::catalog::rest::RestCatalog;
use crate::routes::{base_context, error_response, render_template};
use crate::services::stations as station_service;
use crate::theme::Theme;

#[get("/stations/{station_id}")]
pub async fn station_detail(
    path: web::Path<String>,
    catalog: web::Data<RestCatalog>,
    tera: web::Data<Tera>,
    req: HttpRequest,
) -> impl Responder {
    let theme = Theme::from_request(&req);

    match station_service::load_station_page(catalog.get_ref(), &path).await {
        Ok(data) => {
            let mut context = base_context(theme, "stations");
            context.insert("station", &data.station);
            context.insert("shows", &data.shows);
            render_template(&tera, "stations/detail.html", &context)
        }
        Err(err) => error_response(&tera, theme, &err),
    }
}
