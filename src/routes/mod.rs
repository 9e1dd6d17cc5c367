use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, web};
use tera::{Context, Tera};

use crate::services::ServiceError;
use crate::theme::Theme;

pub mod books;
pub mod main;
pub mod shows;
pub mod stations;
pub mod topics;

/// Context pre-seeded with what every template expects.
pub fn base_context(theme: Theme, current_page: &str) -> Context {
    let mut context = Context::new();
    context.insert("theme", theme.as_str());
    context.insert("current_page", current_page);
    context
}

pub fn render_template(tera: &Tera, template_name: &str, context: &Context) -> HttpResponse {
    render_with_status(tera, template_name, context, StatusCode::OK)
}

fn render_with_status(
    tera: &Tera,
    template_name: &str,
    context: &Context,
    status: StatusCode,
) -> HttpResponse {
    match tera.render(template_name, context) {
        Ok(body) => HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(body),
        Err(err) => {
            log::error!("Failed to render template {template_name}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Maps a service failure to the matching error page. Missing records get a
/// 404; an unreachable catalog gets a 502 with an inline error indicator
/// rather than an empty listing.
pub fn error_response(tera: &Tera, theme: Theme, err: &ServiceError) -> HttpResponse {
    let (status, message) = match err {
        ServiceError::NotFound => (StatusCode::NOT_FOUND, "Page not found."),
        ServiceError::Catalog(_) => (
            StatusCode::BAD_GATEWAY,
            "The catalog is unavailable right now. Please try again shortly.",
        ),
    };

    let mut context = base_context(theme, "error");
    context.insert("status", &status.as_u16());
    context.insert("message", message);
    render_with_status(tera, "error.html", &context, status)
}

/// Fallback handler for unknown paths.
pub async fn not_found(tera: web::Data<Tera>, req: HttpRequest) -> HttpResponse {
    let theme = Theme::from_request(&req);
    error_response(&tera, theme, &ServiceError::NotFound)
}
