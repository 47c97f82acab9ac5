//! Actix and tera glue for paged screens.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use tera::{Context, Tera};

use crate::dto::paging::PagingView;
use crate::errors::PagingError;

/// Name under which the paging links partial is registered.
pub const PAGING_TEMPLATE: &str = "paging/links.html";

const PAGING_TEMPLATE_SOURCE: &str = include_str!("../templates/paging/links.html");

impl ResponseError for PagingError {
    fn status_code(&self) -> StatusCode {
        match self {
            PagingError::TokenEncode(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PagingError::MalformedToken { .. }
            | PagingError::OutOfRange { .. }
            | PagingError::TokenDecode { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

/// Adds the built-in paging partial to `tera`, so pages can
/// `{% include "paging/links.html" %}` it.
pub fn register_templates(tera: &mut Tera) -> tera::Result<()> {
    tera.add_raw_template(PAGING_TEMPLATE, PAGING_TEMPLATE_SOURCE)
}

/// Context expected by the paging partial: the view and the form action the
/// links post back to.
pub fn paging_context(view: &PagingView, action: &str) -> Context {
    let mut context = Context::new();
    context.insert("paging", view);
    context.insert("action", action);
    context
}

/// Renders only the paging links, e.g. for a partial page refresh.
pub fn render_paging(tera: &Tera, view: &PagingView, action: &str) -> HttpResponse {
    render_template(tera, PAGING_TEMPLATE, &paging_context(view, action))
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
