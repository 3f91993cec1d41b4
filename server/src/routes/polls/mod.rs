use actix_web::HttpResponse;
use askama::Template;

use errors::Error;

mod detail;
mod index;

pub use self::detail::*;
pub use self::index::*;

fn render_page<T: Template>(template: &T) -> Result<HttpResponse, Error> {
    let body = template.render().map_err(|err| {
        Error::InternalServerError(format!("Failed to render template - {}", err))
    })?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}
