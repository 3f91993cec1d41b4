use actix_web::web;

pub mod polls;
pub mod questions;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/polls")
            .route("", web::get().to(polls::index))
            .route("/{id}", web::get().to(polls::detail)),
    )
    .service(
        web::scope("/api").service(
            web::scope("/questions")
                .route("", web::get().to(questions::get_all))
                .route("/{id}", web::get().to(questions::get_one)),
        ),
    );
}
