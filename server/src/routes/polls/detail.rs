use actix_web::{
    web::{block, Data, Path},
    HttpResponse,
};
use askama::Template;
use chrono::Utc;

use db::{get_conn, models::Question, PgPool};
use errors::Error;

use super::render_page;

#[derive(Template)]
#[template(path = "polls/detail.html")]
pub struct DetailTemplate {
    pub question: Question,
}

pub async fn detail(question_id: Path<i32>, pool: Data<PgPool>) -> Result<HttpResponse, Error> {
    let question_id = question_id.into_inner();
    let question = block(move || {
        let conn = get_conn(&pool)?;
        Question::find_published(&conn, question_id, Utc::now())
    })
    .await??;

    render_page(&DetailTemplate { question })
}
