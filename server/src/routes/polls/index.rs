use actix_web::{
    web::{block, Data},
    HttpResponse,
};
use askama::Template;
use chrono::Utc;

use db::{get_conn, models::Question, PgPool};
use errors::Error;

use super::render_page;

#[derive(Template)]
#[template(path = "polls/index.html")]
pub struct IndexTemplate {
    pub latest_question_list: Vec<Question>,
}

pub async fn index(pool: Data<PgPool>) -> Result<HttpResponse, Error> {
    let latest_question_list = block(move || {
        let conn = get_conn(&pool)?;
        Question::latest_published(&conn, Utc::now())
    })
    .await??;

    render_page(&IndexTemplate {
        latest_question_list,
    })
}
