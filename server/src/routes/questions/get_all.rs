use actix_web::{
    web::{block, Data, Json},
    Result,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use db::{get_conn, models::Question, PgPool};
use errors::Error;

#[derive(Debug, Deserialize, Serialize)]
pub struct IndexResponse {
    pub latest_question_list: Vec<Question>,
}

pub async fn get_all(pool: Data<PgPool>) -> Result<Json<IndexResponse>, Error> {
    let latest_question_list = block(move || {
        let conn = get_conn(&pool)?;
        Question::latest_published(&conn, Utc::now())
    })
    .await??;

    Ok(Json(IndexResponse {
        latest_question_list,
    }))
}
