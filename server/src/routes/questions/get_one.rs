use actix_web::{
    web::{block, Data, Json, Path},
    Result,
};
use chrono::Utc;

use db::{get_conn, models::Question, PgPool};
use errors::Error;

pub async fn get_one(question_id: Path<i32>, pool: Data<PgPool>) -> Result<Json<Question>, Error> {
    let question_id = question_id.into_inner();
    let question = block(move || {
        let conn = get_conn(&pool)?;
        Question::find_published(&conn, question_id, Utc::now())
    })
    .await??;

    Ok(Json(question))
}
