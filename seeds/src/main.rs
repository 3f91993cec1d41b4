#[macro_use]
extern crate log;

use chrono::{Duration, Utc};
use dotenv::dotenv;

use db::{get_conn, models::Question, new_pool};
use errors::Error;

fn main() -> Result<(), Error> {
    dotenv().ok();
    env_logger::init();

    let pool = new_pool();
    let conn = get_conn(&pool)?;
    let now = Utc::now();

    for (question_text, offset) in &[
        ("What's new?", Duration::hours(2)),
        ("What's your favourite editor?", Duration::days(3)),
        ("Tabs or spaces?", Duration::days(30)),
        ("Who will win the next election?", -Duration::days(7)),
    ] {
        let question = Question::create(&conn, question_text.to_string(), now - *offset)?;
        info!("Created question {} - {}", question.id, question);
    }

    Ok(())
}
