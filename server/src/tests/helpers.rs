#[cfg(test)]
pub mod tests {
    use actix_web::{
        middleware::NormalizePath,
        test,
        web::{self, Data},
        App,
    };
    use chrono::{Duration, Utc};
    use serde::de::DeserializeOwned;

    use db::{models::Question, PgConnection, PgPool};

    use crate::not_found;
    use crate::routes::routes;

    /// Creates a question published `days` away from now. Negative offsets are
    /// in the past, positive ones have yet to be published.
    pub fn create_question(conn: &PgConnection, question_text: &str, days: i64) -> Question {
        Question::create(
            conn,
            question_text.to_string(),
            Utc::now() + Duration::days(days),
        )
        .unwrap()
    }

    async fn call_get(route: &str, pool: PgPool) -> (u16, Vec<u8>) {
        let app = test::init_service(
            App::new()
                .wrap(NormalizePath::trim())
                .app_data(Data::new(pool))
                .configure(routes)
                .default_service(web::route().to(not_found)),
        )
        .await;
        let req = test::TestRequest::get().uri(route).to_request();

        let res = test::call_service(&app, req).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;

        (status, body.to_vec())
    }

    /// Helper for HTTP GET integration tests against JSON routes
    pub async fn test_get<R>(route: &str, pool: PgPool) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let (status, body) = call_get(route, pool).await;
        let json_body = serde_json::from_slice(&body).unwrap_or_else(|_| {
            panic!(
                "read_response_json failed during deserialization. response: {} status: {}",
                String::from_utf8(body)
                    .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string()),
                status
            )
        });

        (status, json_body)
    }

    /// Helper for HTTP GET integration tests against HTML pages
    pub async fn test_get_html(route: &str, pool: PgPool) -> (u16, String) {
        let (status, body) = call_get(route, pool).await;
        let html = String::from_utf8(body).expect("response body was not utf-8");

        (status, html)
    }
}
