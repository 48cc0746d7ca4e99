pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::coaching::handlers as coaching;
use crate::errors::AppError;
use crate::matching::handlers as matching;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching API
        .route("/api/v1/skills/normalize", post(matching::handle_normalize))
        .route("/api/v1/match", post(matching::handle_match))
        .route(
            "/api/v1/recommendations",
            post(matching::handle_recommendations),
        )
        // Coaching API
        .route(
            "/api/v1/interview/feedback",
            post(coaching::handle_interview_feedback),
        )
        .route("/api/v1/career/paths", post(coaching::handle_career_paths))
        .route("/api/v1/career/plan", post(coaching::handle_career_plan))
        .route(
            "/api/v1/resume/sections",
            post(coaching::handle_resume_sections),
        )
        .route("/api/v1/resume/html", post(coaching::handle_resume_html))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;

    fn router() -> Router {
        build_router(AppState::new(Config::default()))
    }

    async fn send(
        router: Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };
        let response = router.oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        send(router(), Method::POST, uri, Some(body)).await
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(router(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "luminate-api");
    }

    #[tokio::test]
    async fn test_unknown_route_uses_error_envelope() {
        let (status, body) = send(router(), Method::GET, "/api/v1/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_normalize() {
        let (status, body) = post_json(
            "/api/v1/skills/normalize",
            json!({"skills_text": " Python,, SQL "}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"skills": ["python", "sql"]}));

        let (_, body) = post_json("/api/v1/skills/normalize", json!({})).await;
        assert_eq!(body, json!({"skills": []}));
    }

    #[tokio::test]
    async fn test_match_score() {
        let (status, body) = post_json(
            "/api/v1/match",
            json!({"candidate_skills": ["python"], "required_skills": "Python, SQL, AWS"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"score": 33, "matching": ["python"], "missing": ["aws", "sql"]})
        );
    }

    #[tokio::test]
    async fn test_match_without_requirements() {
        let (_, body) = post_json("/api/v1/match", json!({"candidate_skills": ["python"]})).await;
        assert_eq!(body, json!({"score": 0, "matching": [], "missing": []}));
    }

    #[tokio::test]
    async fn test_recommendations_ranked_with_location_bonus() {
        let (status, body) = post_json(
            "/api/v1/recommendations",
            json!({
                "skills": "python, sql",
                "jobs": [
                    {"id": 1, "title": "Analyst", "company": "A", "location": "Austin", "required_skills": "sql, excel"},
                    {"id": 2, "title": "Engineer", "company": "B", "location": "Remote", "required_skills": "python, sql"},
                    {"id": 3, "title": "Designer", "company": "C", "location": "Remote", "required_skills": "figma"}
                ],
                "preferences": {"location": "remote"}
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let ranked = body.as_array().unwrap();
        let ids: Vec<i64> = ranked.iter().map(|r| r["job"]["id"].as_i64().unwrap()).collect();
        assert_eq!(ids, vec![2, 1, 3]);
        assert_eq!(ranked[0]["score"], 100);
        assert_eq!(ranked[1]["score"], 50);
        assert_eq!(ranked[1]["missing"], json!(["excel"]));
        assert_eq!(ranked[2]["score"], 5);
    }

    #[tokio::test]
    async fn test_recommendations_accept_null_job_fields() {
        let (status, body) = post_json(
            "/api/v1/recommendations",
            json!({
                "skills": "python",
                "jobs": [{"title": "t", "location": null, "required_skills": null}],
                "preferences": {"location": "remote"}
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["score"], 0);
        assert_eq!(body[0]["matching"], json!([]));
        assert_eq!(body[0]["missing"], json!([]));
    }

    #[tokio::test]
    async fn test_recommendations_reject_oversized_batches() {
        let config = Config {
            max_jobs_per_request: 1,
            ..Config::default()
        };
        let router = build_router(AppState::new(config));
        let job = json!({"title": "t", "location": "x", "required_skills": "rust"});
        let (status, body) = send(
            router,
            Method::POST,
            "/api/v1/recommendations",
            Some(json!({"skills": "rust", "jobs": [job.clone(), job]})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_interview_feedback_empty_answer() {
        let (status, body) = post_json(
            "/api/v1/interview/feedback",
            json!({"answer": "", "keywords": ["rust"]}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 0);
        assert_eq!(body["suggestions"], json!(["Provide a complete answer."]));
    }

    #[tokio::test]
    async fn test_interview_feedback_null_answer() {
        let (status, body) = post_json(
            "/api/v1/interview/feedback",
            json!({"answer": null, "keywords": ["rust"]}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 0);
        assert_eq!(body["suggestions"], json!(["Provide a complete answer."]));
    }

    #[tokio::test]
    async fn test_interview_feedback_keywords_from_skills() {
        let (_, body) = post_json(
            "/api/v1/interview/feedback",
            json!({"answer": "I use Python and SQL daily.", "skills": "Python, SQL, Go"}),
        )
        .await;
        assert_eq!(body["relevance"], 40);
    }

    #[tokio::test]
    async fn test_career_paths() {
        let (_, body) = post_json(
            "/api/v1/career/paths",
            json!({"skills": ["Python", "SQL"], "years_experience": 1}),
        )
        .await;
        assert_eq!(body[0]["role"], "Data Engineer");
        assert_eq!(body[0]["probability"], 65);
    }

    #[tokio::test]
    async fn test_career_paths_negative_experience() {
        let (status, body) = post_json(
            "/api/v1/career/paths",
            json!({"skills": ["python", "sql"], "years_experience": -1}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["role"], "Data Engineer");
        assert_eq!(body[0]["probability"], 55);
    }

    #[tokio::test]
    async fn test_career_plan() {
        let (_, body) = post_json("/api/v1/career/plan", json!({"skills": []})).await;
        assert_eq!(body["paths"][0]["role"], "Generalist Contributor");
        assert_eq!(body["upskilling"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_resume_sections_and_html() {
        let profile = json!({
            "name": "Grace",
            "title": "Engineer",
            "location": "Arlington",
            "skills": ["cobol"]
        });
        let (_, body) = post_json("/api/v1/resume/sections", profile.clone()).await;
        assert_eq!(
            body["summary"],
            "Grace is a Engineer based in Arlington with strengths in cobol"
        );
        assert_eq!(body["header"]["contact"]["location"], "Arlington");

        let (_, body) = post_json(
            "/api/v1/resume/html",
            json!({"profile": profile, "template": "Modern"}),
        )
        .await;
        assert_eq!(body["template"], "modern");
        assert!(body["html"]
            .as_str()
            .unwrap()
            .starts_with("<div class='resume resume-modern'>"));
    }
}
