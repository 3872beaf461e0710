pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::builder::handlers as builder;
use crate::screening::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Screening API
        .route(
            "/api/v1/jobs",
            post(handlers::handle_upload_jobs).get(handlers::handle_list_jobs),
        )
        .route(
            "/api/v1/resumes",
            post(handlers::handle_upload_resumes).get(handlers::handle_list_resumes),
        )
        .route("/api/v1/matches", get(handlers::handle_get_matches))
        .route("/api/v1/screen", post(handlers::handle_screen))
        // Resume builder
        .route("/api/v1/builder/export", post(builder::handle_export))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;

    const BOUNDARY: &str = "screener-test-boundary";

    fn router() -> (Router, AppState) {
        let state = AppState::new(Config::default());
        (build_router(state.clone()), state)
    }

    fn multipart_request(uri: &str, files: &[(&str, &str, &str)]) -> Request<Body> {
        let mut body = String::new();
        for (file_name, content_type, content) in files {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"files\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n{content}\r\n"
            ));
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));

        Request::post(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _) = router();
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["service"], "screener");
    }

    #[tokio::test]
    async fn test_matches_before_upload_is_conflict() {
        let (app, _) = router();
        let response = app
            .oneshot(Request::get("/api/v1/matches").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = json_body(response).await;
        assert_eq!(
            body["error"]["message"],
            "Please upload job descriptions and resumes first."
        );
    }

    #[tokio::test]
    async fn test_upload_then_match() {
        let (app, state) = router();

        let response = app
            .clone()
            .oneshot(multipart_request(
                "/api/v1/jobs",
                &[(
                    "backend.txt",
                    "text/plain",
                    "Python developer, 3-5 years experience, skills: python, sql",
                )],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["accepted"][0]["name"], "backend.txt");
        assert_eq!(body["accepted"][0]["experience_requirement"]["min_years"], 3);

        let response = app
            .clone()
            .oneshot(multipart_request(
                "/api/v1/resumes",
                &[
                    ("jane.txt", "text/plain", "Experience\nPython and SQL, 4 years of experience\nSkills\nPython"),
                    ("scan.png", "image/png", "binary"),
                ],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["accepted"].as_array().unwrap().len(), 1);
        assert_eq!(body["rejected"][0]["name"], "scan.png");
        assert_eq!(state.session.read().await.resumes.len(), 1);

        let response = app
            .clone()
            .oneshot(
                Request::get("/api/v1/matches?job=backend.txt&top_n=5")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["job_name"], "backend.txt");
        assert_eq!(body["results"][0]["resume_name"], "jane.txt");
        assert_eq!(body["results"][0]["skill_match_pct"], 100);

        let response = app
            .oneshot(
                Request::get("/api/v1/matches?job=missing.txt")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unreadable_batch_keeps_previous_collection() {
        let (app, state) = router();

        let response = app
            .clone()
            .oneshot(multipart_request(
                "/api/v1/resumes",
                &[("a.txt", "text/plain", "Python")],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(multipart_request(
                "/api/v1/resumes",
                &[("b.pdf", "application/pdf", "not a pdf")],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let session = state.session.read().await;
        assert_eq!(session.resumes.len(), 1);
        assert_eq!(session.resumes[0].name(), "a.txt");
    }

    #[tokio::test]
    async fn test_stateless_screen() {
        let (app, state) = router();
        let response = app
            .oneshot(json_request(
                "/api/v1/screen",
                json!({
                    "job": {"name": "job", "text": "Python and SQL, 2+ years"},
                    "resumes": [
                        {"name": "a", "text": "Barista"},
                        {"name": "b", "text": "Python SQL developer, 3 years of experience"}
                    ],
                    "top_n": 1
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["resumes_considered"], 2);
        assert_eq!(body["results"].as_array().unwrap().len(), 1);
        assert_eq!(body["results"][0]["resume_name"], "b");
        assert!(state.session.read().await.resumes.is_empty());
    }

    #[tokio::test]
    async fn test_stateless_screen_requires_job_text() {
        let (app, _) = router();
        let response = app
            .oneshot(json_request(
                "/api/v1/screen",
                json!({"job": {"name": "job", "text": "  "}, "resumes": []}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_builder_export_attachment() {
        let (app, _) = router();
        let response = app
            .oneshot(json_request(
                "/api/v1/builder/export",
                json!({
                    "name": "Jane Doe",
                    "email": "jane@example.com",
                    "phone": "555-0100",
                    "skills": "Python, SQL",
                    "template": "Elegant"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Jane_Doe_Resume.docx\""
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[tokio::test]
    async fn test_builder_export_requires_name() {
        let (app, _) = router();
        let response = app
            .oneshot(json_request("/api/v1/builder/export", json!({"email": "a@b.c"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
