use axum::{body::Body, http::Request, http::StatusCode};
use tower::ServiceExt;

#[tokio::test]
async fn livez_healthy_and_match_requires_auth() {
    let state = hylios_api::test_state("test-key");
    let app = hylios_api::create_router(state);

    let livez_response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/livez")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(livez_response.status(), StatusCode::OK);

    let unauthorized = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/match")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"job":{"title":"Rust developer"},"candidate":{}}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(unauthorized.status(), StatusCode::UNAUTHORIZED);
}
