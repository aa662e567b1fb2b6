//! Gemini backend tests against a local stub of the `generateContent` endpoint.

use std::net::TcpListener;

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::json;

use slidegen::config::GeminiConfig;
use slidegen::gateway::gemini::GeminiBackend;
use slidegen::gateway::{GenerationRequest, SlideBackend};

const API_KEY: &str = "test-key";

/// Serve `body` with `status` for every request carrying the expected API key.
fn stub(status: StatusCode, body: String) -> (String, ServerHandle) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub");
    let addr = listener.local_addr().expect("stub addr");

    let server = HttpServer::new(move || {
        let body = body.clone();
        App::new().default_service(web::to(move |req: HttpRequest| {
            let body = body.clone();
            async move {
                let key = req
                    .headers()
                    .get("x-goog-api-key")
                    .and_then(|v| v.to_str().ok());
                if key != Some(API_KEY) {
                    return HttpResponse::Unauthorized().body("missing api key");
                }
                if !req.path().ends_with(":generateContent") {
                    return HttpResponse::NotFound().finish();
                }
                HttpResponse::build(status)
                    .content_type("application/json")
                    .body(body)
            }
        }))
    })
    .workers(1)
    .listen(listener)
    .expect("listen stub")
    .run();

    let handle = server.handle();
    actix_rt::spawn(server);
    (format!("http://{addr}/v1beta"), handle)
}

fn backend(endpoint: &str, api_key: &str) -> GeminiBackend {
    GeminiBackend::new(GeminiConfig {
        api_key: api_key.to_string(),
        endpoint: endpoint.to_string(),
        timeout_secs: 5,
        ..Default::default()
    })
    .expect("client")
}

fn request() -> GenerationRequest {
    GenerationRequest {
        prompt: "hello".to_string(),
        schema: json!({"type": "ARRAY"}),
    }
}

#[actix_rt::test]
async fn test_success_returns_candidate_text() {
    let body = json!({"candidates": [{"content": {"parts": [{"text": "[[1],"}, {"text": "[2]]"}]}}]});
    let (endpoint, handle) = stub(StatusCode::OK, body.to_string());

    let text = backend(&endpoint, API_KEY).complete(&request()).await.expect("complete");
    assert_eq!(text, "[[1],[2]]");
    handle.stop(false).await;
}

#[actix_rt::test]
async fn test_non_success_status_uses_api_error_message() {
    let body = json!({"error": {"code": 429, "message": "quota exceeded"}});
    let (endpoint, handle) = stub(StatusCode::TOO_MANY_REQUESTS, body.to_string());

    let err = backend(&endpoint, API_KEY).complete(&request()).await.unwrap_err();
    assert_eq!(err.0, "HTTP 429 Too Many Requests: quota exceeded");
    handle.stop(false).await;
}

#[actix_rt::test]
async fn test_non_success_status_falls_back_to_raw_body() {
    let (endpoint, handle) = stub(StatusCode::SERVICE_UNAVAILABLE, "upstream down".to_string());

    let err = backend(&endpoint, API_KEY).complete(&request()).await.unwrap_err();
    assert_eq!(err.0, "HTTP 503 Service Unavailable: upstream down");
    handle.stop(false).await;
}

#[actix_rt::test]
async fn test_blocked_prompt_on_success_status_is_backend_error() {
    let body = json!({"promptFeedback": {"blockReason": "SAFETY"}});
    let (endpoint, handle) = stub(StatusCode::OK, body.to_string());

    let err = backend(&endpoint, API_KEY).complete(&request()).await.unwrap_err();
    assert!(err.0.contains("SAFETY"));
    handle.stop(false).await;
}

#[actix_rt::test]
async fn test_invalid_api_key_fails_before_sending() {
    let err = backend("http://127.0.0.1:9/v1beta", "bad\nkey")
        .complete(&request())
        .await
        .unwrap_err();
    assert_eq!(err.0, "API key contains invalid characters");
}
