use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use ow_agent::AlertManager;
use ow_core::testing::{article, RecordingNotifier, RecordingSleeper, StaticSource};
use ow_core::{Article, HttpClientFactory};
use ow_notify::ThrottledSender;
use ow_web::{create_app, AppState};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

const SECRET: &str = "s3cr3t";

struct Harness {
    source: Arc<StaticSource>,
    notifier: Arc<RecordingNotifier>,
    app: Router,
}

fn harness(articles: Vec<Article>, notifier: RecordingNotifier, base_url: &str) -> Harness {
    let source = Arc::new(StaticSource::new(articles));
    let notifier = Arc::new(notifier);
    let sender = ThrottledSender::new(notifier.clone())
        .with_sleeper(Arc::new(RecordingSleeper::new()));
    let state = AppState {
        manager: AlertManager::new(source.clone(), sender),
        notifier: notifier.clone(),
        cron_secret: Some(SECRET.to_string()),
        base_url: base_url.to_string(),
        http: reqwest::Client::new(),
    };
    Harness {
        source,
        notifier,
        app: create_app(state),
    }
}

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn call(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn post(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn cron_request(token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri("/cron");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

fn hot(n: usize) -> Vec<Article> {
    (1..=n)
        .map(|i| article(&format!("Embargo update {}", i), None))
        .collect()
}

#[tokio::test]
async fn test_check_news_uses_demo_when_feed_empty() {
    let h = harness(vec![], RecordingNotifier::new(), "http://unused");
    let (status, body) = call(h.app, post("/check-news")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "newsCount": 0, "highIntensityCount": 1, "sent": true})
    );
    assert_eq!(h.notifier.sent().len(), 1);
}

#[tokio::test]
async fn test_check_news_without_matches() {
    let h = harness(
        vec![article("stock market rallies", Some("bond yields steady"))],
        RecordingNotifier::new(),
        "http://unused",
    );
    let (status, body) = call(h.app, post("/check-news")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "newsCount": 1, "highIntensityCount": 0, "sent": false})
    );
    assert_eq!(h.notifier.attempts(), 0);
}

#[tokio::test]
async fn test_check_news_send_failure_is_500() {
    let h = harness(hot(5), RecordingNotifier::failing_on(3), "http://unused");
    let (status, body) = call(h.app, post("/check-news")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].as_str().unwrap().starts_with("Delivery stopped after 2 alert(s)"));
    assert_eq!(h.notifier.sent().len(), 2);
    assert_eq!(h.notifier.attempts(), 3);
}

#[tokio::test]
async fn test_check_news_without_credentials_is_500() {
    let h = harness(hot(1), RecordingNotifier::unconfigured(), "http://unused");
    let (status, body) = call(h.app, post("/check-news")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"success": false, "error": "Telegram credentials not configured"})
    );
}

#[tokio::test]
async fn test_check_news_rejects_get() {
    let h = harness(vec![], RecordingNotifier::new(), "http://unused");
    let request = Request::builder().uri("/check-news").body(Body::empty()).unwrap();
    let response = h.app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_cron_wrong_token_never_runs_check() {
    let backend = harness(hot(1), RecordingNotifier::new(), "http://unused");
    let base_url = spawn(backend.app.clone()).await;
    let front = harness(vec![], RecordingNotifier::new(), &base_url);

    let (status, body) = call(front.app.clone(), cron_request(Some("guess"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"success": false, "error": "Unauthorized"}));

    let (status, _) = call(front.app, cron_request(None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    assert_eq!(backend.source.fetches(), 0);
    assert_eq!(front.source.fetches(), 0);
    assert_eq!(backend.notifier.attempts(), 0);
}

#[tokio::test]
async fn test_cron_without_configured_secret_is_disabled() {
    let source = Arc::new(StaticSource::empty());
    let notifier = Arc::new(RecordingNotifier::new());
    let state = AppState {
        manager: AlertManager::new(source.clone(), ThrottledSender::new(notifier.clone())),
        notifier,
        cron_secret: None,
        base_url: "http://unused".to_string(),
        http: reqwest::Client::new(),
    };
    let (status, _) = call(create_app(state), cron_request(Some("your-secret-key"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(source.fetches(), 0);
}

#[tokio::test]
async fn test_cron_relays_check_news_result() {
    let backend = harness(hot(2), RecordingNotifier::new(), "http://unused");
    let base_url = spawn(backend.app.clone()).await;
    let front = harness(vec![], RecordingNotifier::new(), &base_url);

    let (status, body) = call(front.app, cron_request(Some(SECRET))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(
        body["result"],
        json!({"success": true, "newsCount": 2, "highIntensityCount": 2, "sent": true})
    );
    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    assert_eq!(backend.source.fetches(), 1);
    assert_eq!(backend.notifier.sent().len(), 2);
    assert_eq!(front.source.fetches(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_cron_waits_for_slow_pass() {
    // Two alerts with 31 s between them: longer than any fixed request timeout.
    let source = Arc::new(StaticSource::new(hot(2)));
    let notifier = Arc::new(RecordingNotifier::new());
    let sender = ThrottledSender::new(notifier.clone()).with_delay(Duration::from_secs(31));
    let backend = AppState {
        manager: AlertManager::new(source.clone(), sender),
        notifier: notifier.clone(),
        cron_secret: None,
        base_url: "http://unused".to_string(),
        http: reqwest::Client::new(),
    };
    let base_url = spawn(create_app(backend)).await;

    let front_notifier = Arc::new(RecordingNotifier::new());
    let front = AppState {
        manager: AlertManager::new(
            Arc::new(StaticSource::empty()),
            ThrottledSender::new(front_notifier.clone()),
        ),
        notifier: front_notifier,
        cron_secret: Some(SECRET.to_string()),
        base_url,
        http: HttpClientFactory::create().unwrap(),
    };

    let (status, body) = call(create_app(front), cron_request(Some(SECRET))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["result"],
        json!({"success": true, "newsCount": 2, "highIntensityCount": 2, "sent": true})
    );
    assert_eq!(notifier.sent().len(), 2);
}

#[tokio::test]
async fn test_cron_relays_failed_check_verbatim() {
    let backend = harness(hot(3), RecordingNotifier::failing_on(1), "http://unused");
    let base_url = spawn(backend.app.clone()).await;
    let front = harness(vec![], RecordingNotifier::new(), &base_url);

    let (status, body) = call(front.app, cron_request(Some(SECRET))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["success"], json!(false));
    assert!(body["result"]["error"].is_string());
}

#[tokio::test]
async fn test_cron_transport_failure_is_500() {
    let front = harness(vec![], RecordingNotifier::new(), "http://127.0.0.1:9");
    let (status, body) = call(front.app, cron_request(Some(SECRET))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].as_str().unwrap().starts_with("HTTP error"));
}

#[tokio::test]
async fn test_telegram_test_not_configured_is_400() {
    let h = harness(vec![], RecordingNotifier::unconfigured(), "http://unused");
    let (status, body) = call(h.app, post("/test-telegram")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].as_str().unwrap().contains("TELEGRAM_CHAT_ID"));
}

#[tokio::test]
async fn test_telegram_test_success() {
    let h = harness(vec![], RecordingNotifier::new(), "http://unused");
    let (status, body) = call(h.app, post("/test-telegram")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "message": "Test message sent successfully!"}));
    assert!(h.notifier.sent()[0].contains("<b>Test Message</b>"));
}

#[tokio::test]
async fn test_telegram_test_failure_is_500_with_description() {
    let h = harness(vec![], RecordingNotifier::failing_on(1), "http://unused");
    let (status, body) = call(h.app, post("/test-telegram")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"success": false, "error": "Too Many Requests: retry after 1"})
    );
}

#[tokio::test]
async fn test_index_and_health() {
    let h = harness(vec![], RecordingNotifier::new(), "http://unused");

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = h.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Check News Now"));
    assert!(html.contains("/test-telegram"));

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = call(h.app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}
