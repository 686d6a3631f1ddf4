//! Integration tests for failure logging.
//!
//! A capturing `tracing` layer records every error event so the tests can
//! check that each failure is logged exactly once and that credentials never
//! reach the log output.

use std::sync::{Arc, Mutex};

use serde_json::json;
use tracing_subscriber::layer::SubscriberExt;
use video_indexer::rest::resources::{Job, PromptContent, SupportedLanguages, VideoIndex};
use video_indexer::rest::{OptionalResource, Resource, ResourceRequest};
use video_indexer::{AccessToken, AccountId, BaseUrl, HttpClient, IndexerConfig, Location};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "eyJhbGciOi.secret-payload.sig";

/// Records the fields of every error-level event as one line.
#[derive(Clone, Default)]
struct ErrorCapture {
    events: Arc<Mutex<Vec<String>>>,
}

impl ErrorCapture {
    fn lines(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for ErrorCapture {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        if *event.metadata().level() == tracing::Level::ERROR {
            let mut visitor = FieldVisitor(String::new());
            event.record(&mut visitor);
            self.events.lock().unwrap().push(visitor.0);
        }
    }
}

struct FieldVisitor(String);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if !self.0.is_empty() {
            self.0.push(' ');
        }
        self.0.push_str(&format!("{}={value:?}", field.name()));
    }
}

fn client_for(server: &MockServer) -> HttpClient {
    let config = IndexerConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build();
    HttpClient::new(&config)
}

fn video_request<P>() -> ResourceRequest<P> {
    ResourceRequest::builder(Location::trial())
        .account(AccountId::new("abc123").unwrap())
        .resource_id("v1")
        .access_token(AccessToken::new(TOKEN).unwrap())
        .build()
}

#[tokio::test]
async fn test_http_failure_logged_once_with_masked_credential() {
    let capture = ErrorCapture::default();
    let _guard = tracing::subscriber::set_default(tracing_subscriber::registry().with(capture.clone()));

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trial/Accounts/abc123/Videos/v1/Index"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_string(format!(r#"{{"message":"token {TOKEN} expired"}}"#)),
        )
        .mount(&server)
        .await;

    let error = VideoIndex::get(&client_for(&server), &video_request())
        .await
        .unwrap_err();
    assert_eq!(error.status(), Some(401));

    let lines = capture.lines();
    assert_eq!(lines.len(), 1, "expected exactly one error event: {lines:?}");
    assert!(lines[0].contains("accessToken=***"));
    assert!(lines[0].contains("status=401"));
    assert!(lines[0].contains("http"));
    assert!(!lines[0].contains(TOKEN));
}

#[tokio::test]
async fn test_deserialization_failure_logged_once() {
    let capture = ErrorCapture::default();
    let _guard = tracing::subscriber::set_default(tracing_subscriber::registry().with(capture.clone()));

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    VideoIndex::get(&client_for(&server), &video_request())
        .await
        .unwrap_err();

    let lines = capture.lines();
    assert_eq!(lines.len(), 1, "expected exactly one error event: {lines:?}");
    assert!(lines[0].contains("deserialization"));
    assert!(lines[0].contains("accessToken=***"));
    assert!(!lines[0].contains(TOKEN));
}

#[tokio::test]
async fn test_transport_failure_logged_once() {
    let capture = ErrorCapture::default();
    let _guard = tracing::subscriber::set_default(tracing_subscriber::registry().with(capture.clone()));

    let config = IndexerConfig::builder()
        .base_url(BaseUrl::new("http://127.0.0.1:1").unwrap())
        .build();
    let client = HttpClient::new(&config);

    SupportedLanguages::get(&client, &video_request_for_location())
        .await
        .unwrap_err();

    let lines = capture.lines();
    assert_eq!(lines.len(), 1, "expected exactly one error event: {lines:?}");
    assert!(lines[0].contains("transport"));
    assert!(!lines[0].contains(TOKEN));
}

fn video_request_for_location() -> ResourceRequest {
    ResourceRequest::builder(Location::trial())
        .access_token(AccessToken::new(TOKEN).unwrap())
        .build()
}

#[tokio::test]
async fn test_success_logs_no_errors() {
    let capture = ErrorCapture::default();
    let _guard = tracing::subscriber::set_default(tracing_subscriber::registry().with(capture.clone()));

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    SupportedLanguages::get(&client_for(&server), &video_request_for_location())
        .await
        .unwrap();

    assert!(capture.lines().is_empty());
}

#[tokio::test]
async fn test_optional_absence_is_not_logged() {
    let capture = ErrorCapture::default();
    let _guard = tracing::subscriber::set_default(tracing_subscriber::registry().with(capture.clone()));

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let content = PromptContent::get_optional(&client_for(&server), &video_request())
        .await
        .unwrap();

    assert!(content.is_none());
    assert!(capture.lines().is_empty());
}

#[tokio::test]
async fn test_bearer_failure_log_has_no_credential_parameter() {
    let capture = ErrorCapture::default();
    let _guard = tracing::subscriber::set_default(tracing_subscriber::registry().with(capture.clone()));

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    Job::get(&client_for(&server), &video_request())
        .await
        .unwrap_err();

    let lines = capture.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("/Jobs/v1"));
    assert!(!lines[0].contains("accessToken"));
    assert!(!lines[0].contains(TOKEN));
}
