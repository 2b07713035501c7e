//! Webhook notifier against a local HTTP listener

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;

use fleetbook_domain::ChangeNotifier;
use fleetbook_infra::notify::DiscordWebhookNotifier;
use fleetbook_types::NotifyError;

type Captured = Arc<Mutex<Vec<Value>>>;

async fn capture(State(captured): State<Captured>, Json(body): Json<Value>) -> StatusCode {
    captured.lock().unwrap().push(body);
    StatusCode::NO_CONTENT
}

async fn reject() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn spawn_webhook(captured: Captured) -> SocketAddr {
    let app = Router::new()
        .route("/hook", post(capture))
        .route("/broken", post(reject))
        .with_state(captured);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve webhook");
    });
    addr
}

#[tokio::test]
async fn test_message_is_posted_as_content() {
    let captured = Captured::default();
    let addr = spawn_webhook(captured.clone()).await;

    let notifier = DiscordWebhookNotifier::new(format!("http://{}/hook", addr)).unwrap();
    notifier.notify("**Fleet Number:** 101").await.unwrap();

    let bodies = captured.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["content"], "**Fleet Number:** 101");
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let addr = spawn_webhook(Captured::default()).await;

    let notifier = DiscordWebhookNotifier::new(format!("http://{}/broken", addr)).unwrap();
    let err = notifier.notify("hello").await.unwrap_err();

    assert!(matches!(err, NotifyError::Status(500)));
}

#[tokio::test]
async fn test_unreachable_webhook_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let notifier = DiscordWebhookNotifier::new(format!("http://{}/hook", addr)).unwrap();
    let err = notifier.notify("hello").await.unwrap_err();

    assert!(matches!(err, NotifyError::Transport(_)));
    assert!(err.to_string().starts_with("Failed to send to Discord"));
}
