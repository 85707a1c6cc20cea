//! HTTP transport for the MCP server
//!
//! Exposes the JSON-RPC facade over HTTP: one message per `POST /mcp`, an
//! event-stream endpoint on `GET /sse`, and a health check on `/` and
//! `/health`. Every other path answers 404 with a JSON body. A fresh
//! `McpServer` is constructed per inbound message, so no state is shared
//! between connections.

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use futures::stream::{self, Stream};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};

use crate::docs::DocRegistry;
use crate::error::Result;
use crate::mcp::server::McpServer;

/// Shared state for the HTTP handlers
#[derive(Clone)]
pub struct AppState {
    registry: Arc<DocRegistry>,
}

/// Build the application router.
pub fn router(registry: Arc<DocRegistry>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/mcp", post(handle_mcp))
        .route("/sse", get(handle_sse))
        .fallback(not_found)
        .layer(cors)
        .with_state(AppState { registry })
}

/// Bind the listener and serve until the process is stopped.
pub async fn serve(registry: Arc<DocRegistry>, port: u16) -> Result<()> {
    let app = router(registry);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "HTTP transport listening");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Health check payload for `/` and `/health`.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "endpoints": {
            "mcp": "/mcp",
            "sse": "/sse",
            "health": "/health",
        },
    }))
}

/// Handle one JSON-RPC message per request.
async fn handle_mcp(State(state): State<AppState>, body: String) -> Response {
    tracing::info!("inbound message on /mcp");

    let mut server = McpServer::new(state.registry.clone());
    match server.handle_message(&body) {
        Ok(Some(response)) => (StatusCode::OK, Json(response)).into_response(),
        // Notification, no response body
        Ok(None) => StatusCode::ACCEPTED.into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to handle message");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "jsonrpc": "2.0",
                    "id": null,
                    "error": {"code": -32603, "message": "Internal error"},
                })),
            )
                .into_response()
        }
    }
}

/// Open an event stream and point the client at the message endpoint.
async fn handle_sse() -> Sse<impl Stream<Item = std::result::Result<Event, Infallible>>> {
    tracing::info!("SSE connection opened");

    let endpoint =
        stream::once(async { Ok::<_, Infallible>(Event::default().event("endpoint").data("/mcp")) });

    Sse::new(endpoint).keep_alive(KeepAlive::default())
}

/// JSON 404 for any unrouted path.
async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"error": "Not found"})),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use crate::docs::default_documents;

    fn app() -> Router {
        router(Arc::new(DocRegistry::new(default_documents()).unwrap()))
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_ok_and_endpoints() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["endpoints"]["mcp"], "/mcp");
        assert!(json["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_root_serves_health() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_path_is_json_404() {
        let response = app()
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["error"], "Not found");
    }

    #[tokio::test]
    async fn test_mcp_post_answers_tools_list() {
        let request = Request::builder()
            .method("POST")
            .uri("/mcp")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#,
            ))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let tools = json["result"]["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 2);
    }

    #[tokio::test]
    async fn test_mcp_post_notification_is_accepted() {
        let request = Request::builder()
            .method("POST")
            .uri("/mcp")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"jsonrpc":"2.0","id":1,"method":"notifications/initialized"}"#,
            ))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::ACCEPTED);
    }
}
