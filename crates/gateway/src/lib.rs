//! HTTP gateway for the Angstrom website.
//!
//! Exposes the chat endpoint used by the site's embedded widget, the page
//! content the frontend renders, and a health check.
//!
//! Built on Axum. All state is immutable after startup and shared through
//! one `Arc`; handlers never lock.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::rejection::JsonRejection;
use axum::extract::{DefaultBodyLimit, Path, Request, State};
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::{
    Router,
    response::Json,
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{Span, error, info, warn};

use angstrom_agent::{DispatchError, DispatchRequest, Dispatcher, Fallback};
use angstrom_config::{AppConfig, GatewayConfig};
use angstrom_content::{ContentError, ContentStore};
use angstrom_core::{Message, Mode};

/// Shared application state for the gateway.
pub struct GatewayState {
    pub dispatcher: Dispatcher,
    pub content: ContentStore,
    pub provider_name: String,
    pub model: String,
    pub started_at: DateTime<Utc>,
}

impl GatewayState {
    pub fn new(dispatcher: Dispatcher, content: ContentStore) -> Self {
        Self {
            provider_name: dispatcher.provider_name().to_string(),
            model: dispatcher.model().to_string(),
            dispatcher,
            content,
            started_at: Utc::now(),
        }
    }

    /// Build the provider, dispatcher and content store described by
    /// `config`. Each is built exactly once per process.
    pub fn from_config(config: &AppConfig) -> Result<Self, ContentError> {
        let provider = angstrom_providers::build_from_config(config);
        let content = ContentStore::load(&config.content.dir)?;
        Ok(Self::new(Dispatcher::from_config(provider, config), content))
    }
}

pub type SharedState = Arc<GatewayState>;

/// Build the Axum router with all gateway routes.
///
/// Layers applied:
/// - CORS restricted to `allowed_origins` (any origin when empty)
/// - Request body size limit (`max_body_bytes`)
/// - HTTP trace logging with a per-request id
pub fn build_router(state: SharedState, gateway: &GatewayConfig) -> Router {
    Router::new()
        .route("/api/chat", post(chat_handler))
        .route("/api/content", get(list_pages_handler))
        .route("/api/content/{page}", get(page_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(DefaultBodyLimit::max(gateway.max_body_bytes))
        .layer(cors_layer(&gateway.allowed_origins))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
}

/// Start the gateway HTTP server.
pub async fn start(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.bind_addr();
    let state = Arc::new(GatewayState::from_config(&config)?);

    info!(
        provider = %state.provider_name,
        model = %state.model,
        pages = state.content.len(),
        "Gateway state ready"
    );

    let app = build_router(state, &config.gateway);

    info!(addr = %addr, "Gateway starting");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    if origins.is_empty() {
        return cors.allow_origin(AllowOrigin::any());
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(allowed))
}

fn request_span(req: &Request) -> Span {
    tracing::info_span!(
        "http",
        request_id = %uuid::Uuid::new_v4(),
        method = %req.method(),
        path = %req.uri().path(),
    )
}

// --- Handlers ---

/// The widget's chat body.
///
/// Read leniently: `messages` may be missing or `null`, and a blank or
/// unrecognised `agent` leaves the conversation unpinned.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Option<Vec<Message>>,
    #[serde(default)]
    pub agent: Option<String>,
}

impl ChatRequest {
    /// The pinned mode, if the client sent a usable one.
    pub fn mode(&self) -> Option<Mode> {
        let agent = self.agent.as_deref()?.trim();
        if agent.is_empty() {
            return None;
        }
        match agent.parse() {
            Ok(mode) => Some(mode),
            Err(reason) => {
                warn!(%reason, "Ignoring agent, classifying instead");
                None
            }
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<Mode>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

async fn chat_handler(
    State(state): State<SharedState>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let raw = match body {
        Ok(Json(raw)) => raw,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            return Err(api_error(
                StatusCode::PAYLOAD_TOO_LARGE,
                "Request body too large",
            ));
        }
        Err(rejection) => return Ok(unreadable_body(&rejection.body_text())),
    };
    let payload: ChatRequest = match serde_json::from_value(raw) {
        Ok(payload) => payload,
        Err(e) => return Ok(unreadable_body(&e.to_string())),
    };

    let mode = payload.mode();
    let messages = payload.messages.unwrap_or_default();
    info!(turns = messages.len(), pinned = mode.is_some(), "Chat request");

    match state
        .dispatcher
        .respond(DispatchRequest::new(messages, mode))
        .await
    {
        Ok(reply) => Ok(Json(ChatResponse {
            response: reply.text,
            agent: reply.mode,
        })),
        Err(DispatchError::InvalidRequest(reason)) => {
            Err(api_error(StatusCode::BAD_REQUEST, reason))
        }
        Err(e) => {
            error!(error = %e, "Dispatch failed");
            Ok(Json(ChatResponse {
                response: Fallback::Unavailable.message().to_string(),
                agent: None,
            }))
        }
    }
}

/// The widget always parses the reply as JSON, so a body we cannot read
/// still gets the generic fallback.
fn unreadable_body(reason: &str) -> Json<ChatResponse> {
    warn!(%reason, "Unreadable chat request body");
    Json(ChatResponse {
        response: Fallback::Unavailable.message().to_string(),
        agent: None,
    })
}

#[derive(Debug, Serialize)]
struct PageList {
    pages: Vec<String>,
}

async fn list_pages_handler(State(state): State<SharedState>) -> Json<PageList> {
    Json(PageList {
        pages: state.content.pages().into_iter().map(String::from).collect(),
    })
}

async fn page_handler(
    State(state): State<SharedState>,
    Path(page): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state
        .content
        .get(&page)
        .cloned()
        .map(Json)
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, format!("Page not found: {page}")))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    provider: String,
    model: String,
    uptime_secs: u64,
}

async fn health_handler(State(state): State<SharedState>) -> Json<HealthResponse> {
    let uptime = (Utc::now() - state.started_at).num_seconds().max(0) as u64;
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        provider: state.provider_name.clone(),
        model: state.model.clone(),
        uptime_secs: uptime,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use angstrom_agent::instructions;
    use angstrom_core::error::ProviderError;
    use angstrom_core::provider::{Provider, ProviderRequest, ProviderResponse};
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use std::sync::Mutex;
    use tower::ServiceExt;

    /// Answers from a script and records every request.
    struct ScriptedProvider {
        script: Mutex<Vec<Result<String, ProviderError>>>,
        requests: Mutex<Vec<ProviderRequest>>,
    }

    impl ScriptedProvider {
        fn new(mut script: Vec<Result<String, ProviderError>>) -> Arc<Self> {
            script.reverse();
            Arc::new(Self {
                script: Mutex::new(script),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<ProviderRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl Provider for ScriptedProvider {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn complete(
            &self,
            request: ProviderRequest,
        ) -> Result<ProviderResponse, ProviderError> {
            let model = request.model.clone();
            self.requests.lock().unwrap().push(request);
            let next = self.script.lock().unwrap().pop().expect("script exhausted");
            next.map(|text| ProviderResponse {
                text,
                model,
                usage: None,
            })
        }
    }

    fn content() -> ContentStore {
        let mut store = ContentStore::new();
        store.insert(
            "homepage",
            serde_json::json!({"hero": {"title": "Precision Meets Innovation"}}),
        );
        store.insert("careers", serde_json::json!({"openings": []}));
        store
    }

    fn app_with(provider: Arc<ScriptedProvider>, gateway: &GatewayConfig) -> Router {
        let dispatcher = Dispatcher::new(provider, "test-model");
        build_router(Arc::new(GatewayState::new(dispatcher, content())), gateway)
    }

    fn app(provider: Arc<ScriptedProvider>) -> Router {
        app_with(provider, &GatewayConfig::default())
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_endpoint() {
        let response = app(ScriptedProvider::new(vec![]))
            .oneshot(get("/health"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["provider"], "scripted");
        assert_eq!(body["model"], "test-model");
        assert!(body["uptime_secs"].is_u64());
    }

    #[tokio::test]
    async fn chat_classifies_and_returns_mode() {
        let provider = ScriptedProvider::new(vec![
            Ok("recruitment".into()),
            Ok("Send your CV to careers@aatech.sg.".into()),
        ]);
        let response = app(provider.clone())
            .oneshot(post_json(
                "/api/chat",
                serde_json::json!({"messages": [{"role": "user", "content": "How do I apply?"}]}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["response"], "Send your CV to careers@aatech.sg.");
        assert_eq!(body["agent"], "recruitment");
        assert_eq!(provider.calls().len(), 2);
    }

    #[tokio::test]
    async fn chat_with_pinned_agent_skips_classification() {
        let provider = ScriptedProvider::new(vec![Ok("ALE removes one layer per cycle.".into())]);
        let response = app(provider.clone())
            .oneshot(post_json(
                "/api/chat",
                serde_json::json!({
                    "messages": [{"role": "user", "content": "What is ALE?"}],
                    "agent": "customer"
                }),
            ))
            .await
            .unwrap();

        let body = json_body(response).await;
        assert_eq!(body["agent"], "customer");
        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].instruction, instructions::CUSTOMER);
    }

    #[tokio::test]
    async fn empty_or_missing_messages_is_bad_request() {
        for body in [serde_json::json!({"messages": []}), serde_json::json!({})] {
            let provider = ScriptedProvider::new(vec![]);
            let response = app(provider.clone())
                .oneshot(post_json("/api/chat", body))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                json_body(response).await,
                serde_json::json!({"error": "No messages provided"})
            );
            assert!(provider.calls().is_empty());
        }
    }

    fn post_raw(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn is_json(response: &axum::response::Response) -> bool {
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("application/json"))
    }

    #[tokio::test]
    async fn malformed_body_gets_json_fallback() {
        for body in [
            "{not json",
            "null",
            r#"{"messages": "hello"}"#,
            r#"{"messages": [{"role": "robot", "content": "hi"}]}"#,
        ] {
            let provider = ScriptedProvider::new(vec![]);
            let response = app(provider.clone()).oneshot(post_raw(body)).await.unwrap();

            assert_eq!(response.status(), StatusCode::OK, "{body}");
            assert!(is_json(&response), "{body}");
            assert_eq!(
                json_body(response).await,
                serde_json::json!({"response": Fallback::Unavailable.message()})
            );
            assert!(provider.calls().is_empty());
        }
    }

    #[tokio::test]
    async fn missing_content_type_gets_json_fallback() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/chat")
            .body(Body::from(r#"{"messages": [{"role": "user", "content": "hi"}]}"#))
            .unwrap();
        let response = app(ScriptedProvider::new(vec![])).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(is_json(&response));
    }

    #[tokio::test]
    async fn null_messages_is_bad_request() {
        let provider = ScriptedProvider::new(vec![]);
        let response = app(provider.clone())
            .oneshot(post_raw(r#"{"messages": null, "agent": null}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(is_json(&response));
        assert_eq!(
            json_body(response).await,
            serde_json::json!({"error": "No messages provided"})
        );
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn blank_or_unknown_agent_is_classified() {
        for agent in ["", "  ", "sales"] {
            let provider = ScriptedProvider::new(vec![Ok("customer".into()), Ok("answer".into())]);
            let response = app(provider.clone())
                .oneshot(post_json(
                    "/api/chat",
                    serde_json::json!({
                        "messages": [{"role": "user", "content": "What is ALE?"}],
                        "agent": agent
                    }),
                ))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK, "{agent:?}");
            assert_eq!(json_body(response).await["agent"], "customer");
            let calls = provider.calls();
            assert_eq!(calls.len(), 2, "{agent:?}");
            assert_eq!(calls[0].instruction, instructions::CLASSIFICATION);
        }
    }

    #[tokio::test]
    async fn agent_value_is_case_insensitive() {
        let provider = ScriptedProvider::new(vec![Ok("answer".into())]);
        let response = app(provider.clone())
            .oneshot(post_json(
                "/api/chat",
                serde_json::json!({
                    "messages": [{"role": "user", "content": "Jobs?"}],
                    "agent": "Recruitment"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(json_body(response).await["agent"], "recruitment");
        assert_eq!(provider.calls().len(), 1);
    }

    #[tokio::test]
    async fn inference_failure_is_still_200_with_fallback() {
        let provider = ScriptedProvider::new(vec![Err(ProviderError::NotConfigured(
            "GEMINI_API_KEY is not configured".into(),
        ))]);
        let response = app(provider)
            .oneshot(post_json(
                "/api/chat",
                serde_json::json!({"messages": [{"role": "user", "content": "hi"}]}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(
            body["response"],
            angstrom_agent::Fallback::Configuration.message()
        );
        assert!(body.get("agent").is_none());
    }

    #[tokio::test]
    async fn oversized_body_is_rejected() {
        let gateway = GatewayConfig {
            max_body_bytes: 64,
            ..GatewayConfig::default()
        };
        let provider = ScriptedProvider::new(vec![]);
        let long = "x".repeat(256);
        let response = app_with(provider.clone(), &gateway)
            .oneshot(post_json(
                "/api/chat",
                serde_json::json!({"messages": [{"role": "user", "content": long}]}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert!(is_json(&response));
        assert_eq!(
            json_body(response).await,
            serde_json::json!({"error": "Request body too large"})
        );
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn content_routes() {
        let app = app(ScriptedProvider::new(vec![]));

        let list = json_body(app.clone().oneshot(get("/api/content")).await.unwrap()).await;
        assert_eq!(list, serde_json::json!({"pages": ["careers", "homepage"]}));

        let page = app.clone().oneshot(get("/api/content/homepage")).await.unwrap();
        assert_eq!(page.status(), StatusCode::OK);
        assert_eq!(
            json_body(page).await["hero"]["title"],
            "Precision Meets Innovation"
        );

        let missing = app.oneshot(get("/api/content/blog")).await.unwrap();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert!(json_body(missing).await["error"].as_str().unwrap().contains("blog"));
    }

    #[tokio::test]
    async fn cors_honors_allowed_origins() {
        let gateway = GatewayConfig {
            allowed_origins: vec!["https://aatech.sg".into()],
            ..GatewayConfig::default()
        };

        let request = |origin: &str| {
            Request::builder()
                .uri("/health")
                .header("origin", origin)
                .body(Body::empty())
                .unwrap()
        };

        let app = app_with(ScriptedProvider::new(vec![]), &gateway);
        let allowed = app.clone().oneshot(request("https://aatech.sg")).await.unwrap();
        assert_eq!(
            allowed.headers().get("access-control-allow-origin").unwrap(),
            "https://aatech.sg"
        );

        let other = app.oneshot(request("https://example.com")).await.unwrap();
        assert!(other.headers().get("access-control-allow-origin").is_none());
    }

    #[tokio::test]
    async fn empty_origin_list_allows_any() {
        let response = app(ScriptedProvider::new(vec![]))
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("origin", "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
    }
}
