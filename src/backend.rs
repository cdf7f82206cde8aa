use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::{
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    time::Instant,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::{
    clock::now_unix_millis,
    config::ServerConfig,
    logging::{log_event, LogLevel},
};

const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone)]
struct AppState {
    config: ServerConfig,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();
    let bind_address = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    log_event(
        config.log_level,
        LogLevel::Info,
        "server_listening",
        serde_json::json!({
            "address": bind_address,
            "dist_dir": config.dist_dir.display().to_string(),
        }),
    );

    axum::serve(listener, router(config)).await?;
    Ok(())
}

/// Serves the built site; unknown paths get `index.html` so client routes load.
fn router(config: ServerConfig) -> Router {
    let index = config.dist_dir.join("index.html");
    let static_service = ServeDir::new(&config.dist_dir).fallback(ServeFile::new(index));
    let state = AppState { config };

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(state.clone(), log_requests))
        .with_state(state)
}

async fn healthz() -> impl IntoResponse {
    Json(serde_json::json!({ "ok": true }))
}

async fn log_requests(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let started_at = Instant::now();
    let request_id = resolve_request_id(request.headers());
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    let status = response.status();
    let level = if status.is_server_error() {
        LogLevel::Warn
    } else {
        LogLevel::Info
    };
    log_event(
        state.config.log_level,
        level,
        "http_request",
        serde_json::json!({
            "request_id": request_id.as_str(),
            "method": method.as_str(),
            "path": path,
            "status": status.as_u16(),
            "duration_ms": started_at.elapsed().as_millis(),
        }),
    );

    response
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    let value = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    value.unwrap_or_else(generate_request_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, path::PathBuf};

    const INDEX_HTML: &str = "<!doctype html><div id=\"app\"></div>";

    fn dist_fixture(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("portfolio-dist-{}-{name}", std::process::id()));
        fs::create_dir_all(&dir).expect("create dist fixture");
        fs::write(dir.join("index.html"), INDEX_HTML).expect("write index");
        fs::write(dir.join("styles.css"), "body { margin: 0; }").expect("write stylesheet");
        dir
    }

    async fn spawn_server(dist_dir: PathBuf) -> String {
        let config = ServerConfig {
            port: 0,
            dist_dir,
            log_level: LogLevel::Warn,
        };
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let address = listener.local_addr().expect("local address");

        tokio::spawn(async move {
            let _ = axum::serve(listener, router(config)).await;
        });

        format!("http://{address}")
    }

    #[test]
    fn request_id_prefers_incoming_header() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("  abc-123 "));

        assert_eq!(resolve_request_id(&headers), "abc-123");
    }

    #[test]
    fn request_id_is_generated_when_missing_or_blank() {
        let mut headers = HeaderMap::new();
        let first = resolve_request_id(&headers);
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("   "));
        let second = resolve_request_id(&headers);

        assert!(first.starts_with("req-"));
        assert!(second.starts_with("req-"));
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn healthz_reports_ok_and_echoes_request_id() {
        let base = spawn_server(dist_fixture("healthz")).await;

        let response = reqwest::Client::new()
            .get(format!("{base}/healthz"))
            .header(REQUEST_ID_HEADER, "probe-1")
            .send()
            .await
            .expect("healthz request");

        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(
            response
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|value| value.to_str().ok()),
            Some("probe-1")
        );
        let body: serde_json::Value = response.json().await.expect("json body");
        assert_eq!(body["ok"], true);
    }

    #[tokio::test]
    async fn client_routes_fall_back_to_index() {
        let base = spawn_server(dist_fixture("fallback")).await;

        for path in ["/", "/blog/aws-cost-optimization", "/contact", "/does-not-exist"] {
            let response = reqwest::get(format!("{base}{path}")).await.expect("page request");

            assert_eq!(response.status().as_u16(), 200, "{path}");
            assert_eq!(response.text().await.expect("page body"), INDEX_HTML, "{path}");
        }
    }

    #[tokio::test]
    async fn static_assets_are_served_directly() {
        let base = spawn_server(dist_fixture("assets")).await;

        let response = reqwest::get(format!("{base}/styles.css")).await.expect("asset request");

        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(response.text().await.expect("asset body"), "body { margin: 0; }");
    }
}
