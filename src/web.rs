use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::TravelAiConfig;
use crate::upstream::{HotelSearch, UpstreamClient};
use crate::{api, ui};

/// Largest accepted request body
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<dyn HotelSearch>,
}

impl AppState {
    pub fn new(search: Arc<dyn HotelSearch>) -> Self {
        Self { search }
    }
}

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api::router())
        .merge(ui::router())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub async fn run(config: &TravelAiConfig) -> Result<()> {
    let client = UpstreamClient::new(&config.upstream)?;
    info!("Relaying hotel searches to {}", client.endpoint());
    let app = app(AppState::new(Arc::new(client)));

    let addr = config.bind_address();

    if let (Some(cert), Some(key)) = (&config.server.tls_cert_path, &config.server.tls_key_path) {
        #[cfg(feature = "tls")]
        return tls::serve(app, &addr, cert, key).await;

        #[cfg(not(feature = "tls"))]
        warn!(
            cert = %cert.display(),
            key = %key.display(),
            "TLS paths configured but the `tls` feature is disabled, serving plain HTTP"
        );
    }

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Web server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server failed")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(feature = "tls")]
mod tls {
    use std::net::SocketAddr;
    use std::path::Path;
    use std::time::Duration;

    use anyhow::{Context, Result};
    use axum::Router;
    use axum_server::{Handle, tls_rustls::RustlsConfig};
    use tracing::info;

    pub(super) async fn serve(app: Router, addr: &str, cert: &Path, key: &Path) -> Result<()> {
        let addr: SocketAddr = addr
            .parse()
            .with_context(|| format!("TLS listener needs an IP address, got {addr}"))?;
        let tls = RustlsConfig::from_pem_file(cert, key)
            .await
            .with_context(|| format!("Failed to load TLS material from {}", cert.display()))?;

        let handle = Handle::new();
        tokio::spawn({
            let handle = handle.clone();
            async move {
                super::shutdown_signal().await;
                handle.graceful_shutdown(Some(Duration::from_secs(10)));
            }
        });

        info!("Web server running at https://{}", addr);
        axum_server::bind_rustls(addr, tls)
            .handle(handle)
            .serve(app.into_make_service())
            .await
            .context("Web server failed")?;

        info!("Server shut down");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{BEACH_TRIP, StubSearch};
    use axum::{
        body::Body,
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_relay_is_mounted_under_api() {
        let app = app(AppState::new(StubSearch::json(BEACH_TRIP)));
        let response = app
            .oneshot(
                Request::post("/api/v1/hotels")
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"prompt":"море"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], BEACH_TRIP.as_bytes());
    }

    #[tokio::test]
    async fn test_ui_is_mounted_at_root() {
        let app = app(AppState::new(StubSearch::json("[]")));
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            response
                .headers()
                .get(CONTENT_TYPE)
                .unwrap()
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected() {
        let stub = StubSearch::json("[]");
        let app = app(AppState::new(stub.clone()));
        let prompt = "a".repeat(MAX_BODY_BYTES + 1);
        let body = format!(r#"{{"prompt":"{prompt}"}}"#);

        let response = app
            .oneshot(
                Request::post("/api/v1/hotels")
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert!(stub.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let app = app(AppState::new(StubSearch::json("[]")));
        let response = app
            .oneshot(Request::get("/api/v1/unknown").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
