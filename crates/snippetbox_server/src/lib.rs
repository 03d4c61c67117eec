//! HTTP server wiring for Snippetbox (router, handlers, rendering, shared state).

/// HTTP error reporters.
pub mod error;
/// HTTP handlers for snippet pages.
pub mod handlers;
/// View models and HTML rendering.
pub mod render;

pub use error::HttpError;
pub use render::{HtmlRenderer, TemplateData, ViewRenderer};
pub use snippetbox_core::{
    config, models, AppError, Config, Database, Snippet, SnippetStore, DEFAULT_PORT,
};

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderName, HeaderValue},
    routing::get,
    Router,
};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

const CONTENT_SECURITY_POLICY: &str =
    "default-src 'self'; style-src 'self'; frame-ancestors 'none'; base-uri 'self'; form-action 'self'";

/// Shared, immutable state passed to every handler.
///
/// Built once at startup; handlers only read through it.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SnippetStore>,
    pub renderer: Arc<dyn ViewRenderer>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Construct state backed by `db` and the HTML renderer.
    ///
    /// The database's latest-snippet limit is taken from `config`.
    pub fn new(config: Config, db: Database) -> Self {
        let db = db.with_latest_limit(config.latest_limit);
        Self::with_collaborators(config, Arc::new(db), Arc::new(HtmlRenderer))
    }

    /// Construct state from explicit collaborators.
    pub fn with_collaborators(
        config: Config,
        store: Arc<dyn SnippetStore>,
        renderer: Arc<dyn ViewRenderer>,
    ) -> Self {
        Self {
            store,
            renderer,
            config: Arc::new(config),
        }
    }
}

/// Create the application router with all routes and middleware.
///
/// Unknown paths, and unsupported methods on known paths, answer 404.
pub fn create_app(state: AppState) -> Router {
    use handlers::{not_found, snippet};

    let max_form_size = state.config.max_form_size;

    Router::new()
        .route("/", get(snippet::home).fallback(not_found))
        .route(
            "/snippet/view/:id",
            get(snippet::snippet_view).fallback(not_found),
        )
        .route("/view/:id", get(snippet::snippet_view).fallback(not_found))
        .route(
            "/snippet/create",
            get(snippet::snippet_create_form)
                .post(snippet::snippet_create)
                .fallback(not_found),
        )
        .fallback(not_found)
        .with_state(state)
        .layer(
            tower::ServiceBuilder::new()
                .layer(DefaultBodyLimit::max(max_form_size))
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(SetResponseHeaderLayer::overriding(
                    header::CONTENT_SECURITY_POLICY,
                    HeaderValue::from_static(CONTENT_SECURITY_POLICY),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    header::REFERRER_POLICY,
                    HeaderValue::from_static("origin-when-cross-origin"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    header::X_FRAME_OPTIONS,
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("x-xss-protection"),
                    HeaderValue::from_static("0"),
                )),
        )
}

/// Resolve the listener address from env var overrides and security policy.
///
/// # Arguments
/// - `config`: Server configuration containing the configured `port`.
/// - `allow_public_access`: Whether non-loopback bind targets are permitted.
///
/// # Returns
/// A socket address that stays on loopback unless public access is enabled.
pub fn resolve_bind_address(config: &Config, allow_public_access: bool) -> SocketAddr {
    let default_bind = SocketAddr::from(([127, 0, 0, 1], config.port));
    let requested = match std::env::var("BIND") {
        Ok(value) => match value.trim().parse::<SocketAddr>() {
            Ok(addr) => addr,
            Err(err) => {
                tracing::warn!(
                    "Invalid BIND='{}': {}. Falling back to {}",
                    value,
                    err,
                    default_bind
                );
                default_bind
            }
        },
        Err(_) => default_bind,
    };

    if allow_public_access || requested.ip().is_loopback() {
        return requested;
    }

    tracing::warn!(
        "Non-loopback bind {} requested without ALLOW_PUBLIC_ACCESS; forcing 127.0.0.1",
        requested
    );
    SocketAddr::from(([127, 0, 0, 1], requested.port()))
}

/// Run the Axum server with graceful shutdown support.
///
/// # Errors
/// Returns any I/O error produced by `axum::serve`.
pub async fn serve_router(
    listener: tokio::net::TcpListener,
    state: AppState,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    let app = create_app(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
}
