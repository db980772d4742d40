//! navcap REST API Server
//!
//! Run with: cargo run --features server --bin navcap-server -- --config navcap.toml
//!
//! Endpoints:
//!   GET  /health          - Status, version and definition fingerprint
//!   GET  /catalog         - Permission catalog
//!   POST /ability         - Actions allowed per subject
//!   POST /check           - Check one (action, subject)
//!   POST /menu            - Filtered menu tree
//!   POST /menu/outline    - Filtered menu as text

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequest, Request, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use clap::Parser;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use navcap::{outline, Action, CatalogEntry, MenuItem, NavConfig, Navigator, PermissionId, Subject};

// ============================================================================
// CLI
// ============================================================================

#[derive(Debug, Parser)]
#[command(name = "navcap-server", version, about = "Capability-gated navigation menus over HTTP")]
struct Args {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Listen address, overrides [server].bind
    #[arg(short, long)]
    bind: Option<String>,
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// `permission_ids: null` (or absent) means no session
#[derive(Debug, Deserialize)]
struct IdentityRequest {
    #[serde(default)]
    permission_ids: Option<Vec<PermissionId>>,
}

#[derive(Debug, Deserialize)]
struct CheckRequest {
    #[serde(default)]
    permission_ids: Option<Vec<PermissionId>>,
    action: Action,
    subject: Subject,
}

#[derive(Debug, Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: Option<T>,
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self { success: true, data: Some(data), error: None }
    }

    fn err(message: impl Into<String>) -> Self {
        Self { success: false, data: None, error: Some(message.into()) }
    }
}

type ApiError = (StatusCode, Json<ApiResponse<()>>);

/// JSON body whose rejections are answered in the `ApiResponse` envelope
struct ApiJson<T>(T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err((rejection.status(), Json(ApiResponse::err(rejection.body_text())))),
        }
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    definition: String,
}

#[derive(Debug, Serialize)]
struct CheckResponse {
    allowed: bool,
}

#[derive(Debug, Serialize)]
struct SubjectActions {
    subject: Subject,
    actions: Vec<Action>,
}

// ============================================================================
// Handlers
// ============================================================================

type AppState = Arc<Navigator>;

async fn health(State(nav): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        definition: nav.version().to_string(),
    }))
}

async fn catalog(State(nav): State<AppState>) -> Json<ApiResponse<Vec<CatalogEntry>>> {
    Json(ApiResponse::ok(nav.catalog().iter().collect()))
}

async fn ability(
    State(nav): State<AppState>,
    ApiJson(req): ApiJson<IdentityRequest>,
) -> Json<ApiResponse<Vec<SubjectActions>>> {
    let set = nav.ability(req.permission_ids.as_deref());
    let rows = Subject::CONCRETE
        .iter()
        .map(|s| SubjectActions { subject: *s, actions: set.actions_on(*s) })
        .filter(|r| !r.actions.is_empty())
        .collect();
    Json(ApiResponse::ok(rows))
}

async fn check(State(nav): State<AppState>, ApiJson(req): ApiJson<CheckRequest>) -> Json<ApiResponse<CheckResponse>> {
    let set = nav.ability(req.permission_ids.as_deref());
    Json(ApiResponse::ok(CheckResponse { allowed: set.can(req.action, req.subject) }))
}

async fn menu(State(nav): State<AppState>, ApiJson(req): ApiJson<IdentityRequest>) -> impl IntoResponse {
    let items: Vec<MenuItem> = nav.menu_for(req.permission_ids.as_deref());
    ([(header::ETAG, etag(&nav))], Json(ApiResponse::ok(items)))
}

async fn menu_outline(State(nav): State<AppState>, ApiJson(req): ApiJson<IdentityRequest>) -> impl IntoResponse {
    let text = outline(&nav.menu_for(req.permission_ids.as_deref()));
    (StatusCode::OK, [(header::ETAG, etag(&nav))], text)
}

fn etag(nav: &Navigator) -> String {
    format!("\"{}\"", nav.version())
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let cfg = match &args.config {
        Some(path) => match NavConfig::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!(error = %e, "failed to load config");
                std::process::exit(1);
            }
        },
        None => NavConfig::default(),
    };

    let nav = match Navigator::from_config(&cfg) {
        Ok(nav) => Arc::new(nav),
        Err(e) => {
            error!(error = %e, "failed to load navigation");
            std::process::exit(1);
        }
    };

    let app = Router::new()
        .route("/health", get(health))
        .route("/catalog", get(catalog))
        .route("/ability", post(ability))
        .route("/check", post(check))
        .route("/menu", post(menu))
        .route("/menu/outline", post(menu_outline))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(nav);

    let addr = args.bind.unwrap_or(cfg.server.bind);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            error!(%addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };
    info!(%addr, version = env!("CARGO_PKG_VERSION"), "navcap-server listening");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server stopped");
        std::process::exit(1);
    }
}
