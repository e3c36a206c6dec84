use axum::{
    extract::{DefaultBodyLimit, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::catalog::store::{SkillCatalog, SkillStore};
use crate::cli::ServeArgs;
use crate::core::listing::{ListingFeatures, RawListing};
use crate::core::profile::{ProfileFeatures, RawProfile};
use crate::core::signals::{QualitySignals, RawQualitySignals};
use crate::matching::engine::MatchScorer;
use crate::quality::scorer::QualityReport;
use crate::resolver::engine::SkillResolver;
use crate::utils::validation::validate_labels;

/// Request body cap. Scoring payloads are small JSON documents; anything
/// bigger is abuse.
pub const MAX_BODY_SIZE: usize = 256 * 1024;

/// Request timeout for any single scoring call
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Shared application state
pub struct AppState {
    pub catalog: SkillCatalog,
}

/// Enhanced error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
    pub details: Option<String>,
}

/// Create a safe error response that prevents information disclosure
/// while logging detailed errors server-side for debugging
pub fn create_safe_error_response(
    error_type: &str,
    user_message: &str,
    internal_error: Option<&str>,
) -> ErrorResponse {
    // Log detailed error server-side for debugging (not exposed to client)
    if let Some(internal_msg) = internal_error {
        tracing::error!("Internal error ({}): {}", error_type, internal_msg);
    }

    ErrorResponse {
        error: user_message.to_string(),
        error_type: error_type.to_string(),
        details: None, // Never expose internal details to prevent information disclosure
    }
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created or the server fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    // Build tokio runtime
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Create the application router with all routes and middleware configured.
///
/// Authentication is an upstream collaborator concern; this service
/// assumes a trusted perimeter and only guards against abusive traffic.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
#[allow(clippy::missing_panics_doc)] // Panics only on invalid governor config (constants are valid)
pub fn create_router() -> anyhow::Result<Router> {
    // Load catalog
    let catalog = SkillCatalog::load_embedded()?;
    let state = Arc::new(AppState { catalog });

    // Configure IP-based rate limiting
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(10) // 10 requests per second per IP
        .burst_size(50) // Allow bursts of 50 requests
        .finish()
        .unwrap();

    // Build router with comprehensive security layers
    let app = Router::new()
        .route("/api/skills/resolve", post(resolve_handler))
        .route("/api/match/score", post(score_handler))
        .route("/api/quality/audit", post(audit_handler))
        .route("/api/catalog", get(catalog_handler))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                // Security headers for browser protection
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("strict-transport-security"),
                    HeaderValue::from_static("max-age=31536000; includeSubDomains"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("referrer-policy"),
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                ))
                // IP-based rate limiting to prevent abuse
                .layer(GovernorLayer {
                    config: Arc::new(governor_conf),
                })
                // Request timeout to prevent slow client attacks
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    Duration::from_secs(REQUEST_TIMEOUT_SECS),
                ))
                // Limit concurrent requests to prevent DOS
                .layer(ConcurrencyLimitLayer::new(100))
                // Limit request body size
                .layer(DefaultBodyLimit::max(MAX_BODY_SIZE)),
        );

    Ok(app)
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let app = create_router()?;

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting match-engine API server at http://{addr}");

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Resolution request body. Entries are accepted as arbitrary JSON so
/// that non-string values can be dropped instead of failing the request.
#[derive(Deserialize)]
struct ResolveRequest {
    #[serde(default)]
    skills: Vec<serde_json::Value>,
}

/// API endpoint for resolving free-text skill labels to catalog ids
async fn resolve_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ResolveRequest>,
) -> Response {
    run_resolution(&state.catalog, &request.skills).await
}

/// Shared by the handler and its tests, which substitute the store.
async fn run_resolution<S: SkillStore + ?Sized>(
    store: &S,
    entries: &[serde_json::Value],
) -> Response {
    // Non-string entries are dropped before processing
    let labels: Vec<String> = entries
        .iter()
        .filter_map(|entry| entry.as_str().map(str::to_string))
        .collect();

    let labels = match validate_labels(&labels) {
        Ok(labels) => labels,
        Err(err) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(create_safe_error_response(
                    "invalid_input",
                    "Skill list exceeds request limits",
                    Some(&err.to_string()),
                )),
            )
                .into_response();
        }
    };

    let resolver = SkillResolver::new(store);
    match resolver.resolve(&labels).await {
        Ok(resolution) => Json(resolution).into_response(),
        // A lookup outage must not be reported as "all unknown"
        Err(err) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(create_safe_error_response(
                "resolution_unavailable",
                "Skill resolution is temporarily unavailable",
                Some(&err.to_string()),
            )),
        )
            .into_response(),
    }
}

/// Scoring request body: one listing/profile pair
#[derive(Deserialize)]
struct ScoreRequest {
    #[serde(default)]
    listing: RawListing,
    #[serde(default)]
    profile: RawProfile,
}

/// API endpoint for scoring a listing against a candidate profile
async fn score_handler(Json(request): Json<ScoreRequest>) -> Json<serde_json::Value> {
    let listing = ListingFeatures::from_raw(request.listing);
    let profile = ProfileFeatures::from_raw(request.profile);

    let result = MatchScorer::new().score(&listing, &profile);

    // Persisted shape plus the presentation-only band
    Json(serde_json::json!({
        "match_score": result.score,
        "match_reasons": result.reasons,
        "match_gaps": result.gaps,
        "matching_version": result.version,
        "band": result.band(),
    }))
}

/// API endpoint for auditing a listing's trust signals
async fn audit_handler(Json(raw): Json<RawQualitySignals>) -> Json<QualityReport> {
    let signals = QualitySignals::from_raw(raw);
    Json(QualityReport::audit(&signals))
}

/// Return list of skills in catalog
async fn catalog_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let skills: Vec<serde_json::Value> = state
        .catalog
        .skills
        .iter()
        .map(|s| {
            serde_json::json!({
                "id": s.id.0,
                "slug": s.slug,
                "name": s.name,
                "alias_count": s.aliases.len(),
            })
        })
        .collect();

    Json(serde_json::json!({
        "count": skills.len(),
        "skills": skills,
    }))
}
