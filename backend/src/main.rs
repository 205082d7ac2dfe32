use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
};
use governor::{RateLimiter, Quota, clock::DefaultClock, state::keyed::DefaultKeyedStateStore};
use tower_http::cors::{CorsLayer, AllowOrigin};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use std::sync::Arc;
use std::time::Duration;
mod handlers {
    pub mod meeting_dtos;
    pub mod meeting_handlers;
}
mod api {
    pub mod resend;
}
mod utils {
    pub mod email_templates;
    pub mod meeting_link;
}
mod config;
mod error;
use api::resend::{ConfirmationMailer, ResendMailer};
use config::AppConfig;
use handlers::meeting_handlers;

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    config: AppConfig,
    mailer: Arc<dyn ConfirmationMailer>,
    // keyed by lowercased email address
    meeting_limiter: RateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>,
}

impl AppState {
    pub fn new(config: AppConfig, mailer: Arc<dyn ConfirmationMailer>) -> Self {
        let quota = Quota::per_hour(config.meeting_requests_per_hour);
        Self {
            config,
            mailer,
            meeting_limiter: RateLimiter::keyed(quota),
        }
    }

    /// Drops limiter entries whose quota has fully refilled. Returns the
    /// number of addresses still tracked.
    pub fn prune_rate_limits(&self) -> usize {
        self.meeting_limiter.retain_recent();
        self.meeting_limiter.shrink_to_fit();
        self.meeting_limiter.len()
    }
}

const LIMITER_PRUNE_INTERVAL: Duration = Duration::from_secs(10 * 60);

pub fn app(state: Arc<AppState>) -> Router {
    // Public routes, no authentication. Meeting requests are ratelimited per email
    let public_routes = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/meeting-confirmation", post(meeting_handlers::send_meeting_confirmation));

    let mut app = Router::new().merge(public_routes);
    if let Some(static_dir) = &state.config.static_dir {
        // Client-side routes (/showcase, /one-page, ...) all load index.html
        let index = ServeFile::new(static_dir.join("index.html"));
        app = app.fallback_service(ServeDir::new(static_dir).fallback(index));
    }

    app.layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([axum::http::Method::GET, axum::http::Method::POST, axum::http::Method::OPTIONS])
                .allow_origin(AllowOrigin::exact(state.config.frontend_origin.clone()))
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::ACCEPT,
                    axum::http::header::ORIGIN,
                ])
        )
        .with_state(state)
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,framestate_backend=debug,tower_http=info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!("Invalid configuration: {}", e);
        e
    })?;

    let _sentry_guard = config.sentry_dsn.clone().map(|dsn| {
        sentry::init(sentry::ClientOptions {
            dsn: Some(dsn),
            release: sentry::release_name!(),
            ..Default::default()
        })
    });

    let mailer = ResendMailer::new(&config.resend_api_url, &config.resend_api_key)?;
    let port = config.port;
    if let Some(dir) = &config.static_dir {
        tracing::info!("Serving frontend from {}", dir.display());
    }
    let state = Arc::new(AppState::new(config, Arc::new(mailer)));

    let prune_state = state.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(LIMITER_PRUNE_INTERVAL);
        loop {
            interval.tick().await;
            let tracked = prune_state.prune_rate_limits();
            tracing::debug!("Pruned meeting limiter, {} addresses tracked", tracked);
        }
    });

    use tokio::net::TcpListener;
    tracing::info!("Starting server on port {}", port);
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    axum::serve(listener, app(state).into_make_service()).await?;
    Ok(())
}
