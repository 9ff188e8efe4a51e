//! # classbook: student and class-enrollment records over PostgreSQL
//!
//! `classbook` keeps two kinds of records: students (name, grade, creation time) and the
//! classes each student is enrolled in. It exposes them through a small JSON HTTP API and a
//! pair of repository traits that the HTTP layer is written against.
//!
//! ## Architecture
//!
//! The application is built on [Axum](https://github.com/tokio-rs/axum) for the HTTP layer and
//! uses PostgreSQL, through SQLx, for persistence.
//!
//! - The **API layer** ([`api`]) validates request bodies, runs one repository operation per
//!   request and shapes the response. It is the only place where an empty class list turns
//!   into a 404.
//! - The **database layer** ([`db`]) holds the repositories. Every repository operation is a
//!   single SQL statement on a pooled connection; there are no transactions, no caches and no
//!   retries. Driver errors are translated in exactly one place, [`db::errors`].
//! - **Configuration** ([`config`]) is layered YAML and environment variables via `figment`.
//! - **Telemetry** ([`telemetry`]) is `tracing` with optional OTLP export.
//!
//! ## Lifecycle
//!
//! [`Application::new`] connects the pool and applies pending migrations. [`Application::serve`]
//! serves until the shutdown future resolves, then cancels in-flight repository calls, reverts
//! the migrations when `database.revert_migrations_on_shutdown` is set, and closes the pool.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use classbook::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = classbook::config::Args::parse();
//!     let config = Config::load(&args)?;
//!
//!     classbook::telemetry::init_telemetry(config.enable_otel_export)?;
//!
//!     let app = Application::new(config).await?;
//!     app.serve(async {
//!         let _ = tokio::signal::ctrl_c().await;
//!     })
//!     .await
//! }
//! ```
pub mod api;
pub mod config;
pub mod db;
pub mod errors;
mod openapi;
pub mod telemetry;
pub mod types;

#[cfg(test)]
pub mod test_utils;

use axum::{
    Router,
    routing::{get, post},
};
use bon::Builder;
pub use config::Config;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, debug, info, instrument, warn};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::openapi::ApiDoc;

pub use types::{ClassInfoId, StudentId};

/// Application state shared across all request handlers.
///
/// - `db`: PostgreSQL connection pool
/// - `config`: Application configuration loaded from file and environment
/// - `shutdown`: Cancelled when the server begins shutting down. Handlers hand a child token to
///   each repository so outstanding statements are abandoned.
///
/// # Example
///
/// ```ignore
/// let state = AppState::builder().db(pool).config(config).build();
/// ```
#[derive(Clone, Builder)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    #[builder(default)]
    pub shutdown: CancellationToken,
}

/// Get the classbook database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

/// Build the application router with all endpoints and middleware.
///
/// Routes:
/// - `GET /`: welcome text
/// - `POST|PUT /student`, `GET|DELETE /student/{student_id}`
/// - `POST|PUT /class_info`, `GET|DELETE /class_info/{student_id}`
/// - `/docs`: Scalar-rendered OpenAPI documentation
#[instrument(skip_all)]
pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/", get(api::handlers::welcome::welcome))
        .route(
            "/student",
            post(api::handlers::students::create_student).put(api::handlers::students::update_student),
        )
        .route(
            "/student/{student_id}",
            get(api::handlers::students::get_student).delete(api::handlers::students::delete_student),
        )
        .route(
            "/class_info",
            post(api::handlers::class_info::create_class_info).put(api::handlers::class_info::update_class_info),
        )
        .route(
            "/class_info/{student_id}",
            get(api::handlers::class_info::get_class_info).delete(api::handlers::class_info::delete_class_info),
        )
        .with_state(state)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    router.layer(CorsLayer::permissive()).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
}

/// Main application struct that owns the router, the pool and the shutdown token.
///
/// # Lifecycle
///
/// 1. **Create**: [`Application::new`] connects to the database and runs migrations
/// 2. **Serve**: [`Application::serve`] binds to a TCP port and starts handling requests
/// 3. **Shutdown**: When the shutdown future resolves, in-flight database calls are cancelled,
///    migrations are optionally reverted and the pool is closed
pub struct Application {
    router: Router,
    config: Config,
    pool: PgPool,
    shutdown: CancellationToken,
}

impl Application {
    /// Connect to the configured database and build the application
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        debug!("Starting classbook with configuration: {:#?}", config);

        let pool = db::pool::connect(&config.database).await?;
        Self::new_with_pool(config, pool).await
    }

    /// Build the application on an existing pool, applying pending migrations first
    pub async fn new_with_pool(config: Config, pool: PgPool) -> anyhow::Result<Self> {
        migrator().run(&pool).await?;
        info!("Database migrations applied");

        let shutdown = CancellationToken::new();
        let state = AppState::builder()
            .db(pool.clone())
            .config(config.clone())
            .shutdown(shutdown.clone())
            .build();

        Ok(Self {
            router: build_router(state),
            config,
            pool,
            shutdown,
        })
    }

    /// Convert application into a test server (for tests)
    #[cfg(test)]
    pub fn into_test_server(self) -> axum_test::TestServer {
        axum_test::TestServer::new(self.router).expect("Failed to create test server")
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!(
            "classbook listening on http://{}, available at http://localhost:{}",
            bind_addr, self.config.port
        );

        let token = self.shutdown.clone();
        let served = axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                shutdown.await;
                // Abandon database work still in flight so draining connections finishes promptly
                token.cancel();
            })
            .await;

        if let Err(e) = &served {
            warn!("Server stopped with error: {}", e);
        }

        if self.config.database.revert_migrations_on_shutdown {
            info!("Reverting database migrations...");
            if let Err(e) = migrator().undo(&self.pool, 0).await {
                warn!("Failed to revert migrations: {}", e);
            }
        }

        info!("Closing database connections...");
        self.pool.close().await;

        info!("Shutting down telemetry...");
        telemetry::shutdown_telemetry();

        served?;
        Ok(())
    }
}
