//! HTTP 接口层
//!
//! - `GET /` 存活检查
//! - `POST /generate-sets` 生成多套试卷，返回 zip
//! - `OPTIONS /generate-sets` 预检

pub mod handlers;
pub mod payload;

use crate::config::Config;
use crate::orchestrator::{ArchiveBuilder, SetGenerator};
use axum::extract::DefaultBodyLimit;
use axum::http::Method;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use payload::{GenerateRequest, ValidatedRequest};

/// 请求间共享的只读状态
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub generator: Arc<SetGenerator>,
    pub archive: Arc<ArchiveBuilder>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            generator: Arc::new(SetGenerator::new(config.verbose_logging)),
            archive: Arc::new(ArchiveBuilder::new(&config)),
            config: Arc::new(config),
        }
    }
}

/// 构建路由
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::home))
        .route(
            "/generate-sets",
            post(handlers::generate_sets).options(handlers::preflight),
        )
        .layer(DefaultBodyLimit::max(state.config.max_payload_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
