pub mod routes;
pub mod types;
pub mod websocket;

use std::sync::Arc;

use actix_web::web;

use crate::config::ViewerConfig;
use crate::source::OrderSource;

/// Shared by every worker: where orders come from and how to page them.
pub struct AppState {
    pub source: Arc<dyn OrderSource>,
    pub config: ViewerConfig,
}

impl AppState {
    pub fn new(source: Arc<dyn OrderSource>, config: ViewerConfig) -> Self {
        Self { source, config }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(routes::index)
        .service(routes::snapshot)
        .service(routes::health_check)
        .route("/ws", web::get().to(websocket::ws_index));
}
