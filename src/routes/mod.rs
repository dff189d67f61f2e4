use std::sync::Arc;

use axum::{Extension, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::posts::posts_handler;
use crate::AppState;

pub fn create_routes(app_state: Arc<AppState>) -> Router {
    Router::new()
        .merge(posts_handler())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(app_state))
}
