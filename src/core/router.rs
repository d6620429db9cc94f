//! 路由装配

use axum::{
    middleware,
    routing::get,
    Router,
};
use tower_http::services::ServeDir;

use super::middleware::request_logging_middleware;
use crate::app::{
    note::get_note,
    product::handler::{
        create_product, delete_product, get_product, list_products, update_product, AppState,
    },
};
use crate::infrastructure::config::StaticFilesConfig;

/// 构建完整的应用路由
pub fn build_router(state: AppState, static_files: &StaticFilesConfig) -> Router {
    Router::new()
        .route("/note.txt", get(get_note))
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .nest_service(
            &static_files.mount_path,
            ServeDir::new(&static_files.directory),
        )
        .layer(middleware::from_fn(request_logging_middleware))
        .with_state(state)
}
