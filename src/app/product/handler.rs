//! 产品处理器

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use super::{
    model::{parse_id, Product, ProductFields},
    service::ProductStore,
};
use crate::core::{error::CoreError, response::MessageResponse};

#[derive(Clone)]
pub struct AppState {
    pub store: ProductStore,
}

/// 缺失、格式错误或非对象的请求体都按空字段处理
fn body_fields(body: Option<Json<ProductFields>>) -> ProductFields {
    body.map(|Json(fields)| fields).unwrap_or_default()
}

pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.store.list())
}

pub async fn create_product(
    State(state): State<AppState>,
    body: Option<Json<ProductFields>>,
) -> Json<Product> {
    Json(state.store.create(body_fields(body)))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, CoreError> {
    let product = state.store.get(parse_id(&id)).map_err(CoreError::plain)?;
    Ok(Json(product))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<ProductFields>>,
) -> Result<Json<MessageResponse>, CoreError> {
    state.store.update(parse_id(&id), body_fields(body))?;
    Ok(Json(MessageResponse::new("Product update successfully")))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, CoreError> {
    state.store.delete(parse_id(&id))?;
    Ok(StatusCode::NO_CONTENT)
}
