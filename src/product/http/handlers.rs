//! Route handlers for the product API.

use super::{
    AppState,
    dto::{ProductPayload, ProductResponse, StockPayload},
    error::ApiError,
};
use crate::product::{
    domain::{ProductCategory, ProductId},
    ports::ProductRepository,
    services::ProductServiceError,
};
use axum::{
    Json,
    extract::{
        OriginalUri, Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use mockable::Clock;

type ApiResult<T> = Result<T, ApiError>;

/// `GET /api/products`
pub async fn list_products<R, C>(
    State(state): State<AppState<R, C>>,
    OriginalUri(uri): OriginalUri,
) -> ApiResult<Json<Vec<ProductResponse>>>
where
    R: ProductRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let products = state
        .service
        .list_all()
        .await
        .map_err(|err| state.reject(&err, uri.path()))?;
    Ok(Json(products.iter().map(ProductResponse::from).collect()))
}

/// `GET /api/products/{id}`
pub async fn get_product<R, C>(
    State(state): State<AppState<R, C>>,
    OriginalUri(uri): OriginalUri,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<ProductResponse>>
where
    R: ProductRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let product_id = state.product_id(id, uri.path())?;
    let product = state
        .service
        .find_by_id(product_id)
        .await
        .map_err(|err| state.reject(&err, uri.path()))?;
    Ok(Json(ProductResponse::from(&product)))
}

/// `GET /api/products/category/{category}`
pub async fn list_by_category<R, C>(
    State(state): State<AppState<R, C>>,
    OriginalUri(uri): OriginalUri,
    Path(raw_category): Path<String>,
) -> ApiResult<Json<Vec<ProductResponse>>>
where
    R: ProductRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let category = ProductCategory::try_from(raw_category.as_str())
        .map_err(|err| ApiError::validation(err.to_string(), uri.path(), &*state.clock))?;
    let products = state
        .service
        .list_by_category(category)
        .await
        .map_err(|err| state.reject(&err, uri.path()))?;
    Ok(Json(products.iter().map(ProductResponse::from).collect()))
}

/// `POST /api/products`
pub async fn create_product<R, C>(
    State(state): State<AppState<R, C>>,
    OriginalUri(uri): OriginalUri,
    body: Result<Json<ProductPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ProductResponse>)>
where
    R: ProductRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(payload) = state.body(body, uri.path())?;
    let request = payload
        .into_request()
        .map_err(|err| ApiError::validation(err.to_string(), uri.path(), &*state.clock))?;
    let product = state
        .service
        .create(request)
        .await
        .map_err(|err| state.reject(&err, uri.path()))?;
    Ok((StatusCode::CREATED, Json(ProductResponse::from(&product))))
}

/// `PUT /api/products/{id}`
pub async fn replace_product<R, C>(
    State(state): State<AppState<R, C>>,
    OriginalUri(uri): OriginalUri,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<ProductPayload>, JsonRejection>,
) -> ApiResult<Json<ProductResponse>>
where
    R: ProductRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let product_id = state.product_id(id, uri.path())?;
    let Json(payload) = state.body(body, uri.path())?;
    let request = payload
        .into_request()
        .map_err(|err| ApiError::validation(err.to_string(), uri.path(), &*state.clock))?;
    let product = state
        .service
        .update(product_id, request)
        .await
        .map_err(|err| state.reject(&err, uri.path()))?;
    Ok(Json(ProductResponse::from(&product)))
}

/// `PATCH /api/products/{id}/stock`
pub async fn update_stock<R, C>(
    State(state): State<AppState<R, C>>,
    OriginalUri(uri): OriginalUri,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<StockPayload>, JsonRejection>,
) -> ApiResult<Json<ProductResponse>>
where
    R: ProductRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let product_id = state.product_id(id, uri.path())?;
    let Json(payload) = state.body(body, uri.path())?;
    let stock = payload
        .into_stock()
        .map_err(|err| ApiError::validation(err.to_string(), uri.path(), &*state.clock))?;
    let product = state
        .service
        .update_stock(product_id, stock)
        .await
        .map_err(|err| state.reject(&err, uri.path()))?;
    Ok(Json(ProductResponse::from(&product)))
}

/// `DELETE /api/products/{id}`
pub async fn delete_product<R, C>(
    State(state): State<AppState<R, C>>,
    OriginalUri(uri): OriginalUri,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode>
where
    R: ProductRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let product_id = state.product_id(id, uri.path())?;
    state
        .service
        .delete(product_id)
        .await
        .map_err(|err| state.reject(&err, uri.path()))?;
    Ok(StatusCode::NO_CONTENT)
}

impl<R, C> AppState<R, C>
where
    R: ProductRepository,
    C: Clock + Send + Sync,
{
    fn reject(&self, err: &ProductServiceError, path: &str) -> ApiError {
        ApiError::from_service(err, path, &*self.clock)
    }

    fn product_id(
        &self,
        raw: Result<Path<i64>, PathRejection>,
        path: &str,
    ) -> ApiResult<ProductId> {
        let Path(value) = raw
            .map_err(|rejection| ApiError::validation(rejection.body_text(), path, &*self.clock))?;
        // Non-positive ids are never allocated, so they name a missing product.
        ProductId::new(value).map_err(|_| {
            ApiError::not_found(
                format!("product with id {value} not found"),
                path,
                &*self.clock,
            )
        })
    }

    fn body<T>(&self, raw: Result<Json<T>, JsonRejection>, path: &str) -> ApiResult<Json<T>> {
        raw.map_err(|rejection| ApiError::validation(rejection.body_text(), path, &*self.clock))
    }
}
