use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::StatusCode,
    routing::get,
};
use serde_json::Value;
use std::sync::Arc;

use rajaongkir_proxy::{ShippingCostQuery, ShippingService};

use super::error::{ErrorDetail, IntoResponseError};

type ApiError = (StatusCode, Json<ErrorDetail>);
type ApiResult = Result<Json<Value>, ApiError>;

pub(super) fn router() -> Router<Arc<ShippingService>> {
    Router::new()
        .route("/shipping-cost/", get(calculate_shipping_cost))
        .route("/provinces/", get(list_provinces))
        .route("/cities/", get(list_all_cities))
        .route("/cities/{province_id}", get(list_cities))
        .route("/subdistricts/{city_id}", get(list_subdistricts))
}

/// Keep the extractor's status but wrap its message in the `detail` envelope
fn path_param(param: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    param.map(|Path(id)| id).map_err(|rejection| {
        tracing::debug!("Rejected path parameter: {}", rejection.body_text());
        (
            rejection.status(),
            Json(ErrorDetail {
                detail: rejection.body_text(),
            }),
        )
    })
}

fn query_params(
    query: Result<Query<ShippingCostQuery>, QueryRejection>,
) -> Result<ShippingCostQuery, ApiError> {
    query.map(|Query(q)| q).map_err(|rejection| {
        tracing::debug!("Rejected query string: {}", rejection.body_text());
        (
            rejection.status(),
            Json(ErrorDetail {
                detail: rejection.body_text(),
            }),
        )
    })
}

async fn calculate_shipping_cost(
    State(service): State<Arc<ShippingService>>,
    query: Result<Query<ShippingCostQuery>, QueryRejection>,
) -> ApiResult {
    let query = query_params(query)?;
    service
        .shipping_cost(&query)
        .await
        .map(Json)
        .into_response_error()
}

async fn list_provinces(State(service): State<Arc<ShippingService>>) -> ApiResult {
    service.provinces().await.map(Json).into_response_error()
}

async fn list_cities(
    State(service): State<Arc<ShippingService>>,
    province_id: Result<Path<i64>, PathRejection>,
) -> ApiResult {
    let province_id = path_param(province_id)?;
    service
        .cities_in_province(province_id)
        .await
        .map(Json)
        .into_response_error()
}

async fn list_all_cities(State(service): State<Arc<ShippingService>>) -> ApiResult {
    service.all_cities().await.map(Json).into_response_error()
}

async fn list_subdistricts(
    State(service): State<Arc<ShippingService>>,
    city_id: Result<Path<i64>, PathRejection>,
) -> ApiResult {
    let city_id = path_param(city_id)?;
    service
        .subdistricts(city_id)
        .await
        .map(Json)
        .into_response_error()
}
