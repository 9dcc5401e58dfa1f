use axum::Json;
use http::StatusCode;
use rajaongkir_proxy::UpstreamError;
use serde::{Deserialize, Serialize};

/// JSON error envelope returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

/// Helper trait for converting errors to a standard response error format
pub trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, Json<ErrorDetail>)>;
}

/// Every upstream failure is reported as 500; the upstream status code only
/// appears in the message.
impl<T> IntoResponseError<T> for Result<T, UpstreamError> {
    fn into_response_error(self) -> Result<T, (StatusCode, Json<ErrorDetail>)> {
        self.map_err(|e| {
            tracing::error!("Upstream error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDetail {
                    detail: e.to_string(),
                }),
            )
        })
    }
}
