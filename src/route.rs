use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use thiserror::Error;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{error, info};

use crate::{
    db::ProductionStore,
    error::StoreError,
    model::{
        api_request::WellQuery,
        api_response::{ErrorResponse, ProductionResponse},
    },
};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Well number is required")]
    MissingParameter,
    #[error("{0}")]
    InvalidQuery(String),
    #[error("No data found for API WELL NUMBER {0}")]
    NotFound(String),
    #[error("Internal Error")]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingParameter | Self::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(e) => {
                error!("Error executing production query: {e}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub fn router(store: ProductionStore, request_timeout: Duration) -> Router {
    Router::new()
        .route("/data", get(get_production))
        .fallback(handler_404)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    request_timeout,
                )),
        )
        .with_state(store)
}

pub async fn handler_404() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "")
}

pub async fn get_production(
    State(store): State<ProductionStore>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ProductionResponse>, ApiError> {
    let Query(pairs) = query.map_err(|rejection| ApiError::InvalidQuery(rejection.body_text()))?;
    let well = WellQuery::from_pairs(pairs)
        .well_number()
        .ok_or(ApiError::MissingParameter)?;
    info!(api_well_number = %well, "Received production query");

    match store.find_by_well_number(well.clone()).await? {
        Some(row) => Ok(Json(row.into())),
        None => Err(ApiError::NotFound(well)),
    }
}
