use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use tracing::warn;

use super::domain::CompatibilityReport;
use super::evaluation::AshtaKootaEngine;
use super::validation::CompatibilityRequest;
use crate::error::AppError;

/// Router exposing the compatibility calculation over HTTP.
pub fn compatibility_router(engine: Arc<AshtaKootaEngine>) -> Router {
    Router::new()
        .route("/calculate-compatibility", post(compatibility_handler))
        .with_state(engine)
}

pub(crate) async fn compatibility_handler(
    State(engine): State<Arc<AshtaKootaEngine>>,
    Json(request): Json<CompatibilityRequest>,
) -> Result<Json<CompatibilityReport>, AppError> {
    match engine.evaluate(&request) {
        Ok(report) => Ok(Json(report)),
        Err(err) => {
            warn!(error = %err, "rejected compatibility request");
            Err(err.into())
        }
    }
}
