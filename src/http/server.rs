//! The serving layer: routes, body limits, and process lifecycle.
//!
//! Everything dispatcher-shaped lives here so the conversion function itself
//! stays a plain request-to-text transformation.

use axum::body::Bytes;
use axum::extract::DefaultBodyLimit;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{error, info};
use serde_json::{json, Value};

use crate::config::RowcastConfig;
use crate::error::RowcastError;
use crate::http::handler::{arrow_to_json, FunctionRequest};
use crate::{bridge, VERSION};

/// Builds the application router.
pub fn router(config: &RowcastConfig) -> Router {
    Router::new()
        .route("/", post(convert_handler))
        .route("/inspect", post(inspect_handler))
        .route("/healthz", get(health_handler))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
}

/// `POST /` — the conversion function. Always `200 OK`; the two result
/// shapes are distinguished by the presence of the `error` key.
async fn convert_handler(body: Bytes) -> impl IntoResponse {
    let response = arrow_to_json(&FunctionRequest::new(body.to_vec()));
    ([(CONTENT_TYPE, "application/json")], response)
}

/// `POST /inspect` — summarizes an encoded stream without row conversion.
/// Accepts the same body shape as the conversion endpoint.
async fn inspect_handler(body: Bytes) -> Json<Value> {
    Json(inspect_payload(&FunctionRequest::new(body.to_vec())))
}

fn inspect_payload(request: &FunctionRequest) -> Value {
    let encoded = request
        .json()
        .and_then(|payload| payload.arrow_result)
        .filter(|encoded| !encoded.is_empty());

    let encoded = match encoded {
        Some(encoded) => encoded,
        None => return json!({ "error": "No arrowResult found." }),
    };

    bridge::inspect_stream(&encoded)
        .and_then(|info| Ok(serde_json::to_value(&info)?))
        .unwrap_or_else(|err| json!({ "error": err.to_string() }))
}

/// `GET /healthz` — liveness.
async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok", "version": VERSION }))
}

/// Binds the listener and serves until interrupted.
pub async fn serve(config: RowcastConfig) -> Result<(), RowcastError> {
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {addr}");

    axum::serve(listener, router(&config))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to install shutdown handler: {err}");
    }
}
