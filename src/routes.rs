// src/routes.rs
use axum::{
    body::Body,
    http::Request,
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, info_span, Span};
use uuid::Uuid;

use crate::{
    auth,
    payload::Payload,
    types::{AckRes, DeviceConfigReq, HealthRes, TemplateUpdateReq},
    AppState,
};

pub const SERVICE_NAME: &str = "network-templates-api";

/// Routes plus the request-scoped layers.
pub fn app(state: AppState) -> Router {
    let timeout = state.config.request_timeout;
    router(state)
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
}

pub fn router(state: AppState) -> Router {
    let bearer = middleware::from_fn_with_state(state.clone(), auth::require_bearer);

    let templates = Router::new()
        .route("/api/v1/network-templates/updated", post(template_updated))
        .route_layer(bearer.clone());

    let mut devices = Router::new().route(
        "/api/v1/start-config-update-on-devices",
        post(start_device_config_update),
    );
    if state.config.device_update_require_auth {
        devices = devices.route_layer(bearer);
    }

    Router::new()
        .route("/health", get(health))
        .merge(templates)
        .merge(devices)
        .with_state(state)
}

fn request_span(request: &Request<Body>) -> Span {
    info_span!(
        "request",
        request_id = %Uuid::new_v4(),
        method = %request.method(),
        uri = %request.uri(),
    )
}

// ---------- API HANDLERS ---------- //

async fn health() -> Json<HealthRes> {
    Json(HealthRes {
        status: "healthy",
        service: SERVICE_NAME,
    })
}

async fn template_updated(Payload(req): Payload<TemplateUpdateReq>) -> Json<AckRes> {
    info!(changed_files = %req.changed_files, "template updated");
    Json(AckRes::success("Template update processed"))
}

async fn start_device_config_update(Payload(req): Payload<DeviceConfigReq>) -> Json<AckRes> {
    info!(devices = %req.devices, "starting config update on devices");
    Json(AckRes::success("Device config update started"))
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
