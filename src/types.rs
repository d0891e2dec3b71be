// src/types.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{error::ApiError, payload::Validate};

#[derive(Debug, Deserialize)]
pub struct TemplateUpdateReq {
    pub changed_files: Value,
}

#[derive(Debug, Deserialize)]
pub struct DeviceConfigReq {
    pub devices: Value,
}

#[derive(Serialize)]
pub struct HealthRes {
    pub status: &'static str,
    pub service: &'static str,
}

#[derive(Serialize)]
pub struct AckRes {
    pub status: &'static str,
    pub message: &'static str,
}

impl AckRes {
    pub fn success(message: &'static str) -> Self {
        Self {
            status: "success",
            message,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorRes {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Validate for TemplateUpdateReq {
    fn validate(&self) -> Result<(), ApiError> {
        require("changed_files", &self.changed_files)
    }
}

impl Validate for DeviceConfigReq {
    fn validate(&self) -> Result<(), ApiError> {
        require("devices", &self.devices)
    }
}

// Fields are opaque, but an explicit null counts as missing.
fn require(field: &str, value: &Value) -> Result<(), ApiError> {
    if value.is_null() {
        return Err(ApiError::BadRequest(format!("`{field}` must not be null")));
    }
    Ok(())
}
