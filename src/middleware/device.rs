use axum::extract::FromRequestParts;

use crate::error::AppError;

pub const DEVICE_ID_HEADER: &str = "x-device-id";

/// Opaque caller identity for the anonymous storefront routes (cart, order
/// history, status events). The client generates it once and sends it with
/// every request; it scopes persisted state the way on-device storage scoped
/// the original client.
#[derive(Debug, Clone)]
pub struct DeviceId(pub String);

impl<S> FromRequestParts<S> for DeviceId
where
    S: Send + Sync,
{
    type Rejection = AppError;
    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(DEVICE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| AppError::BadRequest("Missing x-device-id header".into()))?;

        Ok(DeviceId(value.to_string()))
    }
}
