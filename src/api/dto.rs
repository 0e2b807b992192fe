use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::errors::ApiError;
use crate::models::Reading;

pub const NO_READING_MESSAGE: &str = "No readings yet for this device";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadingDto {
    pub id: Uuid,
    pub device_id: String,
    /// Degrees Celsius
    pub temperature: f64,
    /// Assigned by the server when the reading was recorded.
    pub timestamp: DateTime<Utc>,
}

impl From<Reading> for ReadingDto {
    fn from(r: Reading) -> Self {
        Self {
            id: r.id,
            device_id: r.device_id,
            temperature: r.temperature,
            timestamp: r.timestamp,
        }
    }
}

/// Request body for `POST /readings`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReadingRequest {
    /// Device identifier. Must not be blank.
    pub device_id: String,
    /// Degrees Celsius
    pub temperature: f64,
}

impl CreateReadingRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.device_id.trim().is_empty() {
            return Err(ApiError::Validation("deviceId must not be empty".to_owned()));
        }
        Ok(())
    }
}

/// Informational body returned when a device has no readings.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NoReadingMessage {
    pub message: String,
}

/// Response for `GET /readings/{device_id}`: either the latest reading or
/// a message saying there is none. Absence is not an error.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum LatestReadingResponse {
    Reading(ReadingDto),
    NoReading(NoReadingMessage),
}

impl From<Option<Reading>> for LatestReadingResponse {
    fn from(r: Option<Reading>) -> Self {
        match r {
            Some(r) => Self::Reading(r.into()),
            None => Self::NoReading(NoReadingMessage {
                message: NO_READING_MESSAGE.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn blank_device_id_is_rejected() {
        let req = CreateReadingRequest {
            device_id: "   ".to_owned(),
            temperature: 20.0,
        };
        assert!(matches!(req.validate(), Err(ApiError::Validation(_))));
    }

    #[test]
    fn request_deserializes_camel_case_and_integer_temperature() {
        let req: CreateReadingRequest =
            serde_json::from_value(json!({ "deviceId": "dev1", "temperature": 22 })).unwrap();
        assert_eq!(req.device_id, "dev1");
        assert_eq!(req.temperature, 22.0);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn absent_reading_serializes_as_message() {
        let body = serde_json::to_value(LatestReadingResponse::from(None)).unwrap();
        assert_eq!(body, json!({ "message": NO_READING_MESSAGE }));
    }
}
