use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One temperature observation from a device.
///
/// `id` and `timestamp` are always assigned by `ReadingStore::record`,
/// never taken from the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub id: Uuid,
    pub device_id: String,
    /// Degrees Celsius
    pub temperature: f64,
    pub timestamp: DateTime<Utc>,
}
