use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::models::Reading;

/// Append-only, in-memory history of every `Reading` received.
///
/// Wrapped in `Arc` so it can be cheaply cloned and shared across handlers.
/// Uses `tokio::sync::RwLock` so concurrent readers never block each other;
/// each operation holds the lock exactly once, so a `record` that has
/// returned is visible to every read started after it.
#[derive(Clone, Default)]
pub struct ReadingStore {
    inner: Arc<RwLock<Vec<Reading>>>,
}

impl ReadingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a reading for `device_id`, stamped with the current time.
    pub async fn record(&self, device_id: impl Into<String>, temperature: f64) -> Reading {
        self.record_at(device_id.into(), temperature, Utc::now()).await
    }

    /// Append a reading observed at `now`.
    ///
    /// The stored timestamp never goes below the last one in the history,
    /// so the sequence stays non-decreasing even if the wall clock steps back.
    pub(crate) async fn record_at(
        &self,
        device_id: String,
        temperature: f64,
        now: DateTime<Utc>,
    ) -> Reading {
        let mut readings = self.inner.write().await;

        let timestamp = match readings.last() {
            Some(last) if last.timestamp > now => last.timestamp,
            _ => now,
        };

        let reading = Reading {
            id: Uuid::new_v4(),
            device_id,
            temperature,
            timestamp,
        };
        readings.push(reading.clone());

        debug!(
            device_id = %reading.device_id,
            temperature = reading.temperature,
            total = readings.len(),
            "Reading recorded"
        );
        reading
    }

    /// Return the most recent reading for `device_id`, if any.
    ///
    /// Readings sharing the maximum timestamp are ordered by insertion
    /// index; the one inserted last wins.
    pub async fn latest(&self, device_id: &str) -> Option<Reading> {
        self.inner
            .read()
            .await
            .iter()
            .enumerate()
            .filter(|(_, r)| r.device_id == device_id)
            .max_by_key(|(index, r)| (r.timestamp, *index))
            .map(|(_, r)| r.clone())
    }

    /// Return a snapshot of every reading, in insertion order.
    pub async fn all(&self) -> Vec<Reading> {
        self.inner.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
