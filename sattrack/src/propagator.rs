//! The orbit propagation seam and its SGP4 implementation

use crate::cache::{CacheStats, MemoCache};
use std::sync::Arc;
use tle_types::prelude::*;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropagationError {
    #[error("Failed to initialize the propagation model: {0}")]
    Model(String),
    #[error("Failed to propagate: {0}")]
    Propagate(String),
}

/// Produces the inertial state of a satellite at an instant
pub trait Propagator {
    fn propagate(
        &self,
        tle: &TleRecord,
        timestamp_ms: EpochMillis,
    ) -> Result<EciState, PropagationError>;
}

impl<P: Propagator + ?Sized> Propagator for Arc<P> {
    fn propagate(
        &self,
        tle: &TleRecord,
        timestamp_ms: EpochMillis,
    ) -> Result<EciState, PropagationError> {
        (**self).propagate(tle, timestamp_ms)
    }
}

pub const DEFAULT_MODEL_CACHE_CAPACITY: usize = 1_024;

/// SGP4/SDP4 propagation, output in the TEME frame
///
/// Initialized models are kept per element set.
pub struct Sgp4Propagator {
    models: MemoCache<(String, String), Result<Arc<Sgp4Model>, PropagationError>>,
}

struct Sgp4Model {
    constants: sgp4::Constants,
    epoch_ms: f64,
}

impl Default for Sgp4Propagator {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL_CACHE_CAPACITY)
    }
}

impl Sgp4Propagator {
    pub fn new(model_cache_capacity: usize) -> Self {
        Self {
            models: MemoCache::new(model_cache_capacity),
        }
    }

    pub fn model_cache_stats(&self) -> CacheStats {
        self.models.stats()
    }

    fn model(&self, tle: &TleRecord) -> Result<Arc<Sgp4Model>, PropagationError> {
        self.models
            .get_or_compute((tle.line1.clone(), tle.line2.clone()), || {
                let elements = sgp4::Elements::from_tle(
                    Some(tle.name.clone()),
                    tle.line1.as_bytes(),
                    tle.line2.as_bytes(),
                )
                .map_err(|e| PropagationError::Model(e.to_string()))?;
                let constants = sgp4::Constants::from_elements(&elements)
                    .map_err(|e| PropagationError::Model(e.to_string()))?;
                let epoch_ms = tle_format::epoch_millis(tle)
                    .map_err(|e| PropagationError::Model(e.to_string()))?;
                debug!(satellite = %tle.name, epoch_ms, "Initialized SGP4 model");
                Ok(Arc::new(Sgp4Model {
                    constants,
                    epoch_ms,
                }))
            })
    }
}

impl Propagator for Sgp4Propagator {
    fn propagate(
        &self,
        tle: &TleRecord,
        timestamp_ms: EpochMillis,
    ) -> Result<EciState, PropagationError> {
        let model = self.model(tle)?;
        let minutes = (timestamp_ms as f64 - model.epoch_ms) / MS_PER_MINUTE as f64;
        let prediction = model
            .constants
            .propagate(sgp4::MinutesSinceEpoch(minutes))
            .map_err(|e| PropagationError::Propagate(e.to_string()))?;
        Ok(EciState {
            position: prediction.position.into(),
            velocity: prediction.velocity.into(),
        })
    }
}
