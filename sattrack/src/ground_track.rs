//! Sampled orbit tracks and their split into map-drawable segments

use crate::{
    antemeridian::wraps_around, engine::PositionEngine, error::PositionError,
    propagator::Propagator,
};
use tle_format::TleSource;
use tle_types::prelude::*;
use tracing::debug;

/// Split a track wherever consecutive longitudes wrap around ±180°
pub fn split_at_antemeridian(
    points: impl IntoIterator<Item = LatLng>,
    threshold_deg: f64,
) -> Vec<GroundTrackSegment> {
    let mut segments: Vec<GroundTrackSegment> = Vec::new();
    for p in points {
        let starts_segment = match segments.last().and_then(|seg| seg.last()) {
            Some(prev) => wraps_around(prev.lng, p.lng, threshold_deg),
            None => true,
        };
        if starts_segment {
            segments.push(vec![p]);
        } else if let Some(seg) = segments.last_mut() {
            seg.push(p);
        }
    }
    segments
}

fn offset_timestamp(timestamp_ms: EpochMillis, offset_ms: i64) -> Result<EpochMillis, PositionError> {
    timestamp_ms.checked_add(offset_ms).ok_or_else(|| {
        PositionError::InvalidArgument(format!(
            "timestamp {timestamp_ms} ms offset by {offset_ms} ms is out of range"
        ))
    })
}

impl<P: Propagator> PositionEngine<P> {
    /// `step_count + 1` evenly spaced points over one average orbital period,
    /// both ends included
    pub fn orbit_track<T: TleSource + ?Sized>(
        &self,
        tle: &T,
        start_ms: EpochMillis,
        step_count: usize,
    ) -> Result<Vec<LatLng>, PositionError> {
        if step_count == 0 {
            return Err(PositionError::InvalidArgument(
                "step count must be non-zero".to_owned(),
            ));
        }
        let tle = tle.to_tle()?;
        let period = self.orbit_period_ms(tle.as_ref())?;
        (0..=step_count)
            .map(|i| {
                let offset = (period * i as f64 / step_count as f64).round() as i64;
                self.lat_lng(tle.as_ref(), offset_timestamp(start_ms, offset)?)
            })
            .collect()
    }

    /// Points every `step_ms` from `start_ms` through `start_ms + duration_ms`
    pub fn orbit_track_with_step<T: TleSource + ?Sized>(
        &self,
        tle: &T,
        start_ms: EpochMillis,
        step_ms: i64,
        duration_ms: i64,
    ) -> Result<Vec<LatLng>, PositionError> {
        if step_ms <= 0 {
            return Err(PositionError::InvalidArgument(format!(
                "step must be positive, got {step_ms} ms"
            )));
        }
        if duration_ms < 0 {
            return Err(PositionError::InvalidArgument(format!(
                "duration must not be negative, got {duration_ms} ms"
            )));
        }
        let tle = tle.to_tle()?;
        let end = offset_timestamp(start_ms, duration_ms)?;
        std::iter::successors(Some(start_ms), |t| t.checked_add(step_ms))
            .take_while(|t| *t <= end)
            .map(|t| self.lat_lng(tle.as_ref(), t))
            .collect()
    }

    /// Ground track around `timestamp_ms`, split into segments that never
    /// wrap around ±180°
    ///
    /// When the satellite crossed the antemeridian recently the track spans
    /// the configured number of orbits around that crossing, sampled every
    /// `step_ms`. Otherwise, e.g. for geosynchronous orbits, the configured
    /// fallback window is sampled from `timestamp_ms` at the fallback step.
    pub fn ground_track<T: TleSource + ?Sized>(
        &self,
        tle: &T,
        step_ms: i64,
        timestamp_ms: EpochMillis,
    ) -> Result<Vec<GroundTrackSegment>, PositionError> {
        if step_ms <= 0 {
            return Err(PositionError::InvalidArgument(format!(
                "step must be positive, got {step_ms} ms"
            )));
        }
        let tle = tle.to_tle()?;
        let tle = tle.as_ref();
        let cfg = &self.config().ground_track;

        let points = match self.last_antemeridian_crossing(tle, timestamp_ms)? {
            Some(crossing) => {
                let period = self.orbit_period_ms(tle)?;
                let before = (period * cfg.orbits_before).round() as i64;
                let after = (period * cfg.orbits_after).round() as i64;
                let start = offset_timestamp(crossing, before.saturating_neg())?;
                let end = offset_timestamp(crossing, after)?;
                let duration = end.checked_sub(start).ok_or_else(|| {
                    PositionError::InvalidArgument(format!(
                        "ground track window {start}..{end} ms is too long"
                    ))
                })?;
                self.orbit_track_with_step(tle, start, step_ms, duration)?
            }
            None => {
                debug!(
                    satellite = %tle.name,
                    window_ms = cfg.fallback_window_ms,
                    step_ms = cfg.fallback_step_ms,
                    "No recent antemeridian crossing, using the fallback window"
                );
                self.orbit_track_with_step(
                    tle,
                    timestamp_ms,
                    cfg.fallback_step_ms,
                    cfg.fallback_window_ms,
                )?
            }
        };

        Ok(split_at_antemeridian(
            points,
            self.config().wraparound_threshold_deg,
        ))
    }
}
