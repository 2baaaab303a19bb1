//! Finding when a ground track last wrapped across ±180° longitude

use crate::{engine::PositionEngine, error::PositionError, propagator::Propagator};
use tle_format::TleSource;
use tle_types::prelude::*;
use tracing::debug;

/// True when moving from `from` to `to` [deg] wraps across the antemeridian
/// rather than drifting across the prime meridian
pub fn wraps_around(from: f64, to: f64, threshold_deg: f64) -> bool {
    (from < 0.0) != (to < 0.0) && (from - to).abs() > threshold_deg
}

impl<P: Propagator> PositionEngine<P> {
    /// Latest instant at or before `timestamp_ms` at which the satellite
    /// crossed the antemeridian, `None` if it did not within the search horizon
    ///
    /// The horizon is searched backwards with a coarse step sized from the
    /// orbital period, then the bracketing interval is bisected.
    pub fn last_antemeridian_crossing<T: TleSource + ?Sized>(
        &self,
        tle: &T,
        timestamp_ms: EpochMillis,
    ) -> Result<Option<EpochMillis>, PositionError> {
        let tle = tle.to_tle()?;
        let tle = tle.as_ref();
        let cfg = &self.config().antemeridian;
        let threshold = self.config().wraparound_threshold_deg;

        let period = self.orbit_period_ms(tle)?;
        let step = ((period / f64::from(cfg.coarse_steps_per_orbit)).round() as i64).max(1);
        let earliest = timestamp_ms.saturating_sub((period * cfg.horizon_orbits).round() as i64);

        let mut later_t = timestamp_ms;
        let mut later = self.lat_lng(tle, later_t)?.lng;
        while later_t > earliest {
            let earlier_t = later_t.saturating_sub(step).max(earliest);
            let earlier = self.lat_lng(tle, earlier_t)?.lng;
            if wraps_around(earlier, later, threshold) {
                let crossing = self.bisect_crossing(tle, (earlier_t, earlier), later_t)?;
                debug!(satellite = %tle.name, timestamp_ms, crossing, "Found antemeridian crossing");
                return Ok(Some(crossing));
            }
            later_t = earlier_t;
            later = earlier;
        }

        debug!(satellite = %tle.name, timestamp_ms, "No antemeridian crossing within the horizon");
        Ok(None)
    }

    /// Narrow `(lo, hi]` down to the first sample past the wrap
    fn bisect_crossing(
        &self,
        tle: &TleRecord,
        (mut lo, mut lo_lng): (EpochMillis, f64),
        mut hi: EpochMillis,
    ) -> Result<EpochMillis, PositionError> {
        let cfg = &self.config().antemeridian;
        let threshold = self.config().wraparound_threshold_deg;
        for _ in 0..cfg.max_bisections {
            let span = hi.abs_diff(lo);
            if span <= cfg.resolution_ms.unsigned_abs() {
                break;
            }
            let mid = lo + (span / 2) as i64;
            let mid_lng = self.lat_lng(tle, mid)?.lng;
            if wraps_around(lo_lng, mid_lng, threshold) {
                hi = mid;
            } else {
                lo = mid;
                lo_lng = mid_lng;
            }
        }
        Ok(hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_detection() {
        assert!(wraps_around(179.5, -179.5, 180.0));
        assert!(wraps_around(-179.5, 179.5, 180.0));
        assert!(!wraps_around(-0.5, 0.5, 180.0));
        assert!(!wraps_around(10.0, 20.0, 180.0));
        assert!(!wraps_around(-170.0, 5.0, 180.0));
    }
}
