use crate::{
    cache::{CacheStats, MemoCache},
    config::EngineConfig,
    error::PositionError,
    frames,
    na::Vector3,
    propagator::{Propagator, Sgp4Propagator},
};
use ordered_float::OrderedFloat;
use tle_format::TleSource;
use tle_types::prelude::*;
use tracing::trace;

/// Satellite positions from element sets, memoized per
/// (element lines, timestamp, observer)
///
/// Keys are structural: textually identical element sets share entries no
/// matter how they were supplied. The satellite name is not part of the key.
pub struct PositionEngine<P = Sgp4Propagator> {
    propagator: P,
    config: EngineConfig,
    fixes: MemoCache<FixKey, Result<Fix, PositionError>>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
struct FixKey {
    line1: String,
    line2: String,
    timestamp_ms: EpochMillis,
    observer: Option<[OrderedFloat<f64>; 3]>,
}

impl FixKey {
    fn new(tle: &TleRecord, timestamp_ms: EpochMillis, observer: Option<&ObserverLocation>) -> Self {
        Self {
            line1: tle.line1.clone(),
            line2: tle.line2.clone(),
            timestamp_ms,
            observer: observer.map(|o| {
                [
                    OrderedFloat(o.lat),
                    OrderedFloat(o.lng),
                    OrderedFloat(o.height_km),
                ]
            }),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
struct Fix {
    state: SatelliteState,
    /// Earth fixed position [km]
    ecf: Vector3<f64>,
}

impl Default for PositionEngine<Sgp4Propagator> {
    fn default() -> Self {
        Self::from_config(EngineConfig::default())
    }
}

impl PositionEngine<Sgp4Propagator> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: EngineConfig) -> Self {
        let propagator = Sgp4Propagator::new(config.model_cache_capacity);
        Self::with_propagator(propagator, config)
    }
}

impl<P: Propagator> PositionEngine<P> {
    pub fn with_propagator(propagator: P, config: EngineConfig) -> Self {
        Self {
            propagator,
            fixes: MemoCache::new(config.cache_capacity),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn propagator(&self) -> &P {
        &self.propagator
    }

    /// Position, height and speed of the satellite, plus look angles when an
    /// observer is given
    ///
    /// The element set must pass checksum validation.
    pub fn satellite_info<T: TleSource + ?Sized>(
        &self,
        tle: &T,
        timestamp_ms: EpochMillis,
        observer: Option<ObserverLocation>,
    ) -> Result<SatelliteState, PositionError> {
        let tle = tle.to_tle()?;
        if let Some(observer) = &observer {
            validate_observer(observer)?;
        }
        Ok(self.fix(&tle, timestamp_ms, observer)?.state)
    }

    /// Sub-satellite point, sharing cached work with [`Self::satellite_info`]
    pub fn lat_lng<T: TleSource + ?Sized>(
        &self,
        tle: &T,
        timestamp_ms: EpochMillis,
    ) -> Result<LatLng, PositionError> {
        self.satellite_info(tle, timestamp_ms, None)
            .map(|s| s.lat_lng())
    }

    pub fn look_angles<T: TleSource + ?Sized>(
        &self,
        tle: &T,
        timestamp_ms: EpochMillis,
        observer: ObserverLocation,
    ) -> Result<LookAngles, PositionError> {
        let tle = tle.to_tle()?;
        validate_observer(&observer)?;
        let fix = self.fix(&tle, timestamp_ms, None)?;
        Ok(frames::look_angles(&observer, &fix.ecf))
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.fixes.stats()
    }

    pub fn clear_cache(&self) {
        self.fixes.clear()
    }

    /// Average orbital period [ms]
    pub fn orbit_period_ms<T: TleSource + ?Sized>(&self, tle: &T) -> Result<f64, PositionError> {
        Ok(tle_format::average_orbit_time_ms(tle)?)
    }

    fn fix(
        &self,
        tle: &TleRecord,
        timestamp_ms: EpochMillis,
        observer: Option<ObserverLocation>,
    ) -> Result<Fix, PositionError> {
        let key = FixKey::new(tle, timestamp_ms, observer.as_ref());
        self.fixes.get_or_compute(key, || match observer {
            None => self.compute_fix(tle, timestamp_ms),
            Some(observer) => {
                let fix = self.fix(tle, timestamp_ms, None)?;
                let look = frames::look_angles(&observer, &fix.ecf);
                Ok(Fix {
                    state: fix.state.with_look_angles(look),
                    ..fix
                })
            }
        })
    }

    fn compute_fix(&self, tle: &TleRecord, timestamp_ms: EpochMillis) -> Result<Fix, PositionError> {
        tle_format::validate(tle)?;
        let eci = self.propagator.propagate(tle, timestamp_ms)?;
        trace!(satellite = %tle.name, timestamp_ms, cache_hit = false, "Propagated");

        let ecf = frames::eci_to_ecf(&eci.position, frames::gmst(timestamp_ms as f64));
        let geo = frames::ecf_to_geodetic(&ecf);
        Ok(Fix {
            state: SatelliteState {
                lat: geo.lat,
                lng: geo.lng,
                height: geo.height,
                velocity: eci.velocity.norm(),
                look_angles: None,
            },
            ecf,
        })
    }
}

fn validate_observer(observer: &ObserverLocation) -> Result<(), PositionError> {
    let ObserverLocation { lat, lng, height_km } = *observer;
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(PositionError::InvalidObserver(format!(
            "latitude {lat} is outside [-90, 90]"
        )));
    }
    if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
        return Err(PositionError::InvalidObserver(format!(
            "longitude {lng} is outside [-180, 180]"
        )));
    }
    if !height_km.is_finite() {
        return Err(PositionError::InvalidObserver(format!(
            "height {height_km} is not finite"
        )));
    }
    Ok(())
}
