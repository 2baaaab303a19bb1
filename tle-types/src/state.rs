use crate::geo::{LatLng, LookAngles};
use derive_more::Display;
use std::fmt;

/// Inertial (TEME) state as produced by a propagator
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default, Display)]
#[display(fmt = "{{pos: {}, vel: {}}}", "position", "velocity")]
pub struct EciState {
    /// Position [km]
    pub position: na::Vector3<f64>,
    /// Velocity [km/s]
    pub velocity: na::Vector3<f64>,
}

/// Satellite state at an instant
///
/// Look angles are only present when the state was computed for an observer.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
pub struct SatelliteState {
    /// Geodetic latitude [deg]
    pub lat: f64,
    /// Longitude [deg], in (-180, 180]
    pub lng: f64,
    /// Height above the ellipsoid [km]
    pub height: f64,
    /// Inertial speed [km/s]
    pub velocity: f64,
    pub look_angles: Option<LookAngles>,
}

impl SatelliteState {
    pub fn lat_lng(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }

    pub fn azimuth(&self) -> Option<f64> {
        self.look_angles.map(|l| l.azimuth)
    }

    pub fn elevation(&self) -> Option<f64> {
        self.look_angles.map(|l| l.elevation)
    }

    pub fn range(&self) -> Option<f64> {
        self.look_angles.map(|l| l.range)
    }

    pub fn with_look_angles(mut self, look_angles: LookAngles) -> Self {
        self.look_angles = Some(look_angles);
        self
    }
}

impl fmt::Display for SatelliteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{lat: {}, lng: {}, height: {}, velocity: {}",
            self.lat, self.lng, self.height, self.velocity
        )?;
        if let Some(look) = &self.look_angles {
            write!(
                f,
                ", az: {}, el: {}, range: {}",
                look.azimuth, look.elevation, look.range
            )?;
        }
        write!(f, "}}")
    }
}
