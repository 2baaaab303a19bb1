use derive_more::Display;

/// Geodetic sub-point, degrees
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default, Display)]
#[display(fmt = "{{lat: {}, lng: {}}}", "lat", "lng")]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Consecutive track points that never cross the ±180° meridian
pub type GroundTrackSegment = Vec<LatLng>;

/// Observer height used when the caller gives only a latitude and longitude [km]
pub const DEFAULT_OBSERVER_HEIGHT_KM: f64 = 0.370;

/// A ground observer
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Display)]
#[display(
    fmt = "{{lat: {}, lng: {}, height_km: {}}}",
    "lat",
    "lng",
    "height_km"
)]
pub struct ObserverLocation {
    /// Geodetic latitude [deg]
    pub lat: f64,
    /// Geodetic longitude [deg]
    pub lng: f64,
    /// Height above the ellipsoid [km]
    pub height_km: f64,
}

impl ObserverLocation {
    /// Observer at [`DEFAULT_OBSERVER_HEIGHT_KM`]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            height_km: DEFAULT_OBSERVER_HEIGHT_KM,
        }
    }

    pub const fn with_height_km(mut self, height_km: f64) -> Self {
        self.height_km = height_km;
        self
    }
}

impl Default for ObserverLocation {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Topocentric view of a satellite from an observer
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Display)]
#[display(
    fmt = "{{az: {}, el: {}, range: {}}}",
    "azimuth",
    "elevation",
    "range"
)]
pub struct LookAngles {
    /// Clockwise from true north [deg], in [0, 360)
    pub azimuth: f64,
    /// Above the local horizon [deg]
    pub elevation: f64,
    /// Slant range [km]
    pub range: f64,
}
