pub use crate::elements::OrbitalElements;
pub use crate::geo::{
    GroundTrackSegment, LatLng, LookAngles, ObserverLocation, DEFAULT_OBSERVER_HEIGHT_KM,
};
pub use crate::state::{EciState, SatelliteState};
pub use crate::time::{EpochMillis, UtcTimestamp, MS_PER_DAY, MS_PER_MINUTE, MS_PER_SECOND};
pub use crate::tle::{LineNumber, TleRecord};
