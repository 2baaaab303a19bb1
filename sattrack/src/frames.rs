//! Frame conversions between the inertial, Earth fixed, geodetic and
//! topocentric views of a position. Distances are in km.

use crate::na::{Matrix3, Rotation3, Vector3};
use nav_types::{ECEF, WGS84};
use std::f64::consts::{PI, TAU};
use tle_types::prelude::*;

const KM: f64 = 1000.0;

/// Geodetic position, degrees and km above the WGS84 ellipsoid
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Geodetic {
    pub lat: f64,
    pub lng: f64,
    pub height: f64,
}

/// Greenwich mean sidereal time [rad] (IAU-82)
pub fn gmst(timestamp_ms: f64) -> f64 {
    let jd_ut1 = timestamp_ms / MS_PER_DAY as f64 + 2_440_587.5;
    let t = (jd_ut1 - 2_451_545.0) / 36_525.0;
    let seconds = -6.2e-6 * t * t * t
        + 0.093104 * t * t
        + (876_600.0 * 3_600.0 + 8_640_184.812866) * t
        + 67_310.54841;
    // 240 seconds of time per degree
    (seconds.to_radians() / 240.0).rem_euclid(TAU)
}

pub fn eci_to_ecf(eci: &Vector3<f64>, gmst: f64) -> Vector3<f64> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), -gmst) * eci
}

pub fn ecf_to_eci(ecf: &Vector3<f64>, gmst: f64) -> Vector3<f64> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), gmst) * ecf
}

pub fn ecf_to_geodetic(ecf: &Vector3<f64>) -> Geodetic {
    let pos = WGS84::from(ECEF::new(ecf.x * KM, ecf.y * KM, ecf.z * KM));
    Geodetic {
        lat: pos.latitude_degrees(),
        lng: pos.longitude_degrees(),
        height: pos.altitude() / KM,
    }
}

/// Earth fixed position of an observer, which must have a valid latitude
pub fn observer_ecf(observer: &ObserverLocation) -> Vector3<f64> {
    let pos = ECEF::from(WGS84::from_degrees_and_meters(
        observer.lat,
        observer.lng,
        observer.height_km * KM,
    ));
    Vector3::new(pos.x(), pos.y(), pos.z()) / KM
}

/// Azimuth, elevation and range of an Earth fixed position seen by an observer
pub fn look_angles(observer: &ObserverLocation, ecf: &Vector3<f64>) -> LookAngles {
    let (sin_lat, cos_lat) = observer.lat.to_radians().sin_cos();
    let (sin_lng, cos_lng) = observer.lng.to_radians().sin_cos();

    // South, east, zenith
    #[rustfmt::skip]
    let to_sez = Matrix3::new(
        sin_lat * cos_lng, sin_lat * sin_lng, -cos_lat,
        -sin_lng,          cos_lng,           0.0,
        cos_lat * cos_lng, cos_lat * sin_lng, sin_lat,
    );
    let sez = to_sez * (ecf - observer_ecf(observer));

    let range = sez.norm();
    let elevation = (sez.z / range).asin();
    let azimuth = (-sez.y).atan2(sez.x) + PI;

    LookAngles {
        azimuth: azimuth.to_degrees().rem_euclid(360.0),
        elevation: elevation.to_degrees(),
        range,
    }
}
