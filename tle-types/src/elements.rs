use derive_more::Display;

/// Decoded mean orbital elements of a TLE
///
/// Angles are in degrees, mean motion in revolutions per day.
#[derive(Clone, PartialEq, PartialOrd, Debug, Display)]
#[display(
    fmt = "{{catalog: {}, epoch: {}/{}, inc: {}, ecc: {}, n: {}, ...}}",
    "satellite_number",
    "epoch_year",
    "epoch_day",
    "inclination",
    "eccentricity",
    "mean_motion"
)]
pub struct OrbitalElements {
    pub line_number_1: u64,
    /// AKA NORAD catalog number
    pub satellite_number: u64,
    /// U (unclassified), C (classified) or S (secret)
    pub classification: char,
    /// Last two digits of the launch year
    pub int_designator_year: u64,
    pub int_designator_launch_number: u64,
    pub int_designator_piece: String,
    /// Last two digits of the epoch year
    pub epoch_year: u64,
    /// Day of the year and fractional portion of the day, 1-indexed
    pub epoch_day: f64,
    /// First time derivative of the mean motion divided by two [rev/day^2]
    pub first_time_derivative: f64,
    /// Second time derivative of the mean motion divided by six [rev/day^3]
    pub second_time_derivative: f64,
    /// B* drag term [1/earth radii]
    pub bstar_drag: f64,
    pub orbit_model: u64,
    pub element_set_number: u64,
    pub checksum_1: u64,

    pub line_number_2: u64,
    pub satellite_number_2: u64,
    pub inclination: f64,
    pub right_ascension: f64,
    pub eccentricity: f64,
    pub argument_of_perigee: f64,
    pub mean_anomaly: f64,
    /// Revolutions per day
    pub mean_motion: f64,
    pub revolution_number: u64,
    pub checksum_2: u64,
}
