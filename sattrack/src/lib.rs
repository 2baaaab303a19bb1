//! Satellite positions, look angles and ground tracks from two-line element sets
//!
//! [`PositionEngine`] propagates element sets through a [`Propagator`] (SGP4 by
//! default), converts the result to geodetic coordinates and memoizes every
//! state it computes.

pub extern crate nalgebra as na;

pub use crate::cache::{CacheStats, MemoCache};
pub use crate::config::{AntemeridianConfig, ConfigError, EngineConfig, GroundTrackConfig};
pub use crate::engine::PositionEngine;
pub use crate::error::PositionError;
pub use crate::ground_track::split_at_antemeridian;
pub use crate::propagator::{PropagationError, Propagator, Sgp4Propagator};
pub use tle_format::{TleError, TleSource};
pub use tle_types::prelude::*;

pub mod antemeridian;
pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod frames;
pub mod ground_track;
pub mod propagator;
