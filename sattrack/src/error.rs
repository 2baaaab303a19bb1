use crate::propagator::PropagationError;
use tle_format::TleError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PositionError {
    #[error(transparent)]
    Tle(#[from] TleError),
    #[error(transparent)]
    Propagation(#[from] PropagationError),
    #[error("Observer location is invalid: {0}")]
    InvalidObserver(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
