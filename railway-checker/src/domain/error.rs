//! Domain error types.
//!
//! These errors represent problems in the network or train descriptions
//! handed to the checker. Collisions are not errors in this sense; see
//! [`crate::planner::CollisionError`].

/// Errors raised while building a network or registering trains.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A station name was registered twice
    #[error("duplicate station name: {0}")]
    DuplicateStation(String),

    /// A track or train refers to a station that does not exist
    #[error("station not found: {0}")]
    UnknownStation(String),

    /// A train has no stations to visit
    #[error("train must visit at least one station")]
    EmptyTrain,
}
