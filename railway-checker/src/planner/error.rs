//! Collision outcomes.

use crate::domain::{StationRegistry, Tick, TrainId};

use super::station_check::StationCollision;

/// A collision found while planning a batch of trains.
///
/// Either variant means the batch as a whole has a collision; there is
/// no recovery or retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollisionError {
    /// No track between two consecutive stations accepts the train
    #[error("{train}: no free track between {from} and {to} at time {time}")]
    TrackUnavailable {
        train: TrainId,
        from: String,
        to: String,
        time: Tick,
    },

    /// Two trains are at the same station at the same instant
    #[error("{first} and {second} both at {station} at time {time}")]
    StationCollision {
        station: String,
        time: Tick,
        first: TrainId,
        second: TrainId,
    },
}

impl CollisionError {
    /// Name the station of a [`StationCollision`].
    pub(crate) fn at_station(collision: StationCollision, stations: &StationRegistry) -> Self {
        CollisionError::StationCollision {
            station: stations.name(collision.station).to_string(),
            time: collision.time,
            first: collision.first,
            second: collision.second,
        }
    }
}
