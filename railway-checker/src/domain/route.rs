//! Train routes.

use super::{NetworkError, StationId};

/// The ordered stations a train must visit.
///
/// A route always has at least one station. This type guarantees that
/// invariant by construction, so the planner never has to handle an empty
/// train.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route(Vec<StationId>);

impl Route {
    /// Create a route from a station sequence.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::EmptyTrain`] if `stations` is empty.
    pub fn new(stations: Vec<StationId>) -> Result<Self, NetworkError> {
        if stations.is_empty() {
            return Err(NetworkError::EmptyTrain);
        }
        Ok(Route(stations))
    }

    /// Returns the first station.
    pub fn origin(&self) -> StationId {
        self.0[0]
    }

    /// Returns every station in visiting order.
    pub fn stations(&self) -> &[StationId] {
        &self.0
    }

    /// Iterate over consecutive `(from, to)` station pairs.
    pub fn legs(&self) -> impl Iterator<Item = (StationId, StationId)> + '_ {
        self.0.windows(2).map(|pair| (pair[0], pair[1]))
    }
}
