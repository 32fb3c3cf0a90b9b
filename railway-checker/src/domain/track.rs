//! Tracks and the track registry.
//!
//! A track is stored in one fixed orientation (`from` → `to`) but can be
//! travelled both ways. Several parallel tracks may join the same pair of
//! stations; each has its own occupancy ledger.

use std::collections::HashMap;
use std::fmt;

use super::{OccupancyLedger, StationId, Tick};

/// Handle to a track held by a [`TrackRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrackId(pub usize);

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "track {}", self.0)
    }
}

/// A bidirectional, length-weighted connection between two stations.
#[derive(Debug, Clone)]
pub struct Track {
    from: StationId,
    to: StationId,
    ledger: OccupancyLedger,
}

impl Track {
    /// Creates a track with an empty ledger.
    pub fn new(from: StationId, to: StationId, length: Tick) -> Self {
        Self {
            from,
            to,
            ledger: OccupancyLedger::new(length),
        }
    }

    /// Returns the station this track is stored as starting from.
    pub fn from(&self) -> StationId {
        self.from
    }

    /// Returns the station this track is stored as leading to.
    pub fn to(&self) -> StationId {
        self.to
    }

    /// Returns the track length.
    pub fn length(&self) -> Tick {
        self.ledger.length()
    }

    /// Returns the occupancy ledger.
    pub fn ledger(&self) -> &OccupancyLedger {
        &self.ledger
    }

    /// Returns the occupancy ledger for admission.
    pub fn ledger_mut(&mut self) -> &mut OccupancyLedger {
        &mut self.ledger
    }
}

/// All tracks of a network, indexed by their stored station pair.
///
/// Lookups are keyed on the ordered pair as registered, so `(A, B)` and
/// `(B, A)` are different keys. Callers that want both orientations must
/// ask for both. Parallel tracks come back in registration order.
#[derive(Debug, Clone, Default)]
pub struct TrackRegistry {
    tracks: Vec<Track>,
    by_pair: HashMap<(StationId, StationId), Vec<TrackId>>,
}

impl TrackRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new track. Parallel tracks are allowed.
    pub fn insert(&mut self, from: StationId, to: StationId, length: Tick) -> TrackId {
        let id = TrackId(self.tracks.len());
        self.tracks.push(Track::new(from, to, length));
        self.by_pair.entry((from, to)).or_default().push(id);
        id
    }

    /// Tracks stored with exactly this orientation, in registration order.
    pub fn between(&self, from: StationId, to: StationId) -> &[TrackId] {
        self.by_pair
            .get(&(from, to))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Returns a track.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different registry.
    pub fn get(&self, id: TrackId) -> &Track {
        &self.tracks[id.0]
    }

    /// Returns a track for admission.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different registry.
    pub fn get_mut(&mut self, id: TrackId) -> &mut Track {
        &mut self.tracks[id.0]
    }

    /// Returns the number of tracks, counting parallel tracks separately.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Returns true if there are no tracks.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Iterate over all tracks in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (TrackId, &Track)> {
        self.tracks
            .iter()
            .enumerate()
            .map(|(idx, track)| (TrackId(idx), track))
    }
}
