//! Railway network construction.
//!
//! A `Network` owns the station and track registries for one batch. It is
//! built from a [`NetworkDescription`], skipping (and remembering) entries
//! that cannot be loaded: duplicate station names and tracks whose
//! endpoints do not exist.

mod types;

pub use types::{NetworkDescription, TrackDescription};

use tracing::{debug, warn};

use crate::domain::{NetworkError, Route, StationId, StationRegistry, Tick, TrackId, TrackRegistry};

/// Stations and tracks of one railway, plus the occupancy state of every
/// track.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: StationRegistry,
    tracks: TrackRegistry,
    warnings: Vec<NetworkError>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a network from its description.
    ///
    /// Stations are registered first, then tracks. Entries that fail to
    /// load are logged, skipped and kept in [`Network::warnings`].
    pub fn from_description(description: &NetworkDescription) -> Self {
        let mut builder = NetworkBuilder::new();
        for name in &description.stations {
            builder = builder.station(name);
        }
        for track in &description.tracks {
            builder = builder.track(&track.station1, &track.station2, track.length);
        }

        let network = builder.build();
        debug!(
            stations = network.stations.len(),
            tracks = network.tracks.len(),
            skipped = network.warnings.len(),
            "network loaded"
        );
        network
    }

    /// Register a station.
    pub fn add_station(&mut self, name: &str) -> Result<StationId, NetworkError> {
        self.stations.insert(name)
    }

    /// Register a track between two existing stations.
    ///
    /// Both endpoints are checked before anything is inserted.
    pub fn add_track(
        &mut self,
        station1: &str,
        station2: &str,
        length: Tick,
    ) -> Result<TrackId, NetworkError> {
        let from = self.stations.resolve(station1)?;
        let to = self.stations.resolve(station2)?;
        Ok(self.tracks.insert(from, to, length))
    }

    /// Resolve a train's station names to handles.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the list is empty or names an unknown station.
    pub fn resolve_route<S: AsRef<str>>(&self, names: &[S]) -> Result<Route, NetworkError> {
        let stations = names
            .iter()
            .map(|name| self.stations.resolve(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Route::new(stations)
    }

    /// Returns the station registry.
    pub fn stations(&self) -> &StationRegistry {
        &self.stations
    }

    /// Returns the track registry.
    pub fn tracks(&self) -> &TrackRegistry {
        &self.tracks
    }

    /// Returns the track registry for admission.
    pub fn tracks_mut(&mut self) -> &mut TrackRegistry {
        &mut self.tracks
    }

    /// Returns the entries skipped while loading.
    pub fn warnings(&self) -> &[NetworkError] {
        &self.warnings
    }
}

/// Builder for creating networks.
///
/// Provides a fluent API. Entries that cannot be added are logged and
/// recorded as warnings rather than failing the build.
///
/// # Example
///
/// ```
/// use railway_checker::network::NetworkBuilder;
///
/// let network = NetworkBuilder::new()
///     .station("A")
///     .station("B")
///     .track("A", "B", 10)
///     .track("A", "Z", 4) // unknown station, skipped
///     .build();
///
/// assert_eq!(network.tracks().len(), 1);
/// assert_eq!(network.warnings().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    inner: Network,
}

impl NetworkBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station.
    pub fn station(mut self, name: &str) -> Self {
        if let Err(e) = self.inner.add_station(name) {
            warn!("skipping station: {e}");
            self.inner.warnings.push(e);
        }
        self
    }

    /// Add several stations.
    pub fn stations(self, names: &[&str]) -> Self {
        names.iter().fold(self, |builder, name| builder.station(name))
    }

    /// Add a track.
    pub fn track(mut self, station1: &str, station2: &str, length: Tick) -> Self {
        if let Err(e) = self.inner.add_track(station1, station2, length) {
            warn!("skipping track {station1} - {station2}: {e}");
            self.inner.warnings.push(e);
        }
        self
    }

    /// Build the network.
    pub fn build(self) -> Network {
        self.inner
    }
}
