//! Station handles and the station registry.

use std::collections::HashMap;
use std::fmt;

use super::NetworkError;

/// Handle to a station held by a [`StationRegistry`].
///
/// Handles are indices into the registry that issued them. Comparing two
/// handles compares station identity, so names are only consulted when
/// something has to be shown to a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationId(pub usize);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The set of uniquely-named stations in a network.
///
/// # Examples
///
/// ```
/// use railway_checker::domain::StationRegistry;
///
/// let mut stations = StationRegistry::new();
/// let a = stations.insert("A").unwrap();
/// assert_eq!(stations.lookup("A"), Some(a));
/// assert_eq!(stations.name(a), "A");
///
/// // Names are unique
/// assert!(stations.insert("A").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StationRegistry {
    names: Vec<String>,
    by_name: HashMap<String, StationId>,
}

impl StationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station under a new name.
    ///
    /// Returns `Err` if a station with this name already exists; the
    /// registry is left unchanged in that case.
    pub fn insert(&mut self, name: &str) -> Result<StationId, NetworkError> {
        if self.by_name.contains_key(name) {
            return Err(NetworkError::DuplicateStation(name.to_string()));
        }

        let id = StationId(self.names.len());
        self.names.push(name.to_string());
        self.by_name.insert(name.to_string(), id);
        Ok(id)
    }

    /// Find the handle for a station name.
    pub fn lookup(&self, name: &str) -> Option<StationId> {
        self.by_name.get(name).copied()
    }

    /// Find the handle for a station name, failing with
    /// [`NetworkError::UnknownStation`].
    pub fn resolve(&self, name: &str) -> Result<StationId, NetworkError> {
        self.lookup(name)
            .ok_or_else(|| NetworkError::UnknownStation(name.to_string()))
    }

    /// Returns the name of a station.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different registry.
    pub fn name(&self, id: StationId) -> &str {
        &self.names[id.0]
    }

    /// Returns the number of registered stations.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no stations are registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over all stations in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (StationId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(idx, name)| (StationId(idx), name.as_str()))
    }
}
