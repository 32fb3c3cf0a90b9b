//! Network description DTOs.
//!
//! These types map directly to the JSON test-case format. Field names
//! follow the file's PascalCase keys.

use serde::{Deserialize, Serialize};

/// A railway network as written in a test case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkDescription {
    /// Station names. Duplicates are ignored with a warning.
    #[serde(default)]
    pub stations: Vec<String>,

    /// Tracks between named stations.
    #[serde(default)]
    pub tracks: Vec<TrackDescription>,
}

/// A single track as written in a test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrackDescription {
    /// Station the track is stored as starting from.
    pub station1: String,

    /// Station the track is stored as leading to.
    pub station2: String,

    /// Length, equal to the time a train needs to traverse it.
    pub length: u64,
}

impl TrackDescription {
    /// Create a track description.
    pub fn new(station1: &str, station2: &str, length: u64) -> Self {
        Self {
            station1: station1.to_string(),
            station2: station2.to_string(),
            length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_network() {
        let json = r#"{
            "Stations": ["A", "B"],
            "Tracks": [{"Station1": "A", "Station2": "B", "Length": 10}]
        }"#;

        let network: NetworkDescription = serde_json::from_str(json).unwrap();
        assert_eq!(network.stations, vec!["A", "B"]);
        assert_eq!(network.tracks, vec![TrackDescription::new("A", "B", 10)]);
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let network: NetworkDescription = serde_json::from_str("{}").unwrap();
        assert!(network.stations.is_empty());
        assert!(network.tracks.is_empty());
    }

    #[test]
    fn negative_length_is_rejected() {
        let json = r#"{"Station1": "A", "Station2": "B", "Length": -1}"#;
        assert!(serde_json::from_str::<TrackDescription>(json).is_err());
    }

    #[test]
    fn serializes_with_file_keys() {
        let json = serde_json::to_value(TrackDescription::new("A", "B", 3)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"Station1": "A", "Station2": "B", "Length": 3})
        );
    }
}
