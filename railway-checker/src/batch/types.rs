//! Test-case file DTOs.

use serde::{Deserialize, Serialize};

use crate::network::NetworkDescription;

/// One test case: a network, the trains to run over it, and the verdict
/// the author expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// Optional human-readable label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The network the trains run on.
    #[serde(rename = "Railway")]
    pub railway: NetworkDescription,

    /// Trains in planning order, each a list of station names.
    #[serde(rename = "Trains", default)]
    pub trains: Vec<Vec<String>>,

    /// Whether a collision is expected.
    #[serde(rename = "ExpectedCollision")]
    pub expected_collision: bool,
}
