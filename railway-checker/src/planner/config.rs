//! Checker configuration.

use std::fmt;
use std::str::FromStr;

/// Environment variable selecting the [`CollisionStrategy`].
pub const STRATEGY_VAR: &str = "RAILWAY_STRATEGY";

/// Environment variable setting [`CheckConfig::echo_station_limit`].
pub const ECHO_LIMIT_VAR: &str = "RAILWAY_ECHO_LIMIT";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Unrecognised strategy name
    #[error("invalid RAILWAY_STRATEGY {0:?}: expected \"incremental\" or \"deferred\"")]
    InvalidStrategy(String),

    /// Echo limit is not a non-negative integer
    #[error("invalid RAILWAY_ECHO_LIMIT {0:?}: expected a non-negative integer")]
    InvalidEchoLimit(String),
}

/// When station collisions are checked.
///
/// Track collisions are always found immediately, leg by leg. The two
/// strategies always agree on the verdict; they differ in how far planning
/// gets before stopping and so in which collision is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionStrategy {
    /// Check each train's stops against the earlier trains as soon as it
    /// is planned, stopping at the first collision.
    #[default]
    Incremental,

    /// Plan every train first, then compare all pairs of schedules.
    Deferred,
}

impl FromStr for CollisionStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "incremental" => Ok(CollisionStrategy::Incremental),
            "deferred" => Ok(CollisionStrategy::Deferred),
            _ => Err(ConfigError::InvalidStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for CollisionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollisionStrategy::Incremental => f.write_str("incremental"),
            CollisionStrategy::Deferred => f.write_str("deferred"),
        }
    }
}

/// Configuration parameters for checking test cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// When station collisions are checked.
    pub strategy: CollisionStrategy,

    /// Test cases whose network has at most this many stations are echoed
    /// in full before their result; larger ones only show their description.
    pub echo_station_limit: usize,
}

impl CheckConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(strategy: CollisionStrategy, echo_station_limit: usize) -> Self {
        Self {
            strategy,
            echo_station_limit,
        }
    }

    /// Read configuration from the process environment, falling back to
    /// defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(STRATEGY_VAR) {
            config.strategy = value.parse()?;
        }

        if let Some(value) = lookup(ECHO_LIMIT_VAR) {
            config.echo_station_limit = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidEchoLimit(value.clone()))?;
        }

        Ok(config)
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            strategy: CollisionStrategy::Incremental,
            echo_station_limit: 10,
        }
    }
}
