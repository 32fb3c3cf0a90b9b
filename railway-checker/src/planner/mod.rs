//! Collision checking for batches of trains.
//!
//! This module implements the core question: "if these trains all leave
//! at time 0 and run in this order, does any pair collide?"
//!
//! Each train is planned greedily onto tracks whose occupancy ledgers
//! accept it, then the resulting schedules are checked for two trains at
//! one station at the same instant.

mod config;
mod error;
mod path;
mod railway;
mod station_check;


pub use config::{CheckConfig, CollisionStrategy, ConfigError, ECHO_LIMIT_VAR, STRATEGY_VAR};
pub use error::CollisionError;
pub use path::{plan_train, plan_train_with};
pub use railway::Railway;
pub use station_check::{
    StationCollision, StationTimes, find_station_collision, has_station_collision,
};
