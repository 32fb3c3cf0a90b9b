//! Domain types for the railway collision checker.
//!
//! Stations and tracks live in registries and are referred to by handle.
//! Once a network is loaded, names are only used for display, so every
//! comparison is an identity comparison.

mod error;
mod occupancy;
mod route;
mod schedule;
mod station;
mod track;

pub use error::NetworkError;
pub use occupancy::{Conflict, Direction, Occupancy, OccupancyLedger, Tick};
pub use route::Route;
pub use schedule::{Schedule, Stop, TrackUse, TrainId};
pub use station::{StationId, StationRegistry};
pub use track::{Track, TrackId, TrackRegistry};
