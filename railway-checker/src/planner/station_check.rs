//! Cross-train station collision checks.
//!
//! Two trains collide at a station when both are there at the same
//! instant. Every stop counts, including each train's origin at time 0.
//! A train revisiting one of its own stops is never a collision.

use std::collections::{BTreeSet, HashMap};

use crate::domain::{Schedule, StationId, Tick, TrainId};

/// Two trains at the same station at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationCollision {
    pub station: StationId,
    pub time: Tick,
    /// The train that was there first in planning order.
    pub first: TrainId,
    pub second: TrainId,
}

/// Returns true if any two schedules share a `(station, time)` stop.
pub fn has_station_collision(schedules: &[Schedule]) -> bool {
    find_station_collision(schedules).is_some()
}

/// Find the first pair of schedules sharing a `(station, time)` stop.
///
/// Pairs are compared in planning order, so the result is deterministic.
/// This is quadratic in the number of trains.
pub fn find_station_collision(schedules: &[Schedule]) -> Option<StationCollision> {
    let times: Vec<HashMap<StationId, BTreeSet<Tick>>> =
        schedules.iter().map(arrival_times).collect();

    for (i, earlier) in schedules.iter().enumerate() {
        for (j, later) in schedules.iter().enumerate().skip(i + 1) {
            if earlier.train() == later.train() {
                continue;
            }
            for stop in earlier.stops() {
                let shared = times[j]
                    .get(&stop.station)
                    .is_some_and(|t| t.contains(&stop.arrival));
                if shared {
                    return Some(StationCollision {
                        station: stop.station,
                        time: stop.arrival,
                        first: earlier.train(),
                        second: later.train(),
                    });
                }
            }
        }
    }

    None
}

fn arrival_times(schedule: &Schedule) -> HashMap<StationId, BTreeSet<Tick>> {
    let mut times: HashMap<StationId, BTreeSet<Tick>> = HashMap::new();
    for stop in schedule.stops() {
        times.entry(stop.station).or_default().insert(stop.arrival);
    }
    times
}

/// Index of every `(station, time)` already claimed by an admitted train.
///
/// Stops are claimed one at a time as a train is planned, so a collision
/// is found at the first stop where it happens.
#[derive(Debug, Clone, Default)]
pub struct StationTimes {
    claimed: HashMap<(StationId, Tick), TrainId>,
}

impl StationTimes {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `station` at `time` for `train`.
    ///
    /// Fails if another train already holds it. A train may pass the same
    /// stop twice.
    pub fn claim_stop(
        &mut self,
        train: TrainId,
        station: StationId,
        time: Tick,
    ) -> Result<(), StationCollision> {
        match self.holder(station, time) {
            Some(owner) if owner != train => Err(StationCollision {
                station,
                time,
                first: owner,
                second: train,
            }),
            Some(_) => Ok(()),
            None => {
                self.claimed.insert((station, time), train);
                Ok(())
            }
        }
    }

    /// Returns the train holding `station` at `time`, if any.
    pub fn holder(&self, station: StationId, time: Tick) -> Option<TrainId> {
        self.claimed.get(&(station, time)).copied()
    }

    /// Returns the number of claimed `(station, time)` pairs.
    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    /// Returns true if nothing has been claimed.
    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }
}
