//! Realized train schedules.
//!
//! A `Schedule` is what the planner produces for an admitted train: the
//! arrival time at every station it visits and the track it used for each
//! leg in between.

use std::fmt;

use super::{Direction, StationId, Tick, TrackId};

/// Position of a train in its batch, in the order trains were registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrainId(pub usize);

impl fmt::Display for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "train {}", self.0)
    }
}

/// A train's presence at a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stop {
    pub station: StationId,
    pub arrival: Tick,
}

/// The track a train used between two consecutive stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackUse {
    pub track: TrackId,
    pub direction: Direction,
    pub entry: Tick,
}

/// An admitted train's realized journey.
///
/// # Invariants
///
/// - At least one stop; the first stop is the origin at time 0
/// - `legs.len() == stops.len() - 1`
/// - Arrival times never decrease
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    train: TrainId,
    stops: Vec<Stop>,
    legs: Vec<TrackUse>,
}

impl Schedule {
    /// Start a schedule at `origin` at time 0.
    pub fn depart(train: TrainId, origin: StationId) -> Self {
        Self {
            train,
            stops: vec![Stop {
                station: origin,
                arrival: 0,
            }],
            legs: Vec::new(),
        }
    }

    /// Extend the schedule by one leg ending at `station`.
    pub(crate) fn push_leg(&mut self, leg: TrackUse, station: StationId, arrival: Tick) {
        self.legs.push(leg);
        self.stops.push(Stop { station, arrival });
    }

    /// Returns the train this schedule belongs to.
    pub fn train(&self) -> TrainId {
        self.train
    }

    /// Returns every stop, starting with the origin.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Returns the track used for each leg.
    pub fn legs(&self) -> &[TrackUse] {
        &self.legs
    }

    /// Returns the origin stop.
    pub fn origin(&self) -> Stop {
        self.stops[0]
    }

    /// Returns the final stop.
    pub fn destination(&self) -> Stop {
        // Never empty: constructed with the origin stop
        self.stops[self.stops.len() - 1]
    }

    /// Returns the time the train reaches its final station.
    pub fn duration(&self) -> Tick {
        self.destination().arrival
    }

    /// Returns `(station, arrival)` pairs, the compact form used in tests
    /// and reports.
    pub fn timetable(&self) -> Vec<(StationId, Tick)> {
        self.stops.iter().map(|s| (s.station, s.arrival)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: StationId = StationId(0);
    const B: StationId = StationId(1);

    #[test]
    fn departs_at_time_zero() {
        let schedule = Schedule::depart(TrainId(3), A);
        assert_eq!(schedule.train(), TrainId(3));
        assert_eq!(schedule.origin(), Stop { station: A, arrival: 0 });
        assert_eq!(schedule.destination(), schedule.origin());
        assert_eq!(schedule.duration(), 0);
        assert!(schedule.legs().is_empty());
    }

    #[test]
    fn push_leg_extends_stops_and_legs() {
        let mut schedule = Schedule::depart(TrainId(0), A);
        schedule.push_leg(
            TrackUse {
                track: TrackId(0),
                direction: Direction::Backward,
                entry: 0,
            },
            B,
            10,
        );

        assert_eq!(schedule.timetable(), vec![(A, 0), (B, 10)]);
        assert_eq!(schedule.legs().len(), 1);
        assert_eq!(schedule.legs()[0].direction, Direction::Backward);
        assert_eq!(schedule.duration(), 10);
    }

    #[test]
    fn display_train_id() {
        assert_eq!(TrainId(2).to_string(), "train 2");
    }
}
