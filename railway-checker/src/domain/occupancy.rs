//! Track occupancy ledger.
//!
//! Every track keeps an ordered record of the trains admitted onto it. A
//! train entering at `t` occupies the track for the closed interval
//! `[t, t + length]`, so two intervals that merely touch still overlap.
//!
//! Admission rules:
//! - opposite directions may never overlap (head-on)
//! - the same direction may overlap, but two trains may not enter from the
//!   same end at the same instant
//!
//! Because every admitted pair already satisfies these rules, only the
//! immediate neighbours of a new entry time need to be inspected.

use std::collections::BTreeMap;
use std::fmt;

/// A point in time, in whole units since every train's departure.
///
/// All trains move at one distance unit per time unit, so a track of
/// length `n` takes exactly `n` ticks to traverse.
pub type Tick = u64;

/// Direction of travel relative to a track's stored orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// From the track's first station to its second.
    Forward,
    /// From the track's second station to its first.
    Backward,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => f.write_str("forward"),
            Direction::Backward => f.write_str("backward"),
        }
    }
}

/// One train's stay on a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupancy {
    /// Time the train enters the track.
    pub entry: Tick,
    /// Direction of travel.
    pub direction: Direction,
}

/// Reason an entry onto a track was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Conflict {
    /// A train travelling the other way is on the track during the interval
    #[error("head-on with {existing} train entered at {existing_entry}")]
    HeadOn {
        existing_entry: Tick,
        existing: Direction,
    },

    /// Another train already enters from the same end at this instant
    #[error("another {direction} train enters at {entry}")]
    SameEntry { entry: Tick, direction: Direction },
}

/// Closed-interval overlap test for two entries onto a track of `length`.
fn overlaps(a: Tick, b: Tick, length: Tick) -> bool {
    a <= b.saturating_add(length) && b <= a.saturating_add(length)
}

/// Ordered record of admitted occupancies for a single track.
///
/// Keyed by entry time. Entry times are unique within a ledger: a second
/// entry at the same instant is either from the same end (rejected as
/// [`Conflict::SameEntry`]) or from the other end (always overlapping, so
/// rejected as [`Conflict::HeadOn`]).
///
/// # Examples
///
/// ```
/// use railway_checker::domain::{Conflict, Direction, OccupancyLedger};
///
/// let mut ledger = OccupancyLedger::new(10);
/// assert!(ledger.try_admit(0, Direction::Forward).is_ok());
///
/// // Following on the same direction is allowed
/// assert!(ledger.try_admit(10, Direction::Forward).is_ok());
///
/// // Meeting it head-on is not
/// assert!(matches!(
///     ledger.try_admit(15, Direction::Backward),
///     Err(Conflict::HeadOn { .. })
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct OccupancyLedger {
    length: Tick,
    records: BTreeMap<Tick, Direction>,
}

impl OccupancyLedger {
    /// Create an empty ledger for a track of the given length.
    pub fn new(length: Tick) -> Self {
        Self {
            length,
            records: BTreeMap::new(),
        }
    }

    /// Returns the length of the track, which is also its traversal time.
    pub fn length(&self) -> Tick {
        self.length
    }

    /// Check whether a train could enter at `entry` travelling `direction`,
    /// without recording it.
    pub fn admits(&self, entry: Tick, direction: Direction) -> Result<(), Conflict> {
        if let Some((&succ_entry, &succ_direction)) = self.records.range(entry..).next()
            && overlaps(entry, succ_entry, self.length)
        {
            if succ_direction != direction {
                return Err(Conflict::HeadOn {
                    existing_entry: succ_entry,
                    existing: succ_direction,
                });
            }
            if succ_entry == entry {
                return Err(Conflict::SameEntry { entry, direction });
            }
        }

        if let Some((&pred_entry, &pred_direction)) = self.records.range(..entry).next_back()
            && overlaps(entry, pred_entry, self.length)
            && pred_direction != direction
        {
            return Err(Conflict::HeadOn {
                existing_entry: pred_entry,
                existing: pred_direction,
            });
        }

        Ok(())
    }

    /// Admit a train at `entry` travelling `direction` if no conflict exists.
    ///
    /// On success the occupancy is recorded permanently.
    pub fn try_admit(&mut self, entry: Tick, direction: Direction) -> Result<(), Conflict> {
        self.admits(entry, direction)?;
        self.records.insert(entry, direction);
        Ok(())
    }

    /// Returns the number of admitted occupancies.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no train has been admitted.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over admitted occupancies in entry-time order.
    pub fn iter(&self) -> impl Iterator<Item = Occupancy> + '_ {
        self.records
            .iter()
            .map(|(&entry, &direction)| Occupancy { entry, direction })
    }
}
