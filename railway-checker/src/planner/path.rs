//! Greedy train path planning.
//!
//! A train leaves its first station at time 0 and takes each leg on the
//! first track that will have it: tracks stored in the direction of travel
//! are tried before tracks stored the other way round, parallel tracks in
//! registration order. There is no backtracking, so a train can be refused
//! even when a different earlier choice would have let it through.

use tracing::{debug, trace};

use crate::domain::{Direction, Route, Schedule, StationId, Tick, TrackId, TrackUse, TrainId};
use crate::network::Network;

use super::error::CollisionError;
use super::station_check::StationCollision;

/// Plan one train along `route`, admitting it onto a track for every leg.
///
/// Admissions are recorded in the network's ledgers as they happen and
/// are never rolled back: if a later leg fails, the earlier legs stay
/// occupied.
///
/// # Errors
///
/// Returns [`CollisionError::TrackUnavailable`] for the first leg where no
/// track in either orientation accepts the train.
pub fn plan_train(
    network: &mut Network,
    train: TrainId,
    route: &Route,
) -> Result<Schedule, CollisionError> {
    plan_train_with(network, train, route, |_, _| Ok(()))
}

/// Plan one train like [`plan_train`], passing every stop to `check_stop`
/// as soon as the train reaches it.
///
/// The origin is checked at time 0 before the first leg, and each arrival
/// before the following leg is admitted. Planning stops at the first
/// failure, so no later leg touches a ledger.
///
/// # Errors
///
/// Returns [`CollisionError::StationCollision`] for the first stop
/// `check_stop` refuses, or [`CollisionError::TrackUnavailable`] as for
/// [`plan_train`].
pub fn plan_train_with<F>(
    network: &mut Network,
    train: TrainId,
    route: &Route,
    mut check_stop: F,
) -> Result<Schedule, CollisionError>
where
    F: FnMut(StationId, Tick) -> Result<(), StationCollision>,
{
    let mut schedule = Schedule::depart(train, route.origin());
    let mut time: Tick = 0;

    check_stop(route.origin(), time)
        .map_err(|c| CollisionError::at_station(c, network.stations()))?;

    for (from, to) in route.legs() {
        let Some(leg) = admit_leg(network, from, to, time) else {
            debug!(%train, from = %from, to = %to, time, "no free track");
            return Err(CollisionError::TrackUnavailable {
                train,
                from: network.stations().name(from).to_string(),
                to: network.stations().name(to).to_string(),
                time,
            });
        };

        time = time.saturating_add(network.tracks().get(leg.track).length());
        schedule.push_leg(leg, to, time);

        check_stop(to, time).map_err(|c| CollisionError::at_station(c, network.stations()))?;
    }

    trace!(%train, arrival = schedule.duration(), "train planned");
    Ok(schedule)
}

/// Admit a train leaving `from` at `time` onto some track towards `to`.
fn admit_leg(
    network: &mut Network,
    from: StationId,
    to: StationId,
    time: Tick,
) -> Option<TrackUse> {
    let tracks = network.tracks();
    let candidates: Vec<(TrackId, Direction)> = tracks
        .between(from, to)
        .iter()
        .map(|&id| (id, Direction::Forward))
        .chain(tracks.between(to, from).iter().map(|&id| (id, Direction::Backward)))
        .collect();

    candidates
        .into_iter()
        .find(|&(track, direction)| try_track(network, track, direction, time))
        .map(|(track, direction)| TrackUse {
            track,
            direction,
            entry: time,
        })
}

fn try_track(network: &mut Network, track: TrackId, direction: Direction, time: Tick) -> bool {
    match network
        .tracks_mut()
        .get_mut(track)
        .ledger_mut()
        .try_admit(time, direction)
    {
        Ok(()) => {
            trace!(%track, %direction, time, "admitted");
            true
        }
        Err(conflict) => {
            trace!(%track, %direction, time, "refused: {conflict}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::NetworkBuilder;

    fn route(network: &Network, names: &[&str]) -> Route {
        network.resolve_route(names).unwrap()
    }

    fn station(network: &Network, name: &str) -> StationId {
        network.stations().lookup(name).unwrap()
    }

    #[test]
    fn single_station_train() {
        let mut network = NetworkBuilder::new().station("A").build();
        let r = route(&network, &["A"]);

        let schedule = plan_train(&mut network, TrainId(0), &r).unwrap();
        assert_eq!(schedule.timetable(), vec![(station(&network, "A"), 0)]);
        assert!(schedule.legs().is_empty());
    }

    #[test]
    fn forward_track_is_preferred() {
        let mut network = NetworkBuilder::new()
            .stations(&["A", "B"])
            .track("B", "A", 3)
            .track("A", "B", 5)
            .build();
        let r = route(&network, &["A", "B"]);

        let schedule = plan_train(&mut network, TrainId(0), &r).unwrap();
        assert_eq!(schedule.legs()[0].track, TrackId(1));
        assert_eq!(schedule.legs()[0].direction, Direction::Forward);
        assert_eq!(schedule.duration(), 5);
    }

    #[test]
    fn falls_back_to_reverse_track() {
        let mut network = NetworkBuilder::new()
            .stations(&["A", "B"])
            .track("A", "B", 5)
            .build();
        let r = route(&network, &["B", "A"]);

        let schedule = plan_train(&mut network, TrainId(0), &r).unwrap();
        assert_eq!(schedule.legs()[0].direction, Direction::Backward);
        assert_eq!(network.tracks().get(TrackId(0)).ledger().len(), 1);
    }

    #[test]
    fn missing_track_is_unavailable() {
        let mut network = NetworkBuilder::new().stations(&["A", "B"]).build();
        let r = route(&network, &["A", "B"]);

        assert_eq!(
            plan_train(&mut network, TrainId(7), &r),
            Err(CollisionError::TrackUnavailable {
                train: TrainId(7),
                from: "A".into(),
                to: "B".into(),
                time: 0,
            })
        );
    }

    #[test]
    fn earlier_legs_stay_admitted_after_failure() {
        let mut network = NetworkBuilder::new()
            .stations(&["A", "B", "C"])
            .track("A", "B", 4)
            .build();
        let r = route(&network, &["A", "B", "C"]);

        let err = plan_train(&mut network, TrainId(0), &r).unwrap_err();
        assert!(matches!(err, CollisionError::TrackUnavailable { time: 4, .. }));
        assert_eq!(network.tracks().get(TrackId(0)).ledger().len(), 1);
    }

    #[test]
    fn stops_are_checked_as_they_are_reached() {
        let mut network = NetworkBuilder::new()
            .stations(&["A", "B", "C"])
            .track("A", "B", 2)
            .track("B", "C", 3)
            .build();
        let r = route(&network, &["A", "B", "C"]);
        let (a, b, c) = (
            station(&network, "A"),
            station(&network, "B"),
            station(&network, "C"),
        );

        let mut seen = Vec::new();
        plan_train_with(&mut network, TrainId(0), &r, |station, time| {
            seen.push((station, time));
            Ok(())
        })
        .unwrap();
        assert_eq!(seen, vec![(a, 0), (b, 2), (c, 5)]);
    }

    #[test]
    fn refused_stop_leaves_later_legs_unadmitted() {
        let mut network = NetworkBuilder::new()
            .stations(&["A", "B", "C"])
            .track("A", "B", 2)
            .track("B", "C", 3)
            .build();
        let r = route(&network, &["A", "B", "C"]);
        let b = station(&network, "B");

        let err = plan_train_with(&mut network, TrainId(1), &r, |station, time| {
            if station == b {
                Err(StationCollision {
                    station,
                    time,
                    first: TrainId(0),
                    second: TrainId(1),
                })
            } else {
                Ok(())
            }
        })
        .unwrap_err();

        assert_eq!(
            err,
            CollisionError::StationCollision {
                station: "B".into(),
                time: 2,
                first: TrainId(0),
                second: TrainId(1),
            }
        );
        assert_eq!(network.tracks().get(TrackId(0)).ledger().len(), 1);
        assert!(network.tracks().get(TrackId(1)).ledger().is_empty());
    }
}
