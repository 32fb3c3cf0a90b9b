//! A batch of trains planned over one network.

use tracing::{debug, info};

use crate::domain::{NetworkError, Route, Schedule, TrainId};
use crate::network::{Network, NetworkDescription};

use super::config::CollisionStrategy;
use super::error::CollisionError;
use super::path::{plan_train, plan_train_with};
use super::station_check::{StationTimes, find_station_collision};

/// One network and the trains to run over it.
///
/// Trains are registered first and planned later, in registration order.
/// Order matters: admission is greedy, so an earlier train can take the
/// track a later one needed.
///
/// # Examples
///
/// ```
/// use railway_checker::network::NetworkBuilder;
/// use railway_checker::planner::{CollisionStrategy, Railway};
///
/// let network = NetworkBuilder::new()
///     .stations(&["A", "B"])
///     .track("A", "B", 10)
///     .build();
///
/// let mut railway = Railway::new(network, CollisionStrategy::Incremental);
/// railway.add_train(&["A", "B"]).unwrap();
/// railway.add_train(&["B", "A"]).unwrap();
///
/// // The second train would meet the first head-on
/// assert!(railway.has_collision());
/// ```
#[derive(Debug, Clone)]
pub struct Railway {
    network: Network,
    strategy: CollisionStrategy,
    routes: Vec<Route>,
    schedules: Vec<Schedule>,
    station_times: StationTimes,
    outcome: Option<Result<(), CollisionError>>,
}

impl Railway {
    /// Create a railway with no trains.
    pub fn new(network: Network, strategy: CollisionStrategy) -> Self {
        Self {
            network,
            strategy,
            routes: Vec::new(),
            schedules: Vec::new(),
            station_times: StationTimes::new(),
            outcome: None,
        }
    }

    /// Create a railway from a network description.
    pub fn from_description(description: &NetworkDescription, strategy: CollisionStrategy) -> Self {
        Self::new(Network::from_description(description), strategy)
    }

    /// Register a train to be planned later.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the route is empty or names an unknown station.
    /// Nothing is registered in that case.
    pub fn add_train<S: AsRef<str>>(&mut self, stations: &[S]) -> Result<TrainId, NetworkError> {
        let route = self.network.resolve_route(stations)?;
        let id = TrainId(self.routes.len());
        self.routes.push(route);
        // A new train reopens a finished batch that had no collision
        if matches!(self.outcome, Some(Ok(()))) {
            self.outcome = None;
        }
        Ok(id)
    }

    /// Plan every registered train that has not been planned yet.
    ///
    /// Once a collision is found the batch is finished: further calls
    /// return the same error without touching the network again.
    pub fn plan(&mut self) -> Result<(), CollisionError> {
        if let Some(outcome) = &self.outcome {
            return outcome.clone();
        }

        let outcome = self.plan_pending();
        if let Err(e) = &outcome {
            info!("collision: {e}");
        }
        self.outcome = Some(outcome.clone());
        outcome
    }

    fn plan_pending(&mut self) -> Result<(), CollisionError> {
        for idx in self.schedules.len()..self.routes.len() {
            let train = TrainId(idx);
            let route = &self.routes[idx];
            let schedule = match self.strategy {
                CollisionStrategy::Incremental => {
                    let claims = &mut self.station_times;
                    plan_train_with(&mut self.network, train, route, |station, time| {
                        claims.claim_stop(train, station, time)
                    })?
                }
                CollisionStrategy::Deferred => plan_train(&mut self.network, train, route)?,
            };

            self.schedules.push(schedule);
        }

        if self.strategy == CollisionStrategy::Deferred
            && let Some(collision) = find_station_collision(&self.schedules)
        {
            return Err(CollisionError::at_station(collision, self.network.stations()));
        }

        debug!(trains = self.schedules.len(), "batch planned without collision");
        Ok(())
    }

    /// Plan all trains and report whether any collision occurred.
    pub fn has_collision(&mut self) -> bool {
        self.plan().is_err()
    }

    /// Returns true if the trains planned so far share a station at the
    /// same instant.
    pub fn batch_has_collision(&self) -> bool {
        find_station_collision(&self.schedules).is_some()
    }

    /// Returns the schedules of successfully planned trains, in order.
    pub fn schedules(&self) -> &[Schedule] {
        &self.schedules
    }

    /// Returns the schedule of one train, if it has been planned.
    pub fn schedule(&self, train: TrainId) -> Option<&Schedule> {
        self.schedules.get(train.0)
    }

    /// Returns the number of registered trains.
    pub fn train_count(&self) -> usize {
        self.routes.len()
    }

    /// Returns the collision strategy.
    pub fn strategy(&self) -> CollisionStrategy {
        self.strategy
    }

    /// Returns the network, including the occupancy state of every track.
    pub fn network(&self) -> &Network {
        &self.network
    }
}
