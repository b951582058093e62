use crate::{
    db::ConnectionFactory,
    domain::{
        citizen::{ArrestToggle, Citizen, SearchCriteria},
        profile::ConnectionProfile,
        types::CitizenId,
    },
    repository::errors::RepositoryResult,
};

pub mod citizen;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod query;

/// Diesel-backed repository opening one connection per call.
#[derive(Clone)]
pub struct DieselRepository {
    connections: ConnectionFactory,
}

impl DieselRepository {
    pub fn new(connections: ConnectionFactory) -> Self {
        Self { connections }
    }
}

pub trait CitizenReader {
    /// Returns at most [`query::SEARCH_LIMIT`] citizens ordered by surname, name.
    fn search_citizens(&self, criteria: &SearchCriteria)
    -> RepositoryResult<(usize, Vec<Citizen>)>;
}

pub trait CitizenWriter {
    /// Sets the arrested flag and reads it back on the same connection.
    fn set_arrested(&self, citizen_id: &CitizenId, arrested: bool)
    -> RepositoryResult<ArrestToggle>;
}

pub trait ConnectionProber {
    /// Counts citizens reachable through `candidate` without persisting it.
    fn probe_citizen_count(&self, candidate: &ConnectionProfile) -> RepositoryResult<i64>;
}
