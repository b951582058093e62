//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::config_store::{ConfigStore, ConfigStoreResult, ProfileLoad};
use crate::domain::citizen::{ArrestToggle, Citizen, SearchCriteria};
use crate::domain::profile::ConnectionProfile;
use crate::domain::types::CitizenId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{CitizenReader, CitizenWriter, ConnectionProber};

mock! {
    pub Repository {}

    impl CitizenReader for Repository {
        fn search_citizens(
            &self,
            criteria: &SearchCriteria,
        ) -> RepositoryResult<(usize, Vec<Citizen>)>;
    }

    impl CitizenWriter for Repository {
        fn set_arrested(
            &self,
            citizen_id: &CitizenId,
            arrested: bool,
        ) -> RepositoryResult<ArrestToggle>;
    }

    impl ConnectionProber for Repository {
        fn probe_citizen_count(&self, candidate: &ConnectionProfile) -> RepositoryResult<i64>;
    }
}

mock! {
    pub Store {}

    impl ConfigStore for Store {
        fn load_profile(&self) -> ProfileLoad;
        fn save(&self, profile: &ConnectionProfile) -> ConfigStoreResult<()>;
    }
}
