use diesel::prelude::*;

use crate::{
    domain::{
        citizen::{ArrestToggle, Citizen, SearchCriteria},
        profile::ConnectionProfile,
        types::CitizenId,
    },
    models::citizen::{ArrestedFlag, Citizen as DbCitizen, CitizenCount},
    repository::{
        CitizenReader, CitizenWriter, ConnectionProber, DieselRepository,
        errors::RepositoryResult,
        query::{
            build_count_statement, build_search_query, build_toggle_arrested_statement,
            build_verify_statement,
        },
    },
};

impl CitizenReader for DieselRepository {
    fn search_citizens(
        &self,
        criteria: &SearchCriteria,
    ) -> RepositoryResult<(usize, Vec<Citizen>)> {
        let mut conn = self.connections.connect_active()?;

        if let Some(term) = criteria.search_term() {
            log::info!("Searching citizens for: {term}");
        }

        let citizens = build_search_query(criteria)
            .into_query()
            .load::<DbCitizen>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Citizen>>();

        log::info!("Found {} citizens", citizens.len());

        Ok((citizens.len(), citizens))
    }
}

impl CitizenWriter for DieselRepository {
    fn set_arrested(
        &self,
        citizen_id: &CitizenId,
        arrested: bool,
    ) -> RepositoryResult<ArrestToggle> {
        let mut conn = self.connections.connect_active()?;

        log::info!("Updating citizen {citizen_id}: setting arrested = {arrested}");

        conn.transaction(|conn| {
            build_toggle_arrested_statement(citizen_id, arrested)
                .into_query()
                .execute(conn)
        })?;

        let verified = build_verify_statement(citizen_id)
            .into_query()
            .get_result::<ArrestedFlag>(&mut conn)
            .optional()?
            .and_then(|row| row.arrested);

        Ok(ArrestToggle {
            arrested_value: arrested,
            verified_value: verified,
        })
    }
}

impl ConnectionProber for DieselRepository {
    fn probe_citizen_count(&self, candidate: &ConnectionProfile) -> RepositoryResult<i64> {
        let mut conn = self.connections.connect_probe(candidate)?;

        let row = build_count_statement()
            .into_query()
            .get_result::<CitizenCount>(&mut conn)?;

        Ok(row.count)
    }
}
