//! Services listing citizens and toggling their arrest status.

use crate::domain::citizen::{ArrestToggle, SearchCriteria};
use crate::domain::types::CitizenId;
use crate::dto::citizens::CitizenListing;
use crate::forms::citizens::{UpdateCitizenForm, UpdateCitizenPayload};
use crate::repository::{CitizenReader, CitizenWriter};
use crate::services::ServiceResult;

/// Runs a citizen search, folding any failure into an empty listing.
pub fn list_citizens<R>(repo: &R, criteria: &SearchCriteria) -> CitizenListing
where
    R: CitizenReader + ?Sized,
{
    match repo.search_citizens(criteria) {
        Ok((count, citizens)) => CitizenListing {
            citizens,
            count,
            error: None,
        },
        Err(err) => {
            log::error!("Error fetching citizens: {err}");
            CitizenListing::failed(err.to_string())
        }
    }
}

/// Sets the arrested flag of one citizen and reports the value read back.
pub fn set_arrested<R>(
    repo: &R,
    citizen_id: &CitizenId,
    arrested: bool,
) -> ServiceResult<ArrestToggle>
where
    R: CitizenWriter + ?Sized,
{
    let toggle = repo.set_arrested(citizen_id, arrested).map_err(|err| {
        log::error!("Error updating citizen: {err}");
        err
    })?;

    if !toggle.is_verified() {
        log::warn!(
            "Citizen {citizen_id}: requested arrested = {arrested}, read back {:?}",
            toggle.verified_value
        );
    }

    Ok(toggle)
}

/// Translates the checkbox form and applies it with [`set_arrested`].
pub fn update_citizen<R>(repo: &R, form: UpdateCitizenForm) -> ServiceResult<ArrestToggle>
where
    R: CitizenWriter + ?Sized,
{
    let payload = UpdateCitizenPayload::try_from(form).map_err(|err| {
        log::error!("Failed to validate form: {err}");
        err
    })?;

    set_arrested(repo, &payload.citizen_id, payload.arrested)
}
