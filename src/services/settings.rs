//! Services reading, replacing and probing the database connection profile.

use crate::config_store::ConfigStore;
use crate::domain::profile::RedactedProfile;
use crate::forms::settings::DbConfigForm;
use crate::repository::ConnectionProber;
use crate::services::ServiceResult;

/// Returns the persisted profile with its password masked.
pub fn get_config<S>(store: &S) -> RedactedProfile
where
    S: ConfigStore + ?Sized,
{
    store.load().redacted()
}

/// Replaces the persisted profile with the submitted one.
pub fn update_config<S>(store: &S, form: DbConfigForm) -> ServiceResult<()>
where
    S: ConfigStore + ?Sized,
{
    let profile = form.into_normalized_profile().map_err(|err| {
        log::error!("Error updating config: {err}");
        err
    })?;

    store.save(&profile).map_err(|err| {
        log::error!("Error updating config: {err}");
        err
    })?;

    log::info!("Database config updated: {}", profile.target());

    Ok(())
}

/// Connects to a candidate profile and counts its citizens.
///
/// The candidate is never persisted. Returns a human-readable summary.
pub fn test_connection<R>(repo: &R, form: DbConfigForm) -> ServiceResult<String>
where
    R: ConnectionProber + ?Sized,
{
    let candidate = form.into_profile();

    let count = repo.probe_citizen_count(&candidate).map_err(|err| {
        log::error!("Connection test failed: {err}");
        err
    })?;

    Ok(format!(
        "Connection successful! Found {count} citizens in database."
    ))
}
