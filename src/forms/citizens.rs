use serde::Deserialize;
use validator::Validate;

use crate::domain::types::CitizenId;
use crate::forms::FormError;

/// Value an HTML checkbox submits when it is ticked.
const CHECKBOX_ON: &str = "on";

#[derive(Debug, Deserialize, Validate)]
/// Form posted by the citizen table when the arrested checkbox changes.
pub struct UpdateCitizenForm {
    /// Identifier of the citizen to update.
    #[validate(length(min = 1))]
    pub citizen_id: String,
    /// Checkbox value; absent when the box is unticked.
    #[serde(default)]
    pub arrested: Option<String>,
}

/// Explicit arguments for [`crate::services::citizens::set_arrested`].
#[derive(Debug, PartialEq, Eq)]
pub struct UpdateCitizenPayload {
    pub citizen_id: CitizenId,
    pub arrested: bool,
}

impl TryFrom<UpdateCitizenForm> for UpdateCitizenPayload {
    type Error = FormError;

    fn try_from(form: UpdateCitizenForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let citizen_id =
            CitizenId::new(form.citizen_id).map_err(|_| FormError::InvalidCitizenId)?;
        let arrested = form.arrested.as_deref() == Some(CHECKBOX_ON);

        Ok(Self {
            citizen_id,
            arrested,
        })
    }
}
