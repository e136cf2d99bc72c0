//! Owner Profile Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fircrest_app::domain::licensing::records::OwnerRecord;

use crate::{
    errors::into_status_error, extensions::*, identity::IdentityDepotExt as _, state::State,
};

/// Owner Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OwnerResponse {
    /// The unique identifier of the owner profile
    pub uuid: Uuid,

    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone: String,
    pub emergency_contact: Option<String>,
    pub emergency_phone: Option<String>,
}

impl From<OwnerRecord> for OwnerResponse {
    fn from(owner: OwnerRecord) -> Self {
        Self {
            uuid: owner.uuid.into_uuid(),
            first_name: owner.first_name,
            last_name: owner.last_name,
            address: owner.address,
            city: owner.city,
            state: owner.state,
            zip_code: owner.zip_code,
            phone: owner.phone,
            emergency_contact: owner.emergency_contact,
            emergency_phone: owner.emergency_phone,
        }
    }
}

/// Owner Profile Handler
///
/// Returns the caller's owner profile, or `null` when the caller is
/// anonymous or has not registered yet.
#[endpoint(
    tags("owners"),
    summary = "Get Owner Profile",
    security(("identity_header" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Option<OwnerResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let Some(user) = depot.identity() else {
        return Ok(Json(None));
    };

    let owner = state
        .app
        .licensing
        .owner_profile(user)
        .await
        .map_err(into_status_error)?;

    Ok(Json(owner.map(Into::into)))
}
