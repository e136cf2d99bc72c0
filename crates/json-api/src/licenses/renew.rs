//! Renew License Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fircrest_app::domain::licensing::records::LicenseUuid;

use crate::{
    dogs::register::VaccinationFields, errors::into_status_error,
    extensions::*, identity::IdentityDepotExt as _, state::State,
};

/// Renew License Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RenewLicenseRequest {
    /// Fresh vaccination proof for the renewed term.
    pub vaccination: VaccinationFields,
}

/// License Renewed Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LicenseRenewedResponse {
    pub success: bool,
}

/// Renew License Handler
///
/// Re-stamps the license's validity window, fee, and vaccination proof in
/// place. The license must exist, belong to the caller, and still reference
/// a living dog record.
#[endpoint(
    tags("licenses"),
    summary = "Renew License",
    security(("identity_header" = [])),
    responses(
        (status_code = StatusCode::OK, description = "License renewed"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthenticated"),
        (status_code = StatusCode::NOT_FOUND, description = "License or dog not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    json: JsonBody<RenewLicenseRequest>,
    depot: &mut Depot,
) -> Result<Json<LicenseRenewedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.identity_or_401()?;

    let proof = json.into_inner().vaccination.into_proof()?;

    state
        .app
        .licensing
        .renew_license(user, LicenseUuid::from_uuid(uuid.into_inner()), proof)
        .await
        .map_err(into_status_error)?;

    Ok(Json(LicenseRenewedResponse { success: true }))
}
