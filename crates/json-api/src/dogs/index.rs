//! Dog Index Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fircrest_app::domain::licensing::records::{DogWithLicense, LicenseRecord};

use crate::{
    errors::into_status_error, extensions::*, identity::IdentityDepotExt as _, state::State,
};

/// License Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LicenseResponse {
    /// The unique identifier of the license
    pub uuid: Uuid,

    /// The printed license number
    pub number: String,

    /// Issue instant
    pub issued_at: String,

    /// Expiration instant
    pub expires_at: String,

    /// Annual fee in whole dollars
    pub fee: u32,

    /// Stored license status
    pub status: String,

    pub rabies_vaccinated_at: String,
    pub rabies_expires_at: String,
    pub veterinarian_name: String,
    pub veterinarian_phone: String,

    /// Whether the validity window has elapsed
    pub expired: bool,

    /// Whether the license lapses within the renewal-notice window
    pub expires_soon: bool,

    /// Whether renewal should be offered
    pub renewal_due: bool,
}

impl LicenseResponse {
    fn from_record(license: LicenseRecord, now: Timestamp) -> Self {
        Self {
            uuid: license.uuid.into_uuid(),
            expired: license.is_expired(now),
            expires_soon: license.is_expiring_soon(now),
            renewal_due: license.renewal_due(now),
            number: license.number,
            issued_at: license.issued_at.to_string(),
            expires_at: license.expires_at.to_string(),
            fee: license.fee,
            status: license.status.as_str().to_string(),
            rabies_vaccinated_at: license.rabies_vaccinated_at.to_string(),
            rabies_expires_at: license.rabies_expires_at.to_string(),
            veterinarian_name: license.veterinarian_name,
            veterinarian_phone: license.veterinarian_phone,
        }
    }
}

/// Dog Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DogResponse {
    /// The unique identifier of the dog
    pub uuid: Uuid,

    pub name: String,
    pub breed: String,
    pub color: String,

    /// Age in whole years
    pub age: i16,

    /// Weight in pounds
    pub weight_lbs: f64,

    pub sex: String,
    pub spayed_neutered: bool,
    pub microchip_number: Option<String>,

    /// The current license, absent when none has been issued
    pub license: Option<LicenseResponse>,
}

impl DogResponse {
    fn from_entry(entry: DogWithLicense, now: Timestamp) -> Self {
        let DogWithLicense { dog, license } = entry;

        Self {
            uuid: dog.uuid.into_uuid(),
            name: dog.name,
            breed: dog.breed,
            color: dog.color,
            age: dog.age,
            weight_lbs: dog.weight_lbs,
            sex: dog.sex.as_str().to_string(),
            spayed_neutered: dog.spayed_neutered,
            microchip_number: dog.microchip_number,
            license: license.map(|license| LicenseResponse::from_record(license, now)),
        }
    }
}

/// Dogs Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DogsResponse {
    /// The caller's dogs
    pub dogs: Vec<DogResponse>,
}

/// Dog Index Handler
///
/// Returns every dog owned by the caller, each with its current license.
/// Anonymous callers get an empty list, not an error.
#[endpoint(
    tags("dogs"),
    summary = "List My Dogs",
    security(("identity_header" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<DogsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let Some(user) = depot.identity() else {
        return Ok(Json(DogsResponse { dogs: Vec::new() }));
    };

    let dogs = state
        .app
        .licensing
        .dogs_for_user(user)
        .await
        .map_err(into_status_error)?;

    let now = Timestamp::now();

    Ok(Json(DogsResponse {
        dogs: dogs
            .into_iter()
            .map(|entry| DogResponse::from_entry(entry, now))
            .collect(),
    }))
}
