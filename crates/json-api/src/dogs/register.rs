//! Register Dog Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fircrest_app::domain::licensing::{
    data::{NewDog, OwnerDetails, RegisterDog, VaccinationProof},
    records::DogSex,
};

use crate::{
    errors::into_status_error, extensions::*, identity::IdentityDepotExt as _, state::State,
};

/// Dog sex as submitted on the form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum SexField {
    Male,
    Female,
}

impl From<SexField> for DogSex {
    fn from(sex: SexField) -> Self {
        match sex {
            SexField::Male => Self::Male,
            SexField::Female => Self::Female,
        }
    }
}

/// Dog fields on the registration form.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DogFields {
    pub name: String,
    pub breed: String,
    pub color: String,

    /// Age in whole years.
    pub age: i16,

    /// Weight in pounds.
    pub weight_lbs: f64,

    pub sex: SexField,
    pub spayed_neutered: bool,
    pub microchip_number: Option<String>,
}

impl From<DogFields> for NewDog {
    fn from(dog: DogFields) -> Self {
        NewDog {
            name: dog.name,
            breed: dog.breed,
            color: dog.color,
            age: dog.age,
            weight_lbs: dog.weight_lbs,
            sex: dog.sex.into(),
            spayed_neutered: dog.spayed_neutered,
            microchip_number: dog.microchip_number,
        }
    }
}

/// Owner profile fields on the registration form.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OwnerFields {
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

impl From<OwnerFields> for OwnerDetails {
    fn from(owner: OwnerFields) -> Self {
        OwnerDetails {
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

/// Vaccination fields; dates are RFC 3339 strings.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct VaccinationFields {
    pub rabies_vaccinated_at: String,
    pub rabies_expires_at: String,
    pub veterinarian_name: String,
    pub veterinarian_phone: String,
}

impl VaccinationFields {
    pub(crate) fn into_proof(self) -> Result<VaccinationProof, StatusError> {
        Ok(VaccinationProof {
            rabies_vaccinated_at: self
                .rabies_vaccinated_at
                .parse_timestamp("rabies_vaccinated_at")?,
            rabies_expires_at: self.rabies_expires_at.parse_timestamp("rabies_expires_at")?,
            veterinarian_name: self.veterinarian_name,
            veterinarian_phone: self.veterinarian_phone,
        })
    }
}

/// Register Dog Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RegisterDogRequest {
    pub dog: DogFields,
    pub owner: OwnerFields,
    pub vaccination: VaccinationFields,
}

impl RegisterDogRequest {
    fn into_registration(self) -> Result<RegisterDog, StatusError> {
        Ok(RegisterDog {
            dog: self.dog.into(),
            owner: self.owner.into(),
            vaccination: self.vaccination.into_proof()?,
        })
    }
}

/// Dog Registered Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DogRegisteredResponse {
    /// Created dog UUID
    pub dog_uuid: Uuid,

    /// Issued license UUID
    pub license_uuid: Uuid,

    /// Printed license number
    pub license_number: String,
}

/// Register Dog Handler
#[endpoint(
    tags("dogs"),
    summary = "Register Dog",
    security(("identity_header" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Dog registered and license issued"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthenticated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<RegisterDogRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<DogRegisteredResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.identity_or_401()?;

    let registration = json.into_inner().into_registration()?;

    let registered = state
        .app
        .licensing
        .register_dog(user, registration)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/dogs/{}", registered.dog_uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(DogRegisteredResponse {
        dog_uuid: registered.dog_uuid.into_uuid(),
        license_uuid: registered.license_uuid.into_uuid(),
        license_number: registered.license_number,
    }))
}
