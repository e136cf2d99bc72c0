//! Licensing workflow inputs and results.

use jiff::Timestamp;

use crate::domain::licensing::records::{DogSex, DogUuid, LicenseUuid};

/// Dog attributes collected on the registration form.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDog {
    pub name: String,
    pub breed: String,
    pub color: String,

    /// Age in whole years.
    pub age: i16,

    /// Weight in pounds.
    pub weight_lbs: f64,

    pub sex: DogSex,
    pub spayed_neutered: bool,
    pub microchip_number: Option<String>,
}

/// Owner profile fields; re-registration overwrites all of them.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnerDetails {
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

/// Rabies vaccination proof supplied with a registration or renewal.
#[derive(Debug, Clone, PartialEq)]
pub struct VaccinationProof {
    pub rabies_vaccinated_at: Timestamp,
    pub rabies_expires_at: Timestamp,
    pub veterinarian_name: String,
    pub veterinarian_phone: String,
}

/// A full registration submission.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterDog {
    /// The dog being registered.
    pub dog: NewDog,

    /// The caller's owner profile, created or refreshed as part of
    /// registration.
    pub owner: OwnerDetails,

    /// Vaccination proof for the first license.
    pub vaccination: VaccinationProof,
}

/// Identifiers returned from a successful registration.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredDog {
    /// The created dog.
    pub dog_uuid: DogUuid,

    /// The issued license.
    pub license_uuid: LicenseUuid,

    /// The printed license number.
    pub license_number: String,
}
