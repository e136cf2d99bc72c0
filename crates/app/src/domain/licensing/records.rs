//! Licensing Records

use jiff::Timestamp;

use crate::{
    domain::licensing::schedule::RENEWAL_NOTICE_WINDOW, identity::UserUuid, uuids::TypedUuid,
};

/// Owner UUID
pub type OwnerUuid = TypedUuid<OwnerRecord>;

/// Owner profile for a licensed dog's responsible person.
///
/// At most one row exists per user identity; re-registration overwrites the
/// mutable fields in place.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnerRecord {
    /// Unique owner identifier.
    pub uuid: OwnerUuid,

    /// Identity of the user this profile belongs to.
    pub user_uuid: UserUuid,

    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone: String,
    pub emergency_contact: Option<String>,
    pub emergency_phone: Option<String>,

    /// Row creation timestamp.
    pub created_at: Timestamp,

    /// Last update timestamp.
    pub updated_at: Timestamp,
}

/// Dog UUID
pub type DogUuid = TypedUuid<DogRecord>;

/// Dog sex as recorded on the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DogSex {
    Male,
    Female,
}

impl DogSex {
    /// Storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Parses the storage representation.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            _ => None,
        }
    }
}

/// A registered animal.
#[derive(Debug, Clone, PartialEq)]
pub struct DogRecord {
    /// Unique dog identifier.
    pub uuid: DogUuid,

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

    /// Identity of the owning user.
    pub owner_user: UserUuid,

    /// Current license, once one has been issued. Briefly absent between
    /// dog creation and license creation during registration.
    pub license_uuid: Option<LicenseUuid>,

    /// Row creation timestamp.
    pub created_at: Timestamp,

    /// Last update timestamp.
    pub updated_at: Timestamp,
}

/// License UUID
pub type LicenseUuid = TypedUuid<LicenseRecord>;

/// Stored license status.
///
/// Workflows only ever write [`LicenseStatus::Active`]; the other values
/// exist so rows written by earlier systems still round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseStatus {
    Active,
    Expired,
    Pending,
}

impl LicenseStatus {
    /// Storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Expired => "expired",
            Self::Pending => "pending",
        }
    }

    /// Parses the storage representation.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "expired" => Some(Self::Expired),
            "pending" => Some(Self::Pending),
            _ => None,
        }
    }
}

/// The annual permit tied to one dog.
///
/// Renewal overwrites the validity window, fee, and vaccination fields of
/// the same row; no history of past renewals is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct LicenseRecord {
    /// Unique license identifier.
    pub uuid: LicenseUuid,

    /// Printed license number, `FC-<issue millis>-<dog id tail>`.
    pub number: String,

    /// The licensed dog.
    pub dog_uuid: DogUuid,

    /// Identity of the owning user, denormalized for direct lookup.
    pub owner_user: UserUuid,

    pub issued_at: Timestamp,
    pub expires_at: Timestamp,

    /// Annual fee in whole dollars.
    pub fee: u32,

    pub status: LicenseStatus,

    pub rabies_vaccinated_at: Timestamp,
    pub rabies_expires_at: Timestamp,
    pub veterinarian_name: String,
    pub veterinarian_phone: String,

    /// Row creation timestamp.
    pub created_at: Timestamp,

    /// Last update timestamp.
    pub updated_at: Timestamp,
}

impl LicenseRecord {
    /// Whether the validity window has elapsed.
    #[must_use]
    pub fn is_expired(&self, now: Timestamp) -> bool {
        now > self.expires_at
    }

    /// Whether the license lapses within the renewal-notice window.
    #[must_use]
    pub fn is_expiring_soon(&self, now: Timestamp) -> bool {
        now < self.expires_at
            && self.expires_at
                < now
                    .saturating_add(RENEWAL_NOTICE_WINDOW)
                    .expect("SignedDuration has no units greater than hours")
    }

    /// Renewal is offered once a license is expired or about to expire.
    #[must_use]
    pub fn renewal_due(&self, now: Timestamp) -> bool {
        self.is_expired(now) || self.is_expiring_soon(now)
    }
}

/// A dog joined with its current license for the dashboard view.
#[derive(Debug, Clone, PartialEq)]
pub struct DogWithLicense {
    /// The dog row.
    pub dog: DogRecord,

    /// The joined license, absent when the dog has none.
    pub license: Option<LicenseRecord>,
}

#[cfg(test)]
mod tests {
    use jiff::SignedDuration;

    use super::*;

    fn license_expiring_at(expires_at: Timestamp) -> LicenseRecord {
        LicenseRecord {
            uuid: LicenseUuid::new(),
            number: "FC-0-abcdef".to_string(),
            dog_uuid: DogUuid::new(),
            owner_user: UserUuid::new(),
            issued_at: Timestamp::UNIX_EPOCH,
            expires_at,
            fee: 25,
            status: LicenseStatus::Active,
            rabies_vaccinated_at: Timestamp::UNIX_EPOCH,
            rabies_expires_at: expires_at,
            veterinarian_name: "Dr. Alvarez".to_string(),
            veterinarian_phone: "555-0100".to_string(),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn license_is_expired_only_after_expiration_instant() {
        let now = Timestamp::now();
        let license = license_expiring_at(now);

        assert!(!license.is_expired(now));
        assert!(license.is_expired(now + SignedDuration::from_secs(1)));
        assert!(!license.is_expired(now - SignedDuration::from_secs(1)));
    }

    #[test]
    fn license_expiring_within_thirty_days_is_expiring_soon() {
        let now = Timestamp::now();
        let license = license_expiring_at(now + SignedDuration::from_hours(29 * 24));

        assert!(license.is_expiring_soon(now));
        assert!(license.renewal_due(now));
    }

    #[test]
    fn license_expiring_beyond_thirty_days_is_not_expiring_soon() {
        let now = Timestamp::now();
        let license = license_expiring_at(now + SignedDuration::from_hours(31 * 24));

        assert!(!license.is_expiring_soon(now));
        assert!(!license.renewal_due(now));
    }

    #[test]
    fn expired_license_is_not_expiring_soon_but_renewal_is_due() {
        let now = Timestamp::now();
        let license = license_expiring_at(now - SignedDuration::from_hours(24));

        assert!(!license.is_expiring_soon(now));
        assert!(license.is_expired(now));
        assert!(license.renewal_due(now));
    }

    #[test]
    fn status_round_trips_through_storage_form() {
        for status in [
            LicenseStatus::Active,
            LicenseStatus::Expired,
            LicenseStatus::Pending,
        ] {
            assert_eq!(LicenseStatus::parse(status.as_str()), Some(status));
        }

        assert_eq!(LicenseStatus::parse("revoked"), None);
    }

    #[test]
    fn sex_round_trips_through_storage_form() {
        for sex in [DogSex::Male, DogSex::Female] {
            assert_eq!(DogSex::parse(sex.as_str()), Some(sex));
        }

        assert_eq!(DogSex::parse("unknown"), None);
    }
}
