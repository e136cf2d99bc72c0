//! Test helpers.

use std::sync::Arc;

use jiff::{SignedDuration, Timestamp};
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use fircrest_app::{
    context::AppContext,
    domain::licensing::{
        MockLicensingService,
        records::{
            DogRecord, DogSex, DogUuid, DogWithLicense, LicenseRecord, LicenseStatus, LicenseUuid,
            OwnerRecord, OwnerUuid,
        },
    },
    identity::UserUuid,
};

use crate::{identity::IdentityDepotExt as _, state::State};

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::nil());

pub(crate) const TEST_IDENTITY_HEADER: &str = "x-auth-user";

#[salvo::handler]
pub(crate) async fn inject_identity(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_identity(TEST_USER_UUID);
    ctrl.call_next(req, depot, res).await;
}

pub(crate) fn state_with_licensing(licensing: MockLicensingService) -> Arc<State> {
    let app = AppContext {
        licensing: Arc::new(licensing),
    };

    State::shared(app, TEST_IDENTITY_HEADER.to_string())
}

/// Route served with an authenticated test identity already in the depot.
pub(crate) fn licensing_service(licensing: MockLicensingService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_licensing(licensing)))
            .hoop(inject_identity)
            .push(route),
    )
}

/// Route served with no identity in the depot.
pub(crate) fn anonymous_service(licensing: MockLicensingService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_licensing(licensing)))
            .push(route),
    )
}

/// A dog owned by the test user, with no license yet.
pub(crate) fn make_dog(name: &str) -> DogWithLicense {
    DogWithLicense {
        dog: DogRecord {
            uuid: DogUuid::new(),
            name: name.to_string(),
            breed: "Beagle".to_string(),
            color: "Tricolor".to_string(),
            age: 3,
            weight_lbs: 24.5,
            sex: DogSex::Female,
            spayed_neutered: false,
            microchip_number: None,
            owner_user: TEST_USER_UUID,
            license_uuid: None,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        },
        license: None,
    }
}

/// An active license for `dog` expiring `until` from now.
pub(crate) fn make_license(dog: DogUuid, until: SignedDuration) -> LicenseRecord {
    let expires_at = Timestamp::now()
        .saturating_add(until)
        .expect("SignedDuration has no units greater than hours");

    LicenseRecord {
        uuid: LicenseUuid::new(),
        number: "FC-1700000000000-abcdef".to_string(),
        dog_uuid: dog,
        owner_user: TEST_USER_UUID,
        issued_at: expires_at
            .saturating_sub(SignedDuration::from_hours(365 * 24))
            .expect("SignedDuration has no units greater than hours"),
        expires_at,
        fee: 25,
        status: LicenseStatus::Active,
        rabies_vaccinated_at: Timestamp::UNIX_EPOCH,
        rabies_expires_at: expires_at,
        veterinarian_name: "Dr. Alvarez".to_string(),
        veterinarian_phone: "253-555-0190".to_string(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

/// An owner profile for `user`.
pub(crate) fn make_owner(user: UserUuid) -> OwnerRecord {
    OwnerRecord {
        uuid: OwnerUuid::new(),
        user_uuid: user,
        first_name: "June".to_string(),
        last_name: "Okafor".to_string(),
        address: "101 Regents Blvd".to_string(),
        city: "Fircrest".to_string(),
        state: "WA".to_string(),
        zip_code: "98466".to_string(),
        phone: "253-555-0142".to_string(),
        emergency_contact: None,
        emergency_phone: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
