//! Licensing service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{
    database::Db,
    domain::licensing::{
        data::{RegisterDog, RegisteredDog, VaccinationProof},
        errors::LicensingServiceError,
        records::{DogUuid, DogWithLicense, LicenseRecord, LicenseUuid, OwnerRecord, OwnerUuid},
        repositories::{PgDogsRepository, PgLicensesRepository, PgOwnersRepository},
        schedule::{LicensingPolicy, license_number},
    },
    identity::UserUuid,
};

#[derive(Debug, Clone)]
pub struct PgLicensingService {
    db: Db,
    policy: LicensingPolicy,
    owners: PgOwnersRepository,
    dogs: PgDogsRepository,
    licenses: PgLicensesRepository,
}

impl PgLicensingService {
    #[must_use]
    pub fn new(db: Db, policy: LicensingPolicy) -> Self {
        Self {
            db,
            policy,
            owners: PgOwnersRepository::new(),
            dogs: PgDogsRepository::new(),
            licenses: PgLicensesRepository::new(),
        }
    }
}

#[async_trait]
impl LicensingService for PgLicensingService {
    async fn register_dog(
        &self,
        user: UserUuid,
        registration: RegisterDog,
    ) -> Result<RegisteredDog, LicensingServiceError> {
        let RegisterDog {
            dog,
            owner,
            vaccination,
        } = registration;

        // One transaction end to end: a failure at any step must not leave
        // a dog behind without its license reference.
        let mut tx = self.db.begin().await?;

        self.owners
            .upsert_owner(&mut tx, OwnerUuid::new(), user, owner)
            .await?;

        let dog = self.dogs.create_dog(&mut tx, DogUuid::new(), user, dog).await?;

        let issued_at = Timestamp::now();
        let number = license_number(dog.uuid, issued_at);
        let terms = self.policy.terms(dog.spayed_neutered, issued_at);

        let license = self
            .licenses
            .create_license(
                &mut tx,
                LicenseUuid::new(),
                &number,
                dog.uuid,
                user,
                terms,
                &vaccination,
            )
            .await?;

        self.dogs
            .set_dog_license(&mut tx, dog.uuid, license.uuid)
            .await?;

        tx.commit().await?;

        debug!(dog = %dog.uuid, license = %license.number, "dog registered");

        Ok(RegisteredDog {
            dog_uuid: dog.uuid,
            license_uuid: license.uuid,
            license_number: license.number,
        })
    }

    async fn renew_license(
        &self,
        user: UserUuid,
        license: LicenseUuid,
        proof: VaccinationProof,
    ) -> Result<LicenseRecord, LicensingServiceError> {
        let mut tx = self.db.begin().await?;

        let Some(existing) = self.licenses.find_license(&mut tx, license).await? else {
            return Err(LicensingServiceError::NotFound);
        };

        // Ownership failures read the same as absence on purpose.
        if existing.owner_user != user {
            return Err(LicensingServiceError::NotFound);
        }

        let Some(dog) = self.dogs.find_dog(&mut tx, existing.dog_uuid).await? else {
            return Err(LicensingServiceError::NotFound);
        };

        // The dog's current spay/neuter flag decides the renewal fee, not
        // the one recorded at registration.
        let terms = self.policy.terms(dog.spayed_neutered, Timestamp::now());

        let renewed = self
            .licenses
            .renew_license(&mut tx, license, terms, &proof)
            .await?;

        tx.commit().await?;

        debug!(license = %renewed.number, fee = renewed.fee, "license renewed");

        Ok(renewed)
    }

    async fn dogs_for_user(
        &self,
        user: UserUuid,
    ) -> Result<Vec<DogWithLicense>, LicensingServiceError> {
        let mut tx = self.db.begin().await?;

        let dogs = self.dogs.dogs_by_owner(&mut tx, user).await?;
        let licenses = self.licenses.licenses_by_owner(&mut tx, user).await?;

        tx.commit().await?;

        let mut by_uuid: FxHashMap<LicenseUuid, LicenseRecord> = licenses
            .into_iter()
            .map(|license| (license.uuid, license))
            .collect();

        Ok(dogs
            .into_iter()
            .map(|dog| {
                let license = dog.license_uuid.and_then(|uuid| by_uuid.remove(&uuid));

                DogWithLicense { dog, license }
            })
            .collect())
    }

    async fn owner_profile(
        &self,
        user: UserUuid,
    ) -> Result<Option<OwnerRecord>, LicensingServiceError> {
        let mut tx = self.db.begin().await?;

        let owner = self.owners.find_owner_by_user(&mut tx, user).await?;

        tx.commit().await?;

        Ok(owner)
    }
}

#[automock]
#[async_trait]
/// The licensing workflows and read views.
pub trait LicensingService: Send + Sync {
    /// Registers a dog: upserts the caller's owner profile, creates the dog
    /// and its first license, and links the two.
    async fn register_dog(
        &self,
        user: UserUuid,
        registration: RegisterDog,
    ) -> Result<RegisteredDog, LicensingServiceError>;

    /// Re-stamps an existing license with fresh terms and vaccination proof.
    async fn renew_license(
        &self,
        user: UserUuid,
        license: LicenseUuid,
        proof: VaccinationProof,
    ) -> Result<LicenseRecord, LicensingServiceError>;

    /// Every dog owned by `user`, each with its current license if any.
    async fn dogs_for_user(
        &self,
        user: UserUuid,
    ) -> Result<Vec<DogWithLicense>, LicensingServiceError>;

    /// The caller's owner profile, if registered.
    async fn owner_profile(
        &self,
        user: UserUuid,
    ) -> Result<Option<OwnerRecord>, LicensingServiceError>;
}
