//! Dogs Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::{
    domain::licensing::{
        data::NewDog,
        records::{DogRecord, DogSex, DogUuid, LicenseUuid},
    },
    identity::UserUuid,
};

const CREATE_DOG_SQL: &str = include_str!("../sql/create_dog.sql");
const SET_DOG_LICENSE_SQL: &str = include_str!("../sql/set_dog_license.sql");
const FIND_DOG_SQL: &str = include_str!("../sql/find_dog.sql");
const DOGS_BY_OWNER_SQL: &str = include_str!("../sql/dogs_by_owner.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgDogsRepository;

impl PgDogsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Inserts a dog row with no license reference yet.
    pub(crate) async fn create_dog(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: DogUuid,
        owner: UserUuid,
        dog: NewDog,
    ) -> Result<DogRecord, sqlx::Error> {
        query_as::<Postgres, DogRecord>(CREATE_DOG_SQL)
            .bind(uuid.into_uuid())
            .bind(dog.name)
            .bind(dog.breed)
            .bind(dog.color)
            .bind(dog.age)
            .bind(dog.weight_lbs)
            .bind(dog.sex.as_str())
            .bind(dog.spayed_neutered)
            .bind(dog.microchip_number)
            .bind(owner.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Back-fills the dog's reference to its issued license.
    pub(crate) async fn set_dog_license(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        dog: DogUuid,
        license: LicenseUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(SET_DOG_LICENSE_SQL)
            .bind(dog.into_uuid())
            .bind(license.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn find_dog(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        dog: DogUuid,
    ) -> Result<Option<DogRecord>, sqlx::Error> {
        query_as::<Postgres, DogRecord>(FIND_DOG_SQL)
            .bind(dog.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Every dog owned by `owner`, in native store order.
    pub(crate) async fn dogs_by_owner(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: UserUuid,
    ) -> Result<Vec<DogRecord>, sqlx::Error> {
        query_as::<Postgres, DogRecord>(DOGS_BY_OWNER_SQL)
            .bind(owner.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for DogRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let sex: String = row.try_get("sex")?;

        let sex = DogSex::parse(&sex).ok_or_else(|| sqlx::Error::ColumnDecode {
            index: "sex".to_string(),
            source: format!("unrecognized dog sex: {sex}").into(),
        })?;

        Ok(Self {
            uuid: DogUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            breed: row.try_get("breed")?,
            color: row.try_get("color")?,
            age: row.try_get("age")?,
            weight_lbs: row.try_get("weight_lbs")?,
            sex,
            spayed_neutered: row.try_get("spayed_neutered")?,
            microchip_number: row.try_get("microchip_number")?,
            owner_user: UserUuid::from_uuid(row.try_get("owner_user_uuid")?),
            license_uuid: row
                .try_get::<Option<uuid::Uuid>, _>("license_uuid")?
                .map(LicenseUuid::from_uuid),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
