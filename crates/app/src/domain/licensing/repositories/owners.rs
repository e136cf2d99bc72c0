//! Owners Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::{
    domain::licensing::{
        data::OwnerDetails,
        records::{OwnerRecord, OwnerUuid},
    },
    identity::UserUuid,
};

const UPSERT_OWNER_SQL: &str = include_str!("../sql/upsert_owner.sql");
const FIND_OWNER_BY_USER_SQL: &str = include_str!("../sql/find_owner_by_user.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOwnersRepository;

impl PgOwnersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Inserts the owner row for `user`, or overwrites its mutable fields
    /// when one already exists. The unique index on `user_uuid` makes the
    /// upsert race-free; the row keeps its original uuid on update.
    pub(crate) async fn upsert_owner(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: OwnerUuid,
        user: UserUuid,
        details: OwnerDetails,
    ) -> Result<OwnerRecord, sqlx::Error> {
        query_as::<Postgres, OwnerRecord>(UPSERT_OWNER_SQL)
            .bind(uuid.into_uuid())
            .bind(user.into_uuid())
            .bind(details.first_name)
            .bind(details.last_name)
            .bind(details.address)
            .bind(details.city)
            .bind(details.state)
            .bind(details.zip_code)
            .bind(details.phone)
            .bind(details.emergency_contact)
            .bind(details.emergency_phone)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_owner_by_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Option<OwnerRecord>, sqlx::Error> {
        query_as::<Postgres, OwnerRecord>(FIND_OWNER_BY_USER_SQL)
            .bind(user.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for OwnerRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: OwnerUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            address: row.try_get("address")?,
            city: row.try_get("city")?,
            state: row.try_get("state")?,
            zip_code: row.try_get("zip_code")?,
            phone: row.try_get("phone")?,
            emergency_contact: row.try_get("emergency_contact")?,
            emergency_phone: row.try_get("emergency_phone")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
