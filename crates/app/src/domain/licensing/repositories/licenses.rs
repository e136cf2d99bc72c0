//! Licenses Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::{
    domain::licensing::{
        data::VaccinationProof,
        records::{DogUuid, LicenseRecord, LicenseStatus, LicenseUuid},
        schedule::LicenseTerms,
    },
    identity::UserUuid,
};

const CREATE_LICENSE_SQL: &str = include_str!("../sql/create_license.sql");
const FIND_LICENSE_SQL: &str = include_str!("../sql/find_license.sql");
const LICENSES_BY_OWNER_SQL: &str = include_str!("../sql/licenses_by_owner.sql");
const RENEW_LICENSE_SQL: &str = include_str!("../sql/renew_license.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgLicensesRepository;

impl PgLicensesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Inserts a license row with status `active`.
    #[expect(clippy::too_many_arguments, reason = "one bind per license column")]
    pub(crate) async fn create_license(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: LicenseUuid,
        number: &str,
        dog: DogUuid,
        owner: UserUuid,
        terms: LicenseTerms,
        proof: &VaccinationProof,
    ) -> Result<LicenseRecord, sqlx::Error> {
        query_as::<Postgres, LicenseRecord>(CREATE_LICENSE_SQL)
            .bind(uuid.into_uuid())
            .bind(number)
            .bind(dog.into_uuid())
            .bind(owner.into_uuid())
            .bind(SqlxTimestamp::from(terms.issued_at))
            .bind(SqlxTimestamp::from(terms.expires_at))
            .bind(i64::from(terms.fee))
            .bind(LicenseStatus::Active.as_str())
            .bind(SqlxTimestamp::from(proof.rabies_vaccinated_at))
            .bind(SqlxTimestamp::from(proof.rabies_expires_at))
            .bind(&proof.veterinarian_name)
            .bind(&proof.veterinarian_phone)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_license(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        license: LicenseUuid,
    ) -> Result<Option<LicenseRecord>, sqlx::Error> {
        query_as::<Postgres, LicenseRecord>(FIND_LICENSE_SQL)
            .bind(license.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Every license denormalized to `owner`, used for the dashboard join.
    pub(crate) async fn licenses_by_owner(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: UserUuid,
    ) -> Result<Vec<LicenseRecord>, sqlx::Error> {
        query_as::<Postgres, LicenseRecord>(LICENSES_BY_OWNER_SQL)
            .bind(owner.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    /// Overwrites the validity window, fee, status, and vaccination fields
    /// of the same row. No history row is written.
    pub(crate) async fn renew_license(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        license: LicenseUuid,
        terms: LicenseTerms,
        proof: &VaccinationProof,
    ) -> Result<LicenseRecord, sqlx::Error> {
        query_as::<Postgres, LicenseRecord>(RENEW_LICENSE_SQL)
            .bind(license.into_uuid())
            .bind(SqlxTimestamp::from(terms.issued_at))
            .bind(SqlxTimestamp::from(terms.expires_at))
            .bind(i64::from(terms.fee))
            .bind(LicenseStatus::Active.as_str())
            .bind(SqlxTimestamp::from(proof.rabies_vaccinated_at))
            .bind(SqlxTimestamp::from(proof.rabies_expires_at))
            .bind(&proof.veterinarian_name)
            .bind(&proof.veterinarian_phone)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for LicenseRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;

        let status = LicenseStatus::parse(&status).ok_or_else(|| sqlx::Error::ColumnDecode {
            index: "status".to_string(),
            source: format!("unrecognized license status: {status}").into(),
        })?;

        Ok(Self {
            uuid: LicenseUuid::from_uuid(row.try_get("uuid")?),
            number: row.try_get("number")?,
            dog_uuid: DogUuid::from_uuid(row.try_get("dog_uuid")?),
            owner_user: UserUuid::from_uuid(row.try_get("owner_user_uuid")?),
            issued_at: row.try_get::<SqlxTimestamp, _>("issued_at")?.to_jiff(),
            expires_at: row.try_get::<SqlxTimestamp, _>("expires_at")?.to_jiff(),
            fee: try_get_fee(row, "fee")?,
            status,
            rabies_vaccinated_at: row
                .try_get::<SqlxTimestamp, _>("rabies_vaccinated_at")?
                .to_jiff(),
            rabies_expires_at: row
                .try_get::<SqlxTimestamp, _>("rabies_expires_at")?
                .to_jiff(),
            veterinarian_name: row.try_get("veterinarian_name")?,
            veterinarian_phone: row.try_get("veterinarian_phone")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

fn try_get_fee(row: &PgRow, col: &str) -> Result<u32, sqlx::Error> {
    let fee_i64: i64 = row.try_get(col)?;

    u32::try_from(fee_i64).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}
