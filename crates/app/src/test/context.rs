//! Test context for service-level integration tests.

use crate::{
    database::Db,
    domain::licensing::{PgLicensingService, schedule::LicensingPolicy},
    identity::UserUuid,
};

use super::db::TestDb;

/// A migrated database plus a service wired against it and one caller
/// identity to act as.
pub(crate) struct TestContext {
    pub(crate) db: TestDb,
    pub(crate) user: UserUuid,
    pub(crate) licensing: PgLicensingService,
}

impl TestContext {
    pub(crate) async fn new() -> Self {
        let db = TestDb::new().await;

        let licensing =
            PgLicensingService::new(Db::new(db.pool().clone()), LicensingPolicy::default());

        Self {
            licensing,
            user: UserUuid::new(),
            db,
        }
    }
}
