//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::licensing::{LicensingService, PgLicensingService, schedule::LicensingPolicy},
};

/// Failures while wiring the application together.
#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

/// Shared service handles for the HTTP layer.
#[derive(Clone)]
pub struct AppContext {
    pub licensing: Arc<dyn LicensingService>,
}

impl AppContext {
    /// Build application context from a database URL and fee policy.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        policy: LicensingPolicy,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self {
            licensing: Arc::new(PgLicensingService::new(Db::new(pool), policy)),
        })
    }
}
