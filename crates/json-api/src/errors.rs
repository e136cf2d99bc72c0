//! Service-to-HTTP error mapping.

use fircrest_app::domain::licensing::LicensingServiceError;
use salvo::http::StatusError;
use tracing::error;

pub(crate) fn into_status_error(error: LicensingServiceError) -> StatusError {
    match error {
        LicensingServiceError::NotFound => {
            StatusError::not_found().brief("License or dog not found")
        }
        LicensingServiceError::AlreadyExists => {
            StatusError::conflict().brief("Record already exists")
        }
        LicensingServiceError::InvalidReference
        | LicensingServiceError::MissingRequiredData
        | LicensingServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid licensing payload")
        }
        LicensingServiceError::Sql(source) => {
            error!("licensing storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
