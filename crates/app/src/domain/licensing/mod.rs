//! Dog licensing: owners, dogs, and annual licenses.

pub mod data;
pub mod errors;
pub mod records;
mod repositories;
pub mod schedule;
pub mod service;

pub use errors::LicensingServiceError;
pub use service::*;
