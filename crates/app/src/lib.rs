//! Fircrest dog licensing — domain and persistence modules.

pub mod context;
pub mod database;
pub mod domain;
pub mod identity;

#[cfg(test)]
mod test;

pub mod uuids;

// Re-exported so API-layer tests can construct storage errors.
pub use sqlx;
