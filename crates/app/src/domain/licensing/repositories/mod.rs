//! Postgres repositories for the licensing collections.

mod dogs;
mod licenses;
mod owners;

pub(crate) use dogs::PgDogsRepository;
pub(crate) use licenses::PgLicensesRepository;
pub(crate) use owners::PgOwnersRepository;
