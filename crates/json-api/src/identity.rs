//! Caller identity plumbing.

use fircrest_app::identity::UserUuid;
use salvo::prelude::{Depot, StatusError};

const IDENTITY_KEY: &str = "fircrest.identity";

/// Depot helpers for the caller identity injected by the auth middleware.
pub(crate) trait IdentityDepotExt {
    fn insert_identity(&mut self, user: UserUuid);

    /// The caller identity, when the request carried one.
    fn identity(&self) -> Option<UserUuid>;

    /// The caller identity, or a 401 for operations that require one.
    fn identity_or_401(&self) -> Result<UserUuid, StatusError>;
}

impl IdentityDepotExt for Depot {
    fn insert_identity(&mut self, user: UserUuid) {
        self.insert(IDENTITY_KEY, user);
    }

    fn identity(&self) -> Option<UserUuid> {
        self.get::<UserUuid>(IDENTITY_KEY).ok().copied()
    }

    fn identity_or_401(&self) -> Result<UserUuid, StatusError> {
        self.identity()
            .ok_or_else(|| StatusError::unauthorized().brief("Authentication required"))
    }
}
