//! Caller identity.

use crate::uuids::TypedUuid;

/// Marker for identities issued by the external auth provider.
#[derive(Debug)]
pub struct User;

/// Stable caller identity. The auth layer supplies it; nothing in this crate
/// validates credentials.
pub type UserUuid = TypedUuid<User>;
