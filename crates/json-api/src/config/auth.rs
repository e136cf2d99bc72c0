//! Auth Config

use clap::Args;

/// Identity header settings.
///
/// Credential validation happens in the auth gateway in front of this
/// service; this is only the name of the header it forwards identities in.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Request header carrying the gateway-verified caller identity
    #[arg(long, env = "AUTH_IDENTITY_HEADER", default_value = "x-auth-user")]
    pub identity_header: String,
}
