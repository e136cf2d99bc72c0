//! Licensing Config

use clap::Args;
use fircrest_app::domain::licensing::schedule::LicensingPolicy;

/// Fee schedule and license period settings.
#[derive(Debug, Args)]
pub struct LicensingConfig {
    /// Annual fee for spayed/neutered dogs, in whole dollars
    #[arg(long, env = "LICENSE_FEE_ALTERED", default_value_t = 15)]
    pub fee_altered: u32,

    /// Annual fee for intact dogs, in whole dollars
    #[arg(long, env = "LICENSE_FEE_INTACT", default_value_t = 25)]
    pub fee_intact: u32,

    /// License validity in days
    #[arg(long, env = "LICENSE_PERIOD_DAYS", default_value_t = 365)]
    pub license_period_days: u32,
}

impl LicensingConfig {
    /// The policy handed to the licensing service.
    #[must_use]
    pub fn policy(&self) -> LicensingPolicy {
        LicensingPolicy {
            fee_altered: self.fee_altered,
            fee_intact: self.fee_intact,
            period_days: self.license_period_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_standard_policy() {
        let config = LicensingConfig {
            fee_altered: 15,
            fee_intact: 25,
            license_period_days: 365,
        };

        assert_eq!(config.policy(), LicensingPolicy::default());
    }
}
