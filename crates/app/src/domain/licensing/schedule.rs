//! License fees and validity windows.

use jiff::{SignedDuration, Timestamp};

use crate::domain::licensing::records::DogUuid;

/// How far ahead of expiration renewal is offered.
pub const RENEWAL_NOTICE_WINDOW: SignedDuration = SignedDuration::from_hours(30 * 24);

/// Fee schedule and license period for the municipality.
///
/// Kept as data so a fee change is a deployment setting rather than a code
/// edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LicensingPolicy {
    /// Annual fee for spayed/neutered dogs, in whole dollars.
    pub fee_altered: u32,

    /// Annual fee for intact dogs, in whole dollars.
    pub fee_intact: u32,

    /// License validity in days of exactly 24 hours.
    pub period_days: u32,
}

impl Default for LicensingPolicy {
    fn default() -> Self {
        Self {
            fee_altered: 15,
            fee_intact: 25,
            period_days: 365,
        }
    }
}

/// Computed terms for one license issue or renewal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LicenseTerms {
    /// Annual fee in whole dollars.
    pub fee: u32,

    /// Issue instant.
    pub issued_at: Timestamp,

    /// Expiration instant, exactly `period_days` x 24h after issue.
    pub expires_at: Timestamp,
}

impl LicensingPolicy {
    /// Terms for a license issued at `now`.
    ///
    /// Pure: the fee depends only on the spay/neuter flag, and the window is
    /// absolute-time arithmetic with no calendar or leap adjustment.
    #[must_use]
    pub fn terms(&self, spayed_neutered: bool, now: Timestamp) -> LicenseTerms {
        let fee = if spayed_neutered {
            self.fee_altered
        } else {
            self.fee_intact
        };

        let period = SignedDuration::from_hours(24 * i64::from(self.period_days));

        LicenseTerms {
            fee,
            issued_at: now,
            expires_at: now
                .saturating_add(period)
                .expect("SignedDuration has no units greater than hours"),
        }
    }
}

/// License number as printed on tags: `FC-<issue epoch millis>-<dog id tail>`.
///
/// The same instant feeds the number and the stored issue date.
#[must_use]
pub fn license_number(dog: DogUuid, issued_at: Timestamp) -> String {
    format!("FC-{}-{}", issued_at.as_millisecond(), dog.short_suffix())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_uses_altered_rate_when_spayed_neutered() {
        let terms = LicensingPolicy::default().terms(true, Timestamp::now());

        assert_eq!(terms.fee, 15);
    }

    #[test]
    fn fee_uses_intact_rate_otherwise() {
        let terms = LicensingPolicy::default().terms(false, Timestamp::now());

        assert_eq!(terms.fee, 25);
    }

    #[test]
    fn expiration_is_exactly_365_days_out() {
        let now = Timestamp::now();
        let terms = LicensingPolicy::default().terms(false, now);

        assert_eq!(terms.issued_at, now);
        assert_eq!(
            terms.expires_at.duration_since(terms.issued_at),
            SignedDuration::from_hours(365 * 24)
        );
    }

    #[test]
    fn expiration_window_in_milliseconds_has_no_calendar_adjustment() {
        let issued = Timestamp::UNIX_EPOCH;
        let terms = LicensingPolicy::default().terms(true, issued);

        assert_eq!(
            terms.expires_at.as_millisecond() - issued.as_millisecond(),
            365 * 24 * 60 * 60 * 1000
        );
    }

    #[test]
    fn policy_overrides_apply_to_terms() {
        let policy = LicensingPolicy {
            fee_altered: 10,
            fee_intact: 40,
            period_days: 30,
        };

        let now = Timestamp::now();
        let terms = policy.terms(false, now);

        assert_eq!(terms.fee, 40);
        assert_eq!(
            terms.expires_at.duration_since(now),
            SignedDuration::from_hours(30 * 24)
        );
    }

    #[test]
    fn license_number_embeds_issue_millis_and_dog_tail() {
        let dog = DogUuid::new();
        let issued_at = Timestamp::from_millisecond(1_700_000_000_000).expect("valid instant");

        let number = license_number(dog, issued_at);

        assert_eq!(
            number,
            format!("FC-1700000000000-{}", dog.short_suffix())
        );
    }

    #[test]
    fn renewal_notice_window_is_thirty_days() {
        assert_eq!(RENEWAL_NOTICE_WINDOW, SignedDuration::from_hours(30 * 24));
    }
}
