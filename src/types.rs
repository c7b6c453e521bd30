//! Core types for the subscription ledger.

use chrono::{Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Length of one billing period, in days.
///
/// Renewal moves the renewal date forward by a flat number of days rather
/// than by a calendar month, so Jan 31 renews to Mar 2 (or Mar 1 in a leap
/// year), never to the end of February.
pub const RENEWAL_PERIOD_DAYS: u32 = 30;

/// Current UTC date.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// `date` moved forward by `days`, clamped to the last representable date.
pub(crate) fn add_days(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX)
}

/// A named recurring charge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    /// Identifier, unique within a manager.
    name: String,

    /// Monthly cost.
    cost: f64,

    /// Next date on which the subscription lapses unless acted upon.
    renewal_date: NaiveDate,

    /// False once cancelled.
    active: bool,
}

impl Subscription {
    /// Create an active subscription.
    pub fn new(name: impl Into<String>, cost: f64, renewal_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            cost,
            renewal_date,
            active: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn renewal_date(&self) -> NaiveDate {
        self.renewal_date
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether this subscription is active and lapses on or before `date`.
    pub fn is_due(&self, date: NaiveDate) -> bool {
        self.active && self.renewal_date <= date
    }

    /// Mark the subscription as cancelled.
    ///
    /// The renewal date is kept so it can still be inspected.
    pub fn cancel(&mut self) {
        self.active = false;
    }

    /// Reactivate and set the renewal date one period past `reference_date`
    /// (today when `None`).
    ///
    /// The new date is always relative to the reference date, never to the
    /// previously stored renewal date.
    pub fn renew(&mut self, reference_date: Option<NaiveDate>) {
        self.renew_for(reference_date, RENEWAL_PERIOD_DAYS);
    }

    /// Like [`renew`](Self::renew) with an explicit period length.
    pub fn renew_for(&mut self, reference_date: Option<NaiveDate>, period_days: u32) {
        let base = reference_date.unwrap_or_else(today);
        self.active = true;
        self.renewal_date = add_days(base, period_days);
    }
}

/// Aggregate cost figures for a ledger.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CostSummary {
    /// Number of active subscriptions.
    pub active_count: usize,
    /// Number of cancelled subscriptions.
    pub cancelled_count: usize,
    /// Monthly cost of active subscriptions.
    pub active_monthly_cost: f64,
    /// Monthly cost of every subscription, active or not.
    pub total_monthly_cost: f64,
    /// Monthly cost no longer being paid (cancelled subscriptions).
    pub savings: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_is_active() {
        let sub = Subscription::new("Netflix", 15.0, date(2025, 1, 1));
        assert!(sub.is_active());
        assert_eq!(sub.name(), "Netflix");
        assert_eq!(sub.cost(), 15.0);
        assert_eq!(sub.renewal_date(), date(2025, 1, 1));
    }

    #[test]
    fn test_cancel_and_renew() {
        let today = date(2025, 1, 1);
        let mut sub = Subscription::new("Netflix", 15.0, today);

        sub.cancel();
        assert!(!sub.is_active());
        assert_eq!(sub.renewal_date(), today);

        sub.renew(Some(today));
        assert!(sub.is_active());
        assert_eq!(sub.renewal_date(), date(2025, 1, 31));
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut sub = Subscription::new("Hulu", 12.0, date(2025, 1, 1));
        sub.cancel();
        let once = sub.clone();
        sub.cancel();
        assert_eq!(sub, once);
    }

    #[test]
    fn test_renew_is_flat_thirty_days() {
        let mut sub = Subscription::new("Spotify", 10.0, date(2025, 1, 31));
        sub.renew(Some(date(2025, 1, 31)));
        assert_eq!(sub.renewal_date(), date(2025, 3, 2));

        sub.renew(Some(date(2024, 1, 31)));
        assert_eq!(sub.renewal_date(), date(2024, 3, 1));
    }

    #[test]
    fn test_renew_does_not_accumulate() {
        let mut sub = Subscription::new("Spotify", 10.0, date(2025, 6, 1));
        sub.renew(Some(date(2025, 1, 1)));
        sub.renew(Some(date(2025, 1, 1)));
        assert_eq!(sub.renewal_date(), date(2025, 1, 31));
    }

    #[test]
    fn test_renew_active_subscription() {
        let mut sub = Subscription::new("Spotify", 10.0, date(2025, 1, 1));
        sub.renew(Some(date(2025, 2, 1)));
        assert!(sub.is_active());
        assert_eq!(sub.renewal_date(), date(2025, 3, 3));
    }

    #[test]
    fn test_renew_without_date_uses_clock() {
        let mut sub = Subscription::new("Spotify", 10.0, date(2000, 1, 1));
        let before = today();
        sub.renew(None);
        let after = today();
        assert!(sub.renewal_date() >= add_days(before, RENEWAL_PERIOD_DAYS));
        assert!(sub.renewal_date() <= add_days(after, RENEWAL_PERIOD_DAYS));
    }

    #[test]
    fn test_renew_for_custom_period() {
        let mut sub = Subscription::new("Gym", 40.0, date(2025, 1, 1));
        sub.renew_for(Some(date(2025, 1, 1)), 7);
        assert_eq!(sub.renewal_date(), date(2025, 1, 8));
    }

    #[test]
    fn test_add_days_saturates() {
        assert_eq!(add_days(NaiveDate::MAX, 30), NaiveDate::MAX);
    }

    #[test]
    fn test_is_due() {
        let mut sub = Subscription::new("Hulu", 12.0, date(2025, 1, 1));
        assert!(sub.is_due(date(2025, 1, 1)));
        assert!(sub.is_due(date(2025, 1, 2)));
        assert!(!sub.is_due(date(2024, 12, 31)));

        sub.cancel();
        assert!(!sub.is_due(date(2025, 1, 2)));
    }
}
