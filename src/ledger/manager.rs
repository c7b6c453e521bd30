//! Subscription manager implementation.

use crate::error::{LedgerError, Result};
use crate::types::{today, CostSummary, Subscription, RENEWAL_PERIOD_DAYS};
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Ledger configuration.
#[derive(Clone, Debug)]
pub struct LedgerConfig {
    /// Days added to the reference date when a subscription is renewed.
    /// Default: 30
    pub renewal_period_days: u32,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            renewal_period_days: RENEWAL_PERIOD_DAYS,
        }
    }
}

/// Owns a name-keyed collection of subscriptions.
///
/// Iteration, listing and auto-cancel all follow the order in which
/// subscriptions were added.
#[derive(Clone, Debug, Default)]
pub struct SubscriptionManager {
    config: LedgerConfig,

    /// Subscriptions by name.
    subscriptions: HashMap<String, Subscription>,

    /// Names in insertion order. Always holds exactly the keys of
    /// `subscriptions`.
    order: Vec<String>,
}

impl SubscriptionManager {
    /// Create an empty manager with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty manager with a custom configuration.
    pub fn with_config(config: LedgerConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Add a subscription, keyed by its name.
    ///
    /// Fails with [`LedgerError::DuplicateName`] if the name is taken; the
    /// existing entry is left untouched.
    pub fn add(&mut self, subscription: Subscription) -> Result<()> {
        if self.subscriptions.contains_key(subscription.name()) {
            warn!(name = subscription.name(), "rejected duplicate subscription");
            return Err(LedgerError::DuplicateName(subscription.name().to_string()));
        }

        let name = subscription.name().to_string();
        debug!(name = %name, cost = subscription.cost(), "added subscription");
        self.order.push(name.clone());
        self.subscriptions.insert(name, subscription);
        Ok(())
    }

    /// Remove a subscription by name, returning it.
    pub fn remove(&mut self, name: &str) -> Result<Subscription> {
        let subscription = self
            .subscriptions
            .remove(name)
            .ok_or_else(|| LedgerError::NotFound(name.to_string()))?;

        self.order.retain(|n| n != name);
        debug!(name, "removed subscription");
        Ok(subscription)
    }

    /// Get a subscription by name.
    pub fn get(&self, name: &str) -> Result<&Subscription> {
        self.subscriptions
            .get(name)
            .ok_or_else(|| LedgerError::NotFound(name.to_string()))
    }

    /// Get a mutable handle to a manager-owned subscription.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Subscription> {
        self.subscriptions
            .get_mut(name)
            .ok_or_else(|| LedgerError::NotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.subscriptions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Iterate over all subscriptions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Subscription> + '_ {
        self.order
            .iter()
            .filter_map(move |name| self.subscriptions.get(name))
    }

    /// List subscriptions in insertion order, optionally only active ones.
    pub fn list(&self, active_only: bool) -> Vec<&Subscription> {
        self.iter()
            .filter(|sub| !active_only || sub.is_active())
            .collect()
    }

    /// Active subscriptions whose renewal date is on or before `date`.
    pub fn due_on_or_before(&self, date: NaiveDate) -> Vec<&Subscription> {
        self.iter().filter(|sub| sub.is_due(date)).collect()
    }

    /// Cancel every active subscription whose renewal date is on or before
    /// `reference_date` (today when `None`).
    ///
    /// The reference date is resolved once for the whole pass. Returns the
    /// names cancelled, in insertion order.
    pub fn auto_cancel(&mut self, reference_date: Option<NaiveDate>) -> Vec<String> {
        let date = reference_date.unwrap_or_else(today);
        let mut cancelled = Vec::new();

        for name in &self.order {
            if let Some(sub) = self.subscriptions.get_mut(name) {
                if sub.is_due(date) {
                    sub.cancel();
                    cancelled.push(name.clone());
                }
            }
        }

        info!(%date, cancelled = cancelled.len(), "auto-cancel pass complete");
        cancelled
    }

    /// Reactivate a subscription and push its renewal date one period past
    /// `reference_date` (today when `None`).
    pub fn renew(&mut self, name: &str, reference_date: Option<NaiveDate>) -> Result<()> {
        let period = self.config.renewal_period_days;
        let sub = self.get_mut(name)?;
        sub.renew_for(reference_date, period);
        debug!(name, renewal_date = %sub.renewal_date(), "renewed subscription");
        Ok(())
    }

    /// Cancel a subscription by name.
    pub fn cancel(&mut self, name: &str) -> Result<()> {
        self.get_mut(name)?.cancel();
        debug!(name, "cancelled subscription");
        Ok(())
    }

    /// Sum of monthly cost over all subscriptions, or only active ones.
    pub fn total_monthly_cost(&self, active_only: bool) -> f64 {
        self.iter()
            .filter(|sub| !active_only || sub.is_active())
            .map(Subscription::cost)
            .sum()
    }

    /// Sum of monthly cost over cancelled subscriptions.
    pub fn total_savings(&self) -> f64 {
        self.iter()
            .filter(|sub| !sub.is_active())
            .map(Subscription::cost)
            .sum()
    }

    /// Counts and totals in a single pass.
    pub fn summary(&self) -> CostSummary {
        self.iter().fold(CostSummary::default(), |mut acc, sub| {
            acc.total_monthly_cost += sub.cost();
            if sub.is_active() {
                acc.active_count += 1;
                acc.active_monthly_cost += sub.cost();
            } else {
                acc.cancelled_count += 1;
                acc.savings += sub.cost();
            }
            acc
        })
    }
}

impl<'a> IntoIterator for &'a SubscriptionManager {
    type Item = &'a Subscription;
    type IntoIter = Box<dyn Iterator<Item = &'a Subscription> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
