//! Human-readable rendering of ledger contents.

use crate::error::LedgerError;
use crate::ledger::SubscriptionManager;
use crate::types::Subscription;

/// One listing line, e.g.
/// `- Netflix: $15.00/mo, renewal date 2025-01-31, active`.
pub fn format_subscription(sub: &Subscription) -> String {
    let status = if sub.is_active() { "active" } else { "cancelled" };
    format!(
        "- {}: ${:.2}/mo, renewal date {}, {}",
        sub.name(),
        sub.cost(),
        sub.renewal_date(),
        status
    )
}

/// One line per subscription, or a placeholder when there are none.
pub fn format_listing(subs: &[&Subscription]) -> String {
    if subs.is_empty() {
        return "No subscriptions found.".to_string();
    }
    subs.iter()
        .map(|sub| format_subscription(sub))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Active cost and savings lines.
pub fn format_totals(manager: &SubscriptionManager) -> String {
    format!(
        "Total monthly cost of active subscriptions: ${:.2}\n\
         Total monthly savings from cancelled subscriptions: ${:.2}",
        manager.total_monthly_cost(true),
        manager.total_savings()
    )
}

/// User-facing message for a ledger error.
pub fn describe_error(err: &LedgerError) -> String {
    match err {
        LedgerError::DuplicateName(name) => format!("Subscription '{}' already exists.", name),
        LedgerError::NotFound(name) => format!("Subscription '{}' does not exist.", name),
    }
}
