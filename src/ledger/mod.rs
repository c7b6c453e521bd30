//! Subscription ledger.
//!
//! [`SubscriptionManager`] owns every subscription it is given and mediates
//! all lifecycle transitions:
//! - Adding and removing by unique name
//! - Cancelling and renewing by name
//! - Bulk auto-cancel of subscriptions past their renewal date
//! - Cost and savings totals
//!
//! # Example
//!
//! ```ignore
//! let mut manager = SubscriptionManager::new();
//! manager.add(Subscription::new("Netflix", 15.0, renewal))?;
//!
//! // Cancel everything due today or earlier
//! let cancelled = manager.auto_cancel(Some(today));
//!
//! // Bring one back for another period
//! manager.renew("Netflix", Some(today))?;
//! ```

mod manager;

pub use manager::{LedgerConfig, SubscriptionManager};
