//! # Subscription Ledger
//!
//! An in-memory ledger of recurring subscriptions.
//!
//! ## Core Concepts
//!
//! - **Subscriptions**: A named monthly charge with a renewal date and an
//!   active/cancelled flag
//! - **Manager**: Sole owner of a name-keyed, insertion-ordered collection
//! - **Auto-cancel**: Deactivates everything whose renewal date has passed
//! - **Renew**: Reactivates and pushes the renewal date a flat 30 days out
//! - **Savings**: Monthly cost of everything cancelled
//!
//! Time-sensitive operations take an optional reference date; `None` falls
//! back to the current UTC date.
//!
//! ## Example
//!
//! ```ignore
//! use subscription_ledger::{Subscription, SubscriptionManager};
//!
//! let mut manager = SubscriptionManager::new();
//! manager.add(Subscription::new("Netflix", 15.0, jan_1))?;
//!
//! manager.auto_cancel(Some(jan_1));
//! assert_eq!(manager.total_savings(), 15.0);
//!
//! manager.renew("Netflix", Some(jan_1))?;
//! assert_eq!(manager.get("Netflix")?.renewal_date(), jan_31);
//! ```

pub mod error;
pub mod input;
pub mod ledger;
pub mod report;
pub mod types;

// Re-exports
pub use error::{InputError, LedgerError, Result};
pub use ledger::{LedgerConfig, SubscriptionManager};
pub use types::*;
