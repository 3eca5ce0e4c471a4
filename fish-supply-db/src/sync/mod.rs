//! Keeping open list views in step with the store.
//!
//! Gateways publish a [`DataChanged`] after every successful mutation; each
//! live list holds a [`ChangeSubscription`] and reloads when a relevant
//! change arrives. Delivery is best effort: a list created after the event
//! simply loads fresh data when it starts.

pub mod live_list;
pub mod notifier;

pub use live_list::*;
pub use notifier::*;
