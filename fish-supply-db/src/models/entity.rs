use serde::{Deserialize, Serialize};
use std::fmt;

use super::identifiable::Identifiable;

/// The kinds of records the application stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Client,
    Supplier,
    Employee,
    Product,
    Transaction,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Client => write!(f, "Client"),
            EntityKind::Supplier => write!(f, "Supplier"),
            EntityKind::Employee => write!(f, "Employee"),
            EntityKind::Product => write!(f, "Product"),
            EntityKind::Transaction => write!(f, "Transaction"),
        }
    }
}

/// A stored record with a kind and an identifier prefix for new keys.
pub trait Entity: Identifiable + Clone + Send + Sync + 'static {
    const KIND: EntityKind;

    /// Prefix used when generating identifiers, e.g. `PID-`
    const ID_PREFIX: &'static str;
}
