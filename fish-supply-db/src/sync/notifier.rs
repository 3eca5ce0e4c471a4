use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};
use tracing::debug;

use crate::models::EntityKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeKind {
    Created,
    Updated,
    Deleted,
    StockAdjusted,
}

/// A successful mutation of one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataChanged {
    pub entity: EntityKind,
    pub change: ChangeKind,
    pub id: String,
}

/// What a subscriber sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeNotice {
    Changed(DataChanged),
    /// The subscriber fell behind and `n` events were dropped; it should
    /// assume anything changed.
    Missed(u64),
}

impl ChangeNotice {
    pub fn affects(&self, kinds: &[EntityKind]) -> bool {
        match self {
            ChangeNotice::Changed(event) => kinds.contains(&event.entity),
            ChangeNotice::Missed(_) => true,
        }
    }
}

/// Broadcasts [`DataChanged`] events to every live subscription.
///
/// Cloning shares the same channel. The channel closes once every clone is
/// dropped.
#[derive(Debug, Clone)]
pub struct ChangeNotifier {
    sender: broadcast::Sender<DataChanged>,
}

impl ChangeNotifier {
    pub const DEFAULT_CAPACITY: usize = 64;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Send `event` to current subscribers and return how many received it.
    pub fn publish(&self, event: DataChanged) -> usize {
        match self.sender.send(event) {
            Ok(receivers) => receivers,
            Err(broadcast::error::SendError(event)) => {
                debug!(entity = %event.entity, id = %event.id, "No live subscribers for change");
                0
            }
        }
    }

    /// Start receiving events published from now on. Drop the subscription
    /// to unsubscribe.
    pub fn subscribe(&self) -> ChangeSubscription {
        ChangeSubscription {
            receiver: self.sender.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct ChangeSubscription {
    receiver: broadcast::Receiver<DataChanged>,
}

impl ChangeSubscription {
    /// Wait for the next notice; `None` once every notifier is gone.
    pub async fn next(&mut self) -> Option<ChangeNotice> {
        match self.receiver.recv().await {
            Ok(event) => Some(ChangeNotice::Changed(event)),
            Err(RecvError::Lagged(missed)) => Some(ChangeNotice::Missed(missed)),
            Err(RecvError::Closed) => None,
        }
    }

    /// Non-blocking variant of [`next`](Self::next); `None` when nothing is queued.
    pub fn try_next(&mut self) -> Option<ChangeNotice> {
        match self.receiver.try_recv() {
            Ok(event) => Some(ChangeNotice::Changed(event)),
            Err(TryRecvError::Lagged(missed)) => Some(ChangeNotice::Missed(missed)),
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => None,
        }
    }
}
