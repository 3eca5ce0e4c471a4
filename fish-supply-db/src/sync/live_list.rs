use async_trait::async_trait;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::models::{Entity, EntityKind};
use crate::sync::notifier::{ChangeNotice, ChangeSubscription};
use crate::utils::filter::{Filterable, RowFilter};

/// Anything that can produce the full list of rows for a view.
#[async_trait]
pub trait ListSource<T>: Send + Sync {
    async fn fetch(&self) -> Result<Vec<T>, Box<dyn Error + Send + Sync>>;
}

/// How often an initial load is retried while it comes back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_millis(500),
        }
    }
}

/// The rows behind one open list screen.
///
/// Holds the last successfully loaded rows, filters them locally and reloads
/// them when a relevant change is announced.
pub struct LiveList<T> {
    source: Arc<dyn ListSource<T>>,
    rows: RwLock<Vec<T>>,
    watched: Vec<EntityKind>,
    retry: RetryPolicy,
}

impl<T> LiveList<T>
where
    T: Entity + Filterable,
{
    /// A list of `T`, reloading on changes to `T`.
    pub fn new(source: Arc<dyn ListSource<T>>) -> Self {
        Self {
            source,
            rows: RwLock::new(Vec::new()),
            watched: vec![T::KIND],
            retry: RetryPolicy::default(),
        }
    }

    /// Also reload on changes to `kind`, e.g. products after a sale.
    pub fn also_watch(mut self, kind: EntityKind) -> Self {
        if !self.watched.contains(&kind) {
            self.watched.push(kind);
        }
        self
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Initial load: retry while the source returns nothing or fails.
    ///
    /// Returns the number of rows now held. If every attempt came back empty
    /// the list is empty; if the last attempt failed, the previous rows are
    /// kept and the error is returned.
    pub async fn load_with_retry(&self) -> Result<usize, Box<dyn Error + Send + Sync>> {
        let attempts = self.retry.max_attempts.max(1);
        let mut last_error = None;

        for attempt in 1..=attempts {
            match self.source.fetch().await {
                Ok(rows) if !rows.is_empty() => {
                    let count = rows.len();
                    *self.rows.write().await = rows;
                    debug!(entity = %T::KIND, attempt, count, "List loaded");
                    return Ok(count);
                }
                Ok(_) => {
                    debug!(entity = %T::KIND, attempt, "List load returned no rows");
                    last_error = None;
                }
                Err(e) => {
                    warn!(entity = %T::KIND, attempt, error = %e, "List load failed");
                    last_error = Some(e);
                }
            }
            if attempt < attempts {
                tokio::time::sleep(self.retry.delay).await;
            }
        }

        match last_error {
            Some(e) => Err(e),
            None => {
                self.rows.write().await.clear();
                Ok(0)
            }
        }
    }

    /// Single reload; an empty result replaces the rows.
    pub async fn refresh(&self) -> Result<usize, Box<dyn Error + Send + Sync>> {
        let rows = self.source.fetch().await?;
        let count = rows.len();
        *self.rows.write().await = rows;
        Ok(count)
    }

    pub async fn rows(&self) -> Vec<T> {
        self.rows.read().await.clone()
    }

    pub async fn filtered(&self, filter: &RowFilter) -> Vec<T> {
        filter.apply(&self.rows.read().await)
    }

    pub fn is_relevant(&self, notice: &ChangeNotice) -> bool {
        notice.affects(&self.watched)
    }

    /// Reload on every relevant notice until `cancel` fires or the notifier
    /// goes away. Returns the number of reloads attempted.
    pub async fn watch(&self, mut subscription: ChangeSubscription, cancel: CancellationToken) -> usize {
        let mut reloads = 0;
        loop {
            tokio::select! {
                biased;
                notice = subscription.next() => match notice {
                    Some(notice) if self.is_relevant(&notice) => {
                        reloads += 1;
                        match self.refresh().await {
                            Ok(count) => debug!(entity = %T::KIND, count, "List reloaded after change"),
                            Err(e) => warn!(entity = %T::KIND, error = %e, "List reload failed, keeping previous rows"),
                        }
                    }
                    Some(_) => {}
                    None => break,
                },
                _ = cancel.cancelled() => break,
            }
        }
        info!(entity = %T::KIND, reloads, "Stopped watching for changes");
        reloads
    }
}
