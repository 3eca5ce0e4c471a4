//! Entity gateways
//!
//! A [`Gateway`] is what a screen talks to. It wraps a repository for one
//! entity type, turns every storage error into a plain failure value (`false`,
//! an empty list or `None`) with a log line, and announces successful
//! mutations on the shared [`ChangeNotifier`] so other open lists reload.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::Postgres;
use std::error::Error;
use std::marker::PhantomData;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::models::{EmployeeModel, Entity, ProductModel, TransactionModel};
use crate::repository::{AdjustStock, EntityRepository, FindByClientId, FindByGoogleAccount};
use crate::sync::{ChangeKind, ChangeNotifier, DataChanged, ListSource};
use crate::utils::id_generator::generate_next_id;

pub struct Gateway<T, R> {
    repository: Arc<R>,
    notifier: ChangeNotifier,
    _entity: PhantomData<fn() -> T>,
}

impl<T, R> Clone for Gateway<T, R> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            notifier: self.notifier.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T, R> Gateway<T, R>
where
    T: Entity,
    R: EntityRepository<Postgres, T>,
{
    pub fn new(repository: Arc<R>, notifier: ChangeNotifier) -> Self {
        Self {
            repository,
            notifier,
            _entity: PhantomData,
        }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    pub fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }

    pub async fn load_all(&self) -> Vec<T> {
        match self.repository.load_all().await {
            Ok(rows) => {
                debug!(entity = %T::KIND, count = rows.len(), "Loaded all");
                rows
            }
            Err(e) => {
                error!(entity = %T::KIND, error = %e, "Failed to load");
                Vec::new()
            }
        }
    }

    pub async fn get_by_id(&self, id: &str) -> Option<T> {
        match self.repository.find_by_id(id).await {
            Ok(Some(item)) => Some(item),
            Ok(None) => {
                warn!(entity = %T::KIND, id, "Not found");
                None
            }
            Err(e) => {
                error!(entity = %T::KIND, id, error = %e, "Failed to load by id");
                None
            }
        }
    }

    /// [`get_by_id`](Self::get_by_id) that gives up as soon as `cancel` fires,
    /// discarding whatever the store would have returned.
    pub async fn get_by_id_cancellable(&self, id: &str, cancel: &CancellationToken) -> Option<T> {
        tokio::select! {
            _ = cancel.cancelled() => {
                debug!(entity = %T::KIND, id, "Load cancelled");
                None
            }
            item = self.get_by_id(id) => {
                if cancel.is_cancelled() { None } else { item }
            }
        }
    }

    pub async fn insert(&self, item: T) -> bool {
        let id = item.get_id().to_string();
        match self.repository.create(item).await {
            Ok(_) => {
                info!(entity = %T::KIND, id = %id, "Inserted");
                self.announce(ChangeKind::Created, id);
                true
            }
            Err(e) => {
                error!(entity = %T::KIND, id = %id, error = %e, "Insert failed");
                false
            }
        }
    }

    pub async fn update(&self, item: T) -> bool {
        let id = item.get_id().to_string();
        match self.repository.update(item).await {
            Ok(_) => {
                info!(entity = %T::KIND, id = %id, "Updated");
                self.announce(ChangeKind::Updated, id);
                true
            }
            Err(e) => {
                error!(entity = %T::KIND, id = %id, error = %e, "Update failed");
                false
            }
        }
    }

    /// `false` both on failure and when nothing had that id.
    pub async fn delete(&self, id: &str) -> bool {
        match self.repository.delete(id).await {
            Ok(0) => {
                warn!(entity = %T::KIND, id, "Nothing to delete");
                false
            }
            Ok(_) => {
                info!(entity = %T::KIND, id, "Deleted");
                self.announce(ChangeKind::Deleted, id.to_string());
                true
            }
            Err(e) => {
                error!(entity = %T::KIND, id, error = %e, "Delete failed");
                false
            }
        }
    }

    /// Next free identifier for this entity, e.g. `CID-00042`.
    ///
    /// If the ids cannot be loaded the result is timestamp based.
    pub async fn next_id(&self) -> String {
        let ids = match self.repository.load_ids().await {
            Ok(ids) => ids,
            Err(e) => {
                error!(entity = %T::KIND, error = %e, "Failed to load ids");
                return crate::utils::id_generator::timestamp_id(T::ID_PREFIX);
            }
        };
        generate_next_id(T::ID_PREFIX, ids)
    }

    fn announce(&self, change: ChangeKind, id: String) {
        self.notifier.publish(DataChanged {
            entity: T::KIND,
            change,
            id,
        });
    }
}

impl<R> Gateway<ProductModel, R>
where
    R: EntityRepository<Postgres, ProductModel> + AdjustStock<Postgres>,
{
    /// Atomically add `delta` to the product's quantity; `None` if the product
    /// is missing, the result would be negative, or the store failed.
    pub async fn adjust_stock(&self, product_id: &str, delta: Decimal) -> Option<Decimal> {
        match self.repository.adjust_quantity(product_id, delta).await {
            Ok(Some(quantity)) => {
                info!(product_id, %delta, %quantity, "Stock adjusted");
                self.announce(ChangeKind::StockAdjusted, product_id.to_string());
                Some(quantity)
            }
            Ok(None) => {
                warn!(product_id, %delta, "Stock not adjusted: unknown product or insufficient quantity");
                None
            }
            Err(e) => {
                error!(product_id, %delta, error = %e, "Stock adjustment failed");
                None
            }
        }
    }
}

impl<R> Gateway<EmployeeModel, R>
where
    R: EntityRepository<Postgres, EmployeeModel> + FindByGoogleAccount<Postgres>,
{
    pub async fn find_by_google_account(&self, account: &str) -> Option<EmployeeModel> {
        match self.repository.find_by_google_account(account).await {
            Ok(found) => found,
            Err(e) => {
                error!(account, error = %e, "Employee lookup by Google account failed");
                None
            }
        }
    }
}

impl<R> Gateway<TransactionModel, R>
where
    R: EntityRepository<Postgres, TransactionModel> + FindByClientId<Postgres>,
{
    pub async fn find_by_client(&self, client_id: &str) -> Vec<TransactionModel> {
        match self.repository.find_by_client_id(client_id).await {
            Ok(rows) => rows,
            Err(e) => {
                error!(client_id, error = %e, "Failed to load client transactions");
                Vec::new()
            }
        }
    }
}

/// Live lists need to tell an empty table from a failed load, so this skips
/// the error swallowing of [`Gateway::load_all`].
#[async_trait]
impl<T, R> ListSource<T> for Gateway<T, R>
where
    T: Entity,
    R: EntityRepository<Postgres, T>,
{
    async fn fetch(&self) -> Result<Vec<T>, Box<dyn Error + Send + Sync>> {
        self.repository.load_all().await
    }
}
