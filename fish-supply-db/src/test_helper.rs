//! In-memory doubles for exercising gateways and live lists without a database.

use async_trait::async_trait;
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use sqlx::Postgres;
use std::collections::{BTreeMap, VecDeque};
use std::error::Error;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::models::{ClientModel, Entity, ProductModel};
use crate::repository::{AdjustStock, Create, Delete, FindById, LoadAll, LoadIds, Update};
use crate::sync::ListSource;

pub fn create_test_client(id: &str, name: &str) -> ClientModel {
    ClientModel {
        client_id: HeaplessString::try_from(id).unwrap(),
        name: HeaplessString::try_from(name).unwrap(),
        contact: HeaplessString::try_from("0917 555 0101").unwrap(),
        address: HeaplessString::try_from("Pier 4, Harbor Road").unwrap(),
        category: HeaplessString::try_from("Retail").unwrap(),
    }
}

pub fn create_test_product(id: &str, quantity: i64, unit_price: i64) -> ProductModel {
    ProductModel {
        product_id: HeaplessString::try_from(id).unwrap(),
        name: HeaplessString::try_from("Yellowfin Tuna").unwrap(),
        grade: HeaplessString::try_from("A").unwrap(),
        quantity: Decimal::from(quantity),
        unit_price: Decimal::from(unit_price),
        supplier_id: None,
    }
}

/// Returns the scripted results in order, then empty lists.
pub struct ScriptedSource<T> {
    script: Mutex<VecDeque<Result<Vec<T>, String>>>,
    calls: AtomicUsize,
}

impl<T> ScriptedSource<T> {
    pub fn new(script: Vec<Result<Vec<T>, String>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<T: Send + Sync> ListSource<T> for ScriptedSource<T> {
    async fn fetch(&self) -> Result<Vec<T>, Box<dyn Error + Send + Sync>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Ok(rows)) => Ok(rows),
            Some(Err(message)) => Err(message.into()),
            None => Ok(Vec::new()),
        }
    }
}

/// A keyed map behaving like a table; `set_failing(true)` makes every call error.
pub struct MemoryRepository<T> {
    rows: Mutex<BTreeMap<String, T>>,
    failing: AtomicBool,
}

impl<T: Entity> MemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            failing: AtomicBool::new(false),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        if self.failing.load(Ordering::SeqCst) {
            Err("connection refused".into())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl<T: Entity> LoadAll<Postgres, T> for MemoryRepository<T> {
    async fn load_all(&self) -> Result<Vec<T>, Box<dyn Error + Send + Sync>> {
        self.check()?;
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }
}

#[async_trait]
impl<T: Entity> FindById<Postgres, T> for MemoryRepository<T> {
    async fn find_by_id(&self, id: &str) -> Result<Option<T>, Box<dyn Error + Send + Sync>> {
        self.check()?;
        Ok(self.rows.lock().unwrap().get(id).cloned())
    }
}

#[async_trait]
impl<T: Entity> Create<Postgres, T> for MemoryRepository<T> {
    async fn create(&self, item: T) -> Result<T, Box<dyn Error + Send + Sync>> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(item.get_id()) {
            return Err(format!("duplicate key {}", item.get_id()).into());
        }
        rows.insert(item.get_id().to_string(), item.clone());
        Ok(item)
    }
}

#[async_trait]
impl<T: Entity> Update<Postgres, T> for MemoryRepository<T> {
    async fn update(&self, item: T) -> Result<T, Box<dyn Error + Send + Sync>> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(item.get_id()) {
            Some(existing) => {
                *existing = item.clone();
                Ok(item)
            }
            None => Err(format!("{} not found", item.get_id()).into()),
        }
    }
}

#[async_trait]
impl<T: Entity> Delete<Postgres> for MemoryRepository<T> {
    async fn delete(&self, id: &str) -> Result<usize, Box<dyn Error + Send + Sync>> {
        self.check()?;
        Ok(usize::from(self.rows.lock().unwrap().remove(id).is_some()))
    }
}

#[async_trait]
impl<T: Entity> LoadIds<Postgres> for MemoryRepository<T> {
    async fn load_ids(&self) -> Result<Vec<String>, Box<dyn Error + Send + Sync>> {
        self.check()?;
        Ok(self.rows.lock().unwrap().keys().cloned().collect())
    }
}

#[async_trait]
impl AdjustStock<Postgres> for MemoryRepository<ProductModel> {
    async fn adjust_quantity(
        &self,
        product_id: &str,
        delta: Decimal,
    ) -> Result<Option<Decimal>, Box<dyn Error + Send + Sync>> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(product_id) {
            Some(product) if product.quantity + delta >= Decimal::ZERO => {
                product.quantity += delta;
                Ok(Some(product.quantity))
            }
            _ => Ok(None),
        }
    }
}
