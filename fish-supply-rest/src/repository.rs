//! Repository trait implementations over PostgREST.
//!
//! The backing store is the same PostgreSQL schema the sqlx repositories use,
//! so these implement the traits for the `Postgres` marker and plug into the
//! same [`Gateway`].

use async_trait::async_trait;
use fish_supply_api::{check_decimal_places, ApiResult};
use fish_supply_db::models::{ClientModel, EmployeeModel, Entity, ProductModel, SupplierModel};
use fish_supply_db::repository::{
    AdjustStock, Create, Delete, FindByGoogleAccount, FindById, LoadAll, LoadIds, Update,
};
use fish_supply_db::sync::ChangeNotifier;
use fish_supply_db::Gateway;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use sqlx::Postgres;
use std::error::Error;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::client::RestClient;

/// A model stored in a PostgREST-exposed table.
pub trait RestResource: Entity + Serialize + DeserializeOwned {
    const TABLE: &'static str;
    const KEY_COLUMN: &'static str;

    /// Checked before an insert or update is sent.
    fn check_before_write(&self) -> ApiResult<()> {
        Ok(())
    }
}

impl RestResource for ClientModel {
    const TABLE: &'static str = "client";
    const KEY_COLUMN: &'static str = "client_id";
}

impl RestResource for SupplierModel {
    const TABLE: &'static str = "supplier";
    const KEY_COLUMN: &'static str = "supplier_id";
}

impl RestResource for EmployeeModel {
    const TABLE: &'static str = "employee";
    const KEY_COLUMN: &'static str = "employee_id";
}

impl RestResource for ProductModel {
    const TABLE: &'static str = "product";
    const KEY_COLUMN: &'static str = "product_id";

    fn check_before_write(&self) -> ApiResult<()> {
        self.check_decimal_places()
    }
}

pub struct RestRepository<T> {
    client: RestClient,
    _resource: PhantomData<fn() -> T>,
}

impl<T: RestResource> RestRepository<T> {
    pub fn new(client: RestClient) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }
}

#[async_trait]
impl<T: RestResource> LoadAll<Postgres, T> for RestRepository<T> {
    async fn load_all(&self) -> Result<Vec<T>, Box<dyn Error + Send + Sync>> {
        Ok(self
            .client
            .select_all(T::TABLE, "*", Some(T::KEY_COLUMN))
            .await?)
    }
}

#[async_trait]
impl<T: RestResource> FindById<Postgres, T> for RestRepository<T> {
    async fn find_by_id(&self, id: &str) -> Result<Option<T>, Box<dyn Error + Send + Sync>> {
        let rows: Vec<T> = self.client.select_eq(T::TABLE, T::KEY_COLUMN, id).await?;
        Ok(rows.into_iter().next())
    }
}

#[async_trait]
impl<T: RestResource> Create<Postgres, T> for RestRepository<T> {
    async fn create(&self, item: T) -> Result<T, Box<dyn Error + Send + Sync>> {
        item.check_before_write()?;
        let rows: Vec<T> = self.client.insert(T::TABLE, &[&item]).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| format!("{} insert of {} returned no row", T::KIND, item.get_id()).into())
    }
}

#[async_trait]
impl<T: RestResource> Update<Postgres, T> for RestRepository<T> {
    async fn update(&self, item: T) -> Result<T, Box<dyn Error + Send + Sync>> {
        item.check_before_write()?;
        let rows: Vec<T> = self
            .client
            .update_eq(T::TABLE, T::KEY_COLUMN, item.get_id(), &item)
            .await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| format!("{} {} not found", T::KIND, item.get_id()).into())
    }
}

#[async_trait]
impl<T: RestResource> Delete<Postgres> for RestRepository<T> {
    async fn delete(&self, id: &str) -> Result<usize, Box<dyn Error + Send + Sync>> {
        Ok(self.client.delete_eq(T::TABLE, T::KEY_COLUMN, id).await?)
    }
}

#[async_trait]
impl<T: RestResource> LoadIds<Postgres> for RestRepository<T> {
    async fn load_ids(&self) -> Result<Vec<String>, Box<dyn Error + Send + Sync>> {
        let rows: Vec<Value> = self
            .client
            .select_all(T::TABLE, T::KEY_COLUMN, None)
            .await?;
        rows.iter()
            .map(|row| {
                row.get(T::KEY_COLUMN)
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .ok_or_else(|| format!("{} row without {}", T::KIND, T::KEY_COLUMN).into())
            })
            .collect()
    }
}

#[async_trait]
impl AdjustStock<Postgres> for RestRepository<ProductModel> {
    async fn adjust_quantity(
        &self,
        product_id: &str,
        delta: Decimal,
    ) -> Result<Option<Decimal>, Box<dyn Error + Send + Sync>> {
        check_decimal_places("delta", delta)?;
        let quantity: Option<Decimal> = self
            .client
            .rpc(
                "st_adjust_product_quantity",
                &json!({ "p_product_id": product_id, "p_delta": delta }),
            )
            .await?;
        Ok(quantity)
    }
}

#[async_trait]
impl FindByGoogleAccount<Postgres> for RestRepository<EmployeeModel> {
    async fn find_by_google_account(
        &self,
        email: &str,
    ) -> Result<Option<EmployeeModel>, Box<dyn Error + Send + Sync>> {
        let pattern = escape_like(email.trim());
        let rows: Vec<EmployeeModel> = self
            .client
            .select_where(EmployeeModel::TABLE, "google_account", "ilike", &pattern)
            .await?;
        Ok(rows.into_iter().next())
    }
}

/// Escape `ilike` wildcards so the lookup is an exact, case-insensitive match.
///
/// PostgREST turns `*` into `%` before the pattern reaches the database, so an
/// escaped `\*` would come out as a literal `%`. `*` is left as is.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub type RestClientGateway = Gateway<ClientModel, RestRepository<ClientModel>>;
pub type RestSupplierGateway = Gateway<SupplierModel, RestRepository<SupplierModel>>;
pub type RestEmployeeGateway = Gateway<EmployeeModel, RestRepository<EmployeeModel>>;
pub type RestProductGateway = Gateway<ProductModel, RestRepository<ProductModel>>;

pub struct RestRepositories {
    client: RestClient,
}

impl RestRepositories {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    pub fn create_gateways(&self, notifier: &ChangeNotifier) -> RestGateways {
        RestGateways {
            clients: Gateway::new(Arc::new(RestRepository::new(self.client.clone())), notifier.clone()),
            suppliers: Gateway::new(Arc::new(RestRepository::new(self.client.clone())), notifier.clone()),
            employees: Gateway::new(Arc::new(RestRepository::new(self.client.clone())), notifier.clone()),
            products: Gateway::new(Arc::new(RestRepository::new(self.client.clone())), notifier.clone()),
        }
    }
}

#[derive(Clone)]
pub struct RestGateways {
    pub clients: RestClientGateway,
    pub suppliers: RestSupplierGateway,
    pub employees: RestEmployeeGateway,
    pub products: RestProductGateway,
}
