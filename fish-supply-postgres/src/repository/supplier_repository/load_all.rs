use async_trait::async_trait;
use fish_supply_db::models::SupplierModel;
use fish_supply_db::repository::LoadAll;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::{SupplierRepositoryImpl, SUPPLIER_COLUMNS};
use crate::utils::collect_rows;

impl SupplierRepositoryImpl {
    pub(super) async fn load_all_impl(
        repo: &SupplierRepositoryImpl,
    ) -> Result<Vec<SupplierModel>, Box<dyn Error + Send + Sync>> {
        let query = format!("SELECT {SUPPLIER_COLUMNS} FROM supplier ORDER BY supplier_id");
        let rows = sqlx::query(&query).fetch_all(&repo.pool).await?;
        collect_rows(&rows)
    }
}

#[async_trait]
impl LoadAll<Postgres, SupplierModel> for SupplierRepositoryImpl {
    async fn load_all(&self) -> Result<Vec<SupplierModel>, Box<dyn Error + Send + Sync>> {
        Self::load_all_impl(self).await
    }
}
