use async_trait::async_trait;
use fish_supply_db::models::SupplierModel;
use fish_supply_db::repository::Update;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::{SupplierRepositoryImpl, SUPPLIER_COLUMNS};
use crate::utils::TryFromRow;

impl SupplierRepositoryImpl {
    pub(super) async fn update_impl(
        repo: &SupplierRepositoryImpl,
        item: SupplierModel,
    ) -> Result<SupplierModel, Box<dyn Error + Send + Sync>> {
        let query = format!("SELECT {SUPPLIER_COLUMNS} FROM st_update_supplier($1, $2, $3, $4, $5)");
        let row = sqlx::query(&query)
            .bind(item.supplier_id.as_str())
            .bind(item.name.as_str())
            .bind(item.phone.as_str())
            .bind(item.address.as_str())
            .bind(item.supplier_type.as_str())
            .fetch_optional(&repo.pool)
            .await?
            .ok_or_else(|| format!("Supplier {} not found", item.supplier_id))?;
        SupplierModel::try_from_row(&row)
    }
}

#[async_trait]
impl Update<Postgres, SupplierModel> for SupplierRepositoryImpl {
    async fn update(&self, item: SupplierModel) -> Result<SupplierModel, Box<dyn Error + Send + Sync>> {
        Self::update_impl(self, item).await
    }
}
