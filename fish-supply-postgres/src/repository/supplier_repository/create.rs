use async_trait::async_trait;
use fish_supply_db::models::SupplierModel;
use fish_supply_db::repository::Create;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::{SupplierRepositoryImpl, SUPPLIER_COLUMNS};
use crate::utils::TryFromRow;

impl SupplierRepositoryImpl {
    /// `st_insert_supplier` returns no row when the id is already taken. In
    /// that case the stored row is compared with the submitted one: an
    /// identical row means the same form was submitted twice and counts as
    /// success, anything else is a duplicate key.
    pub(super) async fn create_impl(
        repo: &SupplierRepositoryImpl,
        item: SupplierModel,
    ) -> Result<SupplierModel, Box<dyn Error + Send + Sync>> {
        let query = format!("SELECT {SUPPLIER_COLUMNS} FROM st_insert_supplier($1, $2, $3, $4, $5)");
        let row = sqlx::query(&query)
            .bind(item.supplier_id.as_str())
            .bind(item.name.as_str())
            .bind(item.phone.as_str())
            .bind(item.address.as_str())
            .bind(item.supplier_type.as_str())
            .fetch_optional(&repo.pool)
            .await?;

        if let Some(row) = row {
            return SupplierModel::try_from_row(&row);
        }

        match Self::find_by_id_impl(repo, item.supplier_id.as_str()).await? {
            Some(existing) if existing == item => {
                tracing::info!(
                    supplier_id = %item.supplier_id,
                    "Supplier insert returned no row but an identical row exists"
                );
                Ok(existing)
            }
            Some(_) => Err(format!("Supplier {} already exists", item.supplier_id).into()),
            None => Err(format!("Supplier {} was not inserted", item.supplier_id).into()),
        }
    }
}

#[async_trait]
impl Create<Postgres, SupplierModel> for SupplierRepositoryImpl {
    async fn create(&self, item: SupplierModel) -> Result<SupplierModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}
