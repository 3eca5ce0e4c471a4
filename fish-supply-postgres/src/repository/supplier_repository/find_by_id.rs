use async_trait::async_trait;
use fish_supply_db::models::SupplierModel;
use fish_supply_db::repository::FindById;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::{SupplierRepositoryImpl, SUPPLIER_COLUMNS};
use crate::utils::TryFromRow;

impl SupplierRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        repo: &SupplierRepositoryImpl,
        id: &str,
    ) -> Result<Option<SupplierModel>, Box<dyn Error + Send + Sync>> {
        let query = format!("SELECT {SUPPLIER_COLUMNS} FROM supplier WHERE supplier_id = $1");
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&repo.pool)
            .await?;
        row.as_ref().map(SupplierModel::try_from_row).transpose()
    }
}

#[async_trait]
impl FindById<Postgres, SupplierModel> for SupplierRepositoryImpl {
    async fn find_by_id(&self, id: &str) -> Result<Option<SupplierModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_id_impl(self, id).await
    }
}
