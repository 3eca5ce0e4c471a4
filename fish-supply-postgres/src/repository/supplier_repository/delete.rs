use async_trait::async_trait;
use fish_supply_db::repository::Delete;
use sqlx::{Postgres, Row};
use std::error::Error;

use super::repo_impl::SupplierRepositoryImpl;

impl SupplierRepositoryImpl {
    pub(super) async fn delete_impl(
        repo: &SupplierRepositoryImpl,
        id: &str,
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        let row = sqlx::query("SELECT st_delete_supplier($1) AS deleted")
            .bind(id)
            .fetch_one(&repo.pool)
            .await?;
        let deleted: i32 = row.try_get("deleted")?;
        Ok(usize::try_from(deleted)?)
    }
}

#[async_trait]
impl Delete<Postgres> for SupplierRepositoryImpl {
    async fn delete(&self, id: &str) -> Result<usize, Box<dyn Error + Send + Sync>> {
        Self::delete_impl(self, id).await
    }
}
