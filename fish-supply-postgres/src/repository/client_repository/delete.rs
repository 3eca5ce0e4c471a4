use async_trait::async_trait;
use fish_supply_db::repository::Delete;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::ClientRepositoryImpl;

impl ClientRepositoryImpl {
    pub(super) async fn delete_impl(
        repo: &ClientRepositoryImpl,
        id: &str,
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        let result = sqlx::query("DELETE FROM client WHERE client_id = $1")
            .bind(id)
            .execute(&repo.pool)
            .await?;
        Ok(result.rows_affected() as usize)
    }
}

#[async_trait]
impl Delete<Postgres> for ClientRepositoryImpl {
    async fn delete(&self, id: &str) -> Result<usize, Box<dyn Error + Send + Sync>> {
        Self::delete_impl(self, id).await
    }
}
