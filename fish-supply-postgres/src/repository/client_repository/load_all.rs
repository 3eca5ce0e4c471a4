use async_trait::async_trait;
use fish_supply_db::models::ClientModel;
use fish_supply_db::repository::LoadAll;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::{ClientRepositoryImpl, CLIENT_COLUMNS};
use crate::utils::collect_rows;

impl ClientRepositoryImpl {
    pub(super) async fn load_all_impl(
        repo: &ClientRepositoryImpl,
    ) -> Result<Vec<ClientModel>, Box<dyn Error + Send + Sync>> {
        let query = format!("SELECT {CLIENT_COLUMNS} FROM client ORDER BY client_id");
        let rows = sqlx::query(&query).fetch_all(&repo.pool).await?;
        collect_rows(&rows)
    }
}

#[async_trait]
impl LoadAll<Postgres, ClientModel> for ClientRepositoryImpl {
    async fn load_all(&self) -> Result<Vec<ClientModel>, Box<dyn Error + Send + Sync>> {
        Self::load_all_impl(self).await
    }
}
