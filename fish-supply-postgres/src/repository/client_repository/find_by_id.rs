use async_trait::async_trait;
use fish_supply_db::models::ClientModel;
use fish_supply_db::repository::FindById;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::{ClientRepositoryImpl, CLIENT_COLUMNS};
use crate::utils::TryFromRow;

impl ClientRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        repo: &ClientRepositoryImpl,
        id: &str,
    ) -> Result<Option<ClientModel>, Box<dyn Error + Send + Sync>> {
        let query = format!("SELECT {CLIENT_COLUMNS} FROM client WHERE client_id = $1");
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&repo.pool)
            .await?;
        row.as_ref().map(ClientModel::try_from_row).transpose()
    }
}

#[async_trait]
impl FindById<Postgres, ClientModel> for ClientRepositoryImpl {
    async fn find_by_id(&self, id: &str) -> Result<Option<ClientModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_id_impl(self, id).await
    }
}
