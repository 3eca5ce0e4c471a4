use async_trait::async_trait;
use fish_supply_db::models::ClientModel;
use fish_supply_db::repository::Create;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::{ClientRepositoryImpl, CLIENT_COLUMNS};
use crate::utils::TryFromRow;

impl ClientRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &ClientRepositoryImpl,
        item: ClientModel,
    ) -> Result<ClientModel, Box<dyn Error + Send + Sync>> {
        let query = format!(
            r#"
            INSERT INTO client (client_id, name, contact, address, category)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {CLIENT_COLUMNS}
            "#
        );
        let row = sqlx::query(&query)
            .bind(item.client_id.as_str())
            .bind(item.name.as_str())
            .bind(item.contact.as_str())
            .bind(item.address.as_str())
            .bind(item.category.as_str())
            .fetch_one(&repo.pool)
            .await?;
        ClientModel::try_from_row(&row)
    }
}

#[async_trait]
impl Create<Postgres, ClientModel> for ClientRepositoryImpl {
    async fn create(&self, item: ClientModel) -> Result<ClientModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}
