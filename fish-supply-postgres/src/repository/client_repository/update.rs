use async_trait::async_trait;
use fish_supply_db::models::ClientModel;
use fish_supply_db::repository::Update;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::{ClientRepositoryImpl, CLIENT_COLUMNS};
use crate::utils::TryFromRow;

impl ClientRepositoryImpl {
    pub(super) async fn update_impl(
        repo: &ClientRepositoryImpl,
        item: ClientModel,
    ) -> Result<ClientModel, Box<dyn Error + Send + Sync>> {
        let query = format!(
            r#"
            UPDATE client
            SET name = $2, contact = $3, address = $4, category = $5
            WHERE client_id = $1
            RETURNING {CLIENT_COLUMNS}
            "#
        );
        let row = sqlx::query(&query)
            .bind(item.client_id.as_str())
            .bind(item.name.as_str())
            .bind(item.contact.as_str())
            .bind(item.address.as_str())
            .bind(item.category.as_str())
            .fetch_optional(&repo.pool)
            .await?
            .ok_or_else(|| format!("Client {} not found", item.client_id))?;
        ClientModel::try_from_row(&row)
    }
}

#[async_trait]
impl Update<Postgres, ClientModel> for ClientRepositoryImpl {
    async fn update(&self, item: ClientModel) -> Result<ClientModel, Box<dyn Error + Send + Sync>> {
        Self::update_impl(self, item).await
    }
}
