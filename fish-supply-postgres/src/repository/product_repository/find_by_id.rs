use async_trait::async_trait;
use fish_supply_db::models::ProductModel;
use fish_supply_db::repository::FindById;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::{ProductRepositoryImpl, PRODUCT_COLUMNS};
use crate::utils::TryFromRow;

impl ProductRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        repo: &ProductRepositoryImpl,
        id: &str,
    ) -> Result<Option<ProductModel>, Box<dyn Error + Send + Sync>> {
        let query = format!("SELECT {PRODUCT_COLUMNS} FROM product WHERE product_id = $1");
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&repo.pool)
            .await?;
        row.as_ref().map(ProductModel::try_from_row).transpose()
    }
}

#[async_trait]
impl FindById<Postgres, ProductModel> for ProductRepositoryImpl {
    async fn find_by_id(&self, id: &str) -> Result<Option<ProductModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_id_impl(self, id).await
    }
}
