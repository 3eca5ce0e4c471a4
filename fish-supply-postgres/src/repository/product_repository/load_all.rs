use async_trait::async_trait;
use fish_supply_db::models::ProductModel;
use fish_supply_db::repository::LoadAll;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::{ProductRepositoryImpl, PRODUCT_COLUMNS};
use crate::utils::collect_rows;

impl ProductRepositoryImpl {
    pub(super) async fn load_all_impl(
        repo: &ProductRepositoryImpl,
    ) -> Result<Vec<ProductModel>, Box<dyn Error + Send + Sync>> {
        let query = format!("SELECT {PRODUCT_COLUMNS} FROM product ORDER BY product_id");
        let rows = sqlx::query(&query).fetch_all(&repo.pool).await?;
        collect_rows(&rows)
    }
}

#[async_trait]
impl LoadAll<Postgres, ProductModel> for ProductRepositoryImpl {
    async fn load_all(&self) -> Result<Vec<ProductModel>, Box<dyn Error + Send + Sync>> {
        Self::load_all_impl(self).await
    }
}
