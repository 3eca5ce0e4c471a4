use async_trait::async_trait;
use fish_supply_db::models::ProductModel;
use fish_supply_db::repository::Create;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::{ProductRepositoryImpl, PRODUCT_COLUMNS};
use crate::utils::TryFromRow;

impl ProductRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &ProductRepositoryImpl,
        item: ProductModel,
    ) -> Result<ProductModel, Box<dyn Error + Send + Sync>> {
        item.check_decimal_places()?;
        let query = format!(
            r#"
            INSERT INTO product (product_id, name, grade, quantity, unit_price, supplier_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {PRODUCT_COLUMNS}
            "#
        );
        let row = sqlx::query(&query)
            .bind(item.product_id.as_str())
            .bind(item.name.as_str())
            .bind(item.grade.as_str())
            .bind(item.quantity)
            .bind(item.unit_price)
            .bind(item.supplier_id.as_deref())
            .fetch_one(&repo.pool)
            .await?;
        ProductModel::try_from_row(&row)
    }
}

#[async_trait]
impl Create<Postgres, ProductModel> for ProductRepositoryImpl {
    async fn create(&self, item: ProductModel) -> Result<ProductModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}
