use async_trait::async_trait;
use fish_supply_db::models::ProductModel;
use fish_supply_db::repository::Update;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::{ProductRepositoryImpl, PRODUCT_COLUMNS};
use crate::utils::TryFromRow;

impl ProductRepositoryImpl {
    pub(super) async fn update_impl(
        repo: &ProductRepositoryImpl,
        item: ProductModel,
    ) -> Result<ProductModel, Box<dyn Error + Send + Sync>> {
        item.check_decimal_places()?;
        let query = format!(
            r#"
            UPDATE product
            SET name = $2, grade = $3, quantity = $4, unit_price = $5, supplier_id = $6
            WHERE product_id = $1
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
            .fetch_optional(&repo.pool)
            .await?
            .ok_or_else(|| format!("Product {} not found", item.product_id))?;
        ProductModel::try_from_row(&row)
    }
}

#[async_trait]
impl Update<Postgres, ProductModel> for ProductRepositoryImpl {
    async fn update(&self, item: ProductModel) -> Result<ProductModel, Box<dyn Error + Send + Sync>> {
        Self::update_impl(self, item).await
    }
}
