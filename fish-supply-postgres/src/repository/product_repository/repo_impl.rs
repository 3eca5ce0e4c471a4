use async_trait::async_trait;
use fish_supply_db::models::ProductModel;
use fish_supply_db::repository::LoadIds;
use sqlx::{postgres::PgRow, PgPool, Postgres, Row};
use std::error::Error;

use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};

pub(crate) const PRODUCT_COLUMNS: &str = "product_id, name, grade, quantity, unit_price, supplier_id";

pub struct ProductRepositoryImpl {
    pub pool: PgPool,
}

impl ProductRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for ProductModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(ProductModel {
            product_id: get_heapless_string(row, "product_id")?,
            name: get_heapless_string(row, "name")?,
            grade: get_heapless_string(row, "grade")?,
            quantity: row.try_get("quantity")?,
            unit_price: row.try_get("unit_price")?,
            supplier_id: get_optional_heapless_string(row, "supplier_id")?,
        })
    }
}

#[async_trait]
impl LoadIds<Postgres> for ProductRepositoryImpl {
    async fn load_ids(&self) -> Result<Vec<String>, Box<dyn Error + Send + Sync>> {
        let rows = sqlx::query("SELECT product_id FROM product")
            .fetch_all(&self.pool)
            .await?;
        let mut ids = Vec::with_capacity(rows.len());
        for row in rows {
            ids.push(row.try_get("product_id")?);
        }
        Ok(ids)
    }
}
