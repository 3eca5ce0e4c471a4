use async_trait::async_trait;
use fish_supply_db::models::SupplierModel;
use fish_supply_db::repository::LoadIds;
use sqlx::{postgres::PgRow, PgPool, Postgres, Row};
use std::error::Error;

use crate::utils::{get_heapless_string, TryFromRow};

pub(crate) const SUPPLIER_COLUMNS: &str = "supplier_id, name, phone, address, supplier_type";

/// Supplier rows are written through the `st_*_supplier` functions rather
/// than plain DML.
pub struct SupplierRepositoryImpl {
    pub pool: PgPool,
}

impl SupplierRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for SupplierModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(SupplierModel {
            supplier_id: get_heapless_string(row, "supplier_id")?,
            name: get_heapless_string(row, "name")?,
            phone: get_heapless_string(row, "phone")?,
            address: get_heapless_string(row, "address")?,
            supplier_type: get_heapless_string(row, "supplier_type")?,
        })
    }
}

#[async_trait]
impl LoadIds<Postgres> for SupplierRepositoryImpl {
    async fn load_ids(&self) -> Result<Vec<String>, Box<dyn Error + Send + Sync>> {
        let rows = sqlx::query("SELECT supplier_id FROM supplier")
            .fetch_all(&self.pool)
            .await?;
        let mut ids = Vec::with_capacity(rows.len());
        for row in rows {
            ids.push(row.try_get("supplier_id")?);
        }
        Ok(ids)
    }
}
