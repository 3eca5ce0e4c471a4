use async_trait::async_trait;
use fish_supply_db::models::EmployeeModel;
use fish_supply_db::repository::LoadIds;
use sqlx::{postgres::PgRow, PgPool, Postgres, Row};
use std::error::Error;

use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};

pub(crate) const EMPLOYEE_COLUMNS: &str = "employee_id, name, google_account";

pub struct EmployeeRepositoryImpl {
    pub pool: PgPool,
}

impl EmployeeRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for EmployeeModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(EmployeeModel {
            employee_id: get_heapless_string(row, "employee_id")?,
            name: get_heapless_string(row, "name")?,
            google_account: get_optional_heapless_string(row, "google_account")?,
        })
    }
}

#[async_trait]
impl LoadIds<Postgres> for EmployeeRepositoryImpl {
    async fn load_ids(&self) -> Result<Vec<String>, Box<dyn Error + Send + Sync>> {
        let rows = sqlx::query("SELECT employee_id FROM employee")
            .fetch_all(&self.pool)
            .await?;
        let mut ids = Vec::with_capacity(rows.len());
        for row in rows {
            ids.push(row.try_get("employee_id")?);
        }
        Ok(ids)
    }
}
