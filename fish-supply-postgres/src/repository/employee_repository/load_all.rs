use async_trait::async_trait;
use fish_supply_db::models::EmployeeModel;
use fish_supply_db::repository::LoadAll;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::{EmployeeRepositoryImpl, EMPLOYEE_COLUMNS};
use crate::utils::collect_rows;

impl EmployeeRepositoryImpl {
    pub(super) async fn load_all_impl(
        repo: &EmployeeRepositoryImpl,
    ) -> Result<Vec<EmployeeModel>, Box<dyn Error + Send + Sync>> {
        let query = format!("SELECT {EMPLOYEE_COLUMNS} FROM employee ORDER BY employee_id");
        let rows = sqlx::query(&query).fetch_all(&repo.pool).await?;
        collect_rows(&rows)
    }
}

#[async_trait]
impl LoadAll<Postgres, EmployeeModel> for EmployeeRepositoryImpl {
    async fn load_all(&self) -> Result<Vec<EmployeeModel>, Box<dyn Error + Send + Sync>> {
        Self::load_all_impl(self).await
    }
}
