use async_trait::async_trait;
use fish_supply_db::models::EmployeeModel;
use fish_supply_db::repository::FindById;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::{EmployeeRepositoryImpl, EMPLOYEE_COLUMNS};
use crate::utils::TryFromRow;

impl EmployeeRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        repo: &EmployeeRepositoryImpl,
        id: &str,
    ) -> Result<Option<EmployeeModel>, Box<dyn Error + Send + Sync>> {
        let query = format!("SELECT {EMPLOYEE_COLUMNS} FROM employee WHERE employee_id = $1");
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&repo.pool)
            .await?;
        row.as_ref().map(EmployeeModel::try_from_row).transpose()
    }
}

#[async_trait]
impl FindById<Postgres, EmployeeModel> for EmployeeRepositoryImpl {
    async fn find_by_id(&self, id: &str) -> Result<Option<EmployeeModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_id_impl(self, id).await
    }
}
