use async_trait::async_trait;
use fish_supply_db::models::EmployeeModel;
use fish_supply_db::repository::Create;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::{EmployeeRepositoryImpl, EMPLOYEE_COLUMNS};
use crate::utils::TryFromRow;

impl EmployeeRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &EmployeeRepositoryImpl,
        item: EmployeeModel,
    ) -> Result<EmployeeModel, Box<dyn Error + Send + Sync>> {
        let query = format!(
            r#"
            INSERT INTO employee (employee_id, name, google_account)
            VALUES ($1, $2, $3)
            RETURNING {EMPLOYEE_COLUMNS}
            "#
        );
        let row = sqlx::query(&query)
            .bind(item.employee_id.as_str())
            .bind(item.name.as_str())
            .bind(item.google_account.as_deref())
            .fetch_one(&repo.pool)
            .await?;
        EmployeeModel::try_from_row(&row)
    }
}

#[async_trait]
impl Create<Postgres, EmployeeModel> for EmployeeRepositoryImpl {
    async fn create(&self, item: EmployeeModel) -> Result<EmployeeModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}
