use async_trait::async_trait;
use fish_supply_db::models::EmployeeModel;
use fish_supply_db::repository::Update;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::{EmployeeRepositoryImpl, EMPLOYEE_COLUMNS};
use crate::utils::TryFromRow;

impl EmployeeRepositoryImpl {
    pub(super) async fn update_impl(
        repo: &EmployeeRepositoryImpl,
        item: EmployeeModel,
    ) -> Result<EmployeeModel, Box<dyn Error + Send + Sync>> {
        let query = format!(
            r#"
            UPDATE employee
            SET name = $2, google_account = $3
            WHERE employee_id = $1
            RETURNING {EMPLOYEE_COLUMNS}
            "#
        );
        let row = sqlx::query(&query)
            .bind(item.employee_id.as_str())
            .bind(item.name.as_str())
            .bind(item.google_account.as_deref())
            .fetch_optional(&repo.pool)
            .await?
            .ok_or_else(|| format!("Employee {} not found", item.employee_id))?;
        EmployeeModel::try_from_row(&row)
    }
}

#[async_trait]
impl Update<Postgres, EmployeeModel> for EmployeeRepositoryImpl {
    async fn update(&self, item: EmployeeModel) -> Result<EmployeeModel, Box<dyn Error + Send + Sync>> {
        Self::update_impl(self, item).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::employee_repository::test_utils::create_test_employee;
    use crate::test_helper::{setup_test_repos, unique_id};
    use fish_supply_db::repository::{Create, FindByGoogleAccount, Update};
    use heapless::String as HeaplessString;

    #[tokio::test]
    #[serial_test::serial]
    #[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
    async fn test_linking_a_google_account() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repos = setup_test_repos().await?;
        let repo = repos.create_all_repositories().employee_repository;

        let mut employee = repo.create(create_test_employee(&unique_id("EID-"), None)).await?;
        let email = format!("{}@fishsupply.example", unique_id("link-"));
        employee.google_account = Some(HeaplessString::try_from(email.as_str()).unwrap());

        assert_eq!(repo.update(employee.clone()).await?, employee);
        assert_eq!(repo.find_by_google_account(&email).await?, Some(employee));

        Ok(())
    }
}
