use async_trait::async_trait;
use fish_supply_db::models::EmployeeModel;
use fish_supply_db::repository::FindByGoogleAccount;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::{EmployeeRepositoryImpl, EMPLOYEE_COLUMNS};
use crate::utils::TryFromRow;

impl EmployeeRepositoryImpl {
    pub(super) async fn find_by_google_account_impl(
        repo: &EmployeeRepositoryImpl,
        email: &str,
    ) -> Result<Option<EmployeeModel>, Box<dyn Error + Send + Sync>> {
        let query = format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employee WHERE lower(google_account) = lower($1)"
        );
        let row = sqlx::query(&query)
            .bind(email.trim())
            .fetch_optional(&repo.pool)
            .await?;
        row.as_ref().map(EmployeeModel::try_from_row).transpose()
    }
}

#[async_trait]
impl FindByGoogleAccount<Postgres> for EmployeeRepositoryImpl {
    async fn find_by_google_account(
        &self,
        email: &str,
    ) -> Result<Option<EmployeeModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_google_account_impl(self, email).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::employee_repository::test_utils::create_test_employee;
    use crate::test_helper::{setup_test_repos, unique_id};
    use fish_supply_db::repository::{Create, FindByGoogleAccount};

    #[tokio::test]
    #[serial_test::serial]
    #[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
    async fn test_lookup_ignores_case() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repos = setup_test_repos().await?;
        let repo = repos.create_all_repositories().employee_repository;

        let id = unique_id("EID-");
        let email = format!("{}@fishsupply.example", id.to_lowercase());
        let employee = repo.create(create_test_employee(&id, Some(&email))).await?;

        let found = repo.find_by_google_account(&email.to_uppercase()).await?;
        assert_eq!(found, Some(employee));
        assert!(repo
            .find_by_google_account("nobody@fishsupply.example")
            .await?
            .is_none());

        Ok(())
    }
}
