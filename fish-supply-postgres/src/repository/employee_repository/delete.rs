use async_trait::async_trait;
use fish_supply_db::repository::Delete;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::EmployeeRepositoryImpl;

impl EmployeeRepositoryImpl {
    pub(super) async fn delete_impl(
        repo: &EmployeeRepositoryImpl,
        id: &str,
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        let result = sqlx::query("DELETE FROM employee WHERE employee_id = $1")
            .bind(id)
            .execute(&repo.pool)
            .await?;
        Ok(result.rows_affected() as usize)
    }
}

#[async_trait]
impl Delete<Postgres> for EmployeeRepositoryImpl {
    async fn delete(&self, id: &str) -> Result<usize, Box<dyn Error + Send + Sync>> {
        Self::delete_impl(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::employee_repository::test_utils::create_test_employee;
    use crate::test_helper::{setup_test_repos, unique_id};
    use fish_supply_db::repository::{Create, Delete, FindById};

    #[tokio::test]
    #[serial_test::serial]
    #[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
    async fn test_delete_employee() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repos = setup_test_repos().await?;
        let repo = repos.create_all_repositories().employee_repository;

        let employee = repo.create(create_test_employee(&unique_id("EID-"), None)).await?;
        assert_eq!(repo.delete(employee.employee_id.as_str()).await?, 1);
        assert!(repo.find_by_id(employee.employee_id.as_str()).await?.is_none());

        Ok(())
    }
}
