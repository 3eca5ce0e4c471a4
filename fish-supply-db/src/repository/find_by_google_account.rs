use async_trait::async_trait;
use sqlx::Database;

use crate::models::EmployeeModel;

/// Repository trait mapping a signed-in Google account to an employee
#[async_trait]
pub trait FindByGoogleAccount<DB: Database>: Send + Sync {
    /// Case-insensitive match on the stored account e-mail
    async fn find_by_google_account(
        &self,
        account: &str,
    ) -> Result<Option<EmployeeModel>, Box<dyn std::error::Error + Send + Sync>>;
}
