//! Google account lookup for sign-in.
//!
//! The authorization-code exchange happens elsewhere; this module starts from
//! an access token, asks Google who it belongs to and maps the verified email
//! onto an employee record.

use fish_supply_db::models::EmployeeModel;
use fish_supply_db::repository::{EntityRepository, FindByGoogleAccount};
use fish_supply_db::Gateway;
use serde::{Deserialize, Serialize};
use sqlx::Postgres;
use tracing::{info, warn};

use crate::error::{RestError, RestResult};

pub const GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v3/userinfo";

/// The OpenID Connect user-info claims Google returns. Only `sub` is
/// guaranteed; the rest depend on the granted scopes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleUserInfo {
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub email_verified: Option<bool>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
}

impl GoogleUserInfo {
    /// The email, but only when Google says it is verified.
    pub fn verified_email(&self) -> Option<&str> {
        match (&self.email, self.email_verified) {
            (Some(email), Some(true)) => Some(email.as_str()),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct GoogleUserInfoClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GoogleUserInfoClient {
    pub fn new(http: reqwest::Client) -> Self {
        Self {
            http,
            endpoint: GOOGLE_USERINFO_URL.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub async fn fetch(&self, access_token: &str) -> RestResult<GoogleUserInfo> {
        if access_token.trim().is_empty() {
            return Err(RestError::InvalidRequest("access token is empty".to_string()));
        }

        let response = self
            .http
            .get(&self.endpoint)
            .bearer_auth(access_token)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Google user-info request rejected");
            return Err(RestError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Resolve the employee signed in with `access_token`.
    ///
    /// `Ok(None)` when the account has no verified email or no employee is
    /// linked to it.
    pub async fn fetch_employee<R>(
        &self,
        access_token: &str,
        employees: &Gateway<EmployeeModel, R>,
    ) -> RestResult<Option<EmployeeModel>>
    where
        R: EntityRepository<Postgres, EmployeeModel> + FindByGoogleAccount<Postgres>,
    {
        let user = self.fetch(access_token).await?;
        let Some(email) = user.verified_email() else {
            warn!(sub = %user.sub, "Google account has no verified email");
            return Ok(None);
        };

        let employee = employees.find_by_google_account(email).await;
        match &employee {
            Some(found) => info!(employee_id = %found.employee_id, "Google sign-in matched employee"),
            None => warn!(email, "No employee linked to Google account"),
        }
        Ok(employee)
    }
}
