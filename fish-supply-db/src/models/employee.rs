use fish_supply_api::{validate_form, ApiError, EmployeeForm};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use crate::models::{Entity, EntityKind, Identifiable};
use crate::utils::bounded;
use crate::utils::filter::Filterable;

/// # Documentation
/// - Staff member recording sales
/// - `google_account` links the employee to the Google login, if any
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeModel {
    pub employee_id: HeaplessString<32>,
    pub name: HeaplessString<100>,
    pub google_account: Option<HeaplessString<254>>,
}

impl Identifiable for EmployeeModel {
    fn get_id(&self) -> &str {
        self.employee_id.as_str()
    }
}

impl Entity for EmployeeModel {
    const KIND: EntityKind = EntityKind::Employee;
    const ID_PREFIX: &'static str = "EID-";
}

impl Filterable for EmployeeModel {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.employee_id.as_str(), self.name.as_str()];
        if let Some(account) = &self.google_account {
            fields.push(account.as_str());
        }
        fields
    }

    fn category(&self) -> Option<&str> {
        None
    }
}

impl TryFrom<EmployeeForm> for EmployeeModel {
    type Error = ApiError;

    fn try_from(form: EmployeeForm) -> Result<Self, Self::Error> {
        validate_form(&form)?;
        let google_account = form
            .google_account
            .as_deref()
            .map(str::trim)
            .filter(|account| !account.is_empty())
            .map(|account| bounded("google_account", account))
            .transpose()?;
        Ok(EmployeeModel {
            employee_id: bounded("employee_id", &form.employee_id)?,
            name: bounded("name", &form.name)?,
            google_account,
        })
    }
}
