use fish_supply_api::{validate_form, ApiError, ClientForm};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use crate::models::{Entity, EntityKind, Identifiable};
use crate::utils::bounded;
use crate::utils::filter::Filterable;

/// # Documentation
/// - A customer buying stock; `category` is one of the dropdown values in
///   `fish_supply_api::CLIENT_CATEGORIES` but stored as free text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientModel {
    pub client_id: HeaplessString<32>,
    pub name: HeaplessString<100>,
    pub contact: HeaplessString<50>,
    pub address: HeaplessString<200>,
    pub category: HeaplessString<30>,
}

impl Identifiable for ClientModel {
    fn get_id(&self) -> &str {
        self.client_id.as_str()
    }
}

impl Entity for ClientModel {
    const KIND: EntityKind = EntityKind::Client;
    const ID_PREFIX: &'static str = "CID-";
}

impl Filterable for ClientModel {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.client_id.as_str(), self.name.as_str(), self.contact.as_str()]
    }

    fn category(&self) -> Option<&str> {
        Some(self.category.as_str())
    }
}

impl TryFrom<ClientForm> for ClientModel {
    type Error = ApiError;

    fn try_from(form: ClientForm) -> Result<Self, Self::Error> {
        validate_form(&form)?;
        Ok(ClientModel {
            client_id: bounded("client_id", &form.client_id)?,
            name: bounded("name", &form.name)?,
            contact: bounded("contact", &form.contact)?,
            address: bounded("address", &form.address)?,
            category: bounded("category", &form.category)?,
        })
    }
}
