use fish_supply_api::{validate_form, ApiError, SupplierForm};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use crate::models::{Entity, EntityKind, Identifiable};
use crate::utils::bounded;
use crate::utils::filter::Filterable;

/// # Documentation
/// - A source of stock; `supplier_type` follows `fish_supply_api::SUPPLIER_TYPES`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierModel {
    pub supplier_id: HeaplessString<32>,
    pub name: HeaplessString<100>,
    pub phone: HeaplessString<50>,
    pub address: HeaplessString<200>,
    pub supplier_type: HeaplessString<30>,
}

impl Identifiable for SupplierModel {
    fn get_id(&self) -> &str {
        self.supplier_id.as_str()
    }
}

impl Entity for SupplierModel {
    const KIND: EntityKind = EntityKind::Supplier;
    const ID_PREFIX: &'static str = "SID-";
}

impl Filterable for SupplierModel {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.supplier_id.as_str(), self.name.as_str(), self.phone.as_str()]
    }

    fn category(&self) -> Option<&str> {
        Some(self.supplier_type.as_str())
    }
}

impl TryFrom<SupplierForm> for SupplierModel {
    type Error = ApiError;

    fn try_from(form: SupplierForm) -> Result<Self, Self::Error> {
        validate_form(&form)?;
        Ok(SupplierModel {
            supplier_id: bounded("supplier_id", &form.supplier_id)?,
            name: bounded("name", &form.name)?,
            phone: bounded("phone", &form.phone)?,
            address: bounded("address", &form.address)?,
            supplier_type: bounded("supplier_type", &form.supplier_type)?,
        })
    }
}
