use fish_supply_api::{
    check_decimal_places, parse_decimal, parse_quantity, validate_form, ApiError, ApiResult,
    ProductForm,
};
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Entity, EntityKind, Identifiable};
use crate::utils::bounded;
use crate::utils::filter::Filterable;

/// A stock line held for sale.
///
/// `quantity` is only changed through atomic adjustments once the product
/// exists (see `repository::adjust_stock`); an update rewrites the whole row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductModel {
    pub product_id: HeaplessString<32>,
    pub name: HeaplessString<100>,
    /// A, B or C
    pub grade: HeaplessString<8>,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub supplier_id: Option<HeaplessString<32>>,
}

impl ProductModel {
    /// Quantity × unit price. Derived, never stored.
    pub fn total_value(&self) -> Decimal {
        self.quantity * self.unit_price
    }

    pub fn check_decimal_places(&self) -> ApiResult<()> {
        check_decimal_places("quantity", self.quantity)?;
        check_decimal_places("unit_price", self.unit_price)?;
        Ok(())
    }
}

impl Identifiable for ProductModel {
    fn get_id(&self) -> &str {
        self.product_id.as_str()
    }
}

impl Entity for ProductModel {
    const KIND: EntityKind = EntityKind::Product;
    const ID_PREFIX: &'static str = "PID-";
}

impl Filterable for ProductModel {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.product_id.as_str(), self.name.as_str()]
    }

    fn category(&self) -> Option<&str> {
        Some(self.grade.as_str())
    }
}

impl TryFrom<ProductForm> for ProductModel {
    type Error = ApiError;

    fn try_from(form: ProductForm) -> Result<Self, Self::Error> {
        validate_form(&form)?;
        let supplier_id = form
            .supplier_id
            .as_deref()
            .map(|id| bounded("supplier_id", id))
            .transpose()?;
        Ok(ProductModel {
            product_id: bounded("product_id", &form.product_id)?,
            name: bounded("name", &form.name)?,
            grade: bounded("grade", &form.grade)?,
            quantity: parse_quantity("quantity", &form.quantity)?,
            unit_price: parse_decimal("unit_price", &form.unit_price)?,
            supplier_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_value() {
        let product = ProductModel {
            product_id: HeaplessString::try_from("PID-00001").unwrap(),
            name: HeaplessString::try_from("Bangus").unwrap(),
            grade: HeaplessString::try_from("A").unwrap(),
            quantity: Decimal::new(125, 1),
            unit_price: Decimal::from(80),
            supplier_id: None,
        };
        assert_eq!(product.total_value(), Decimal::from(1000));
    }

    #[test]
    fn test_check_decimal_places() {
        let mut product = ProductModel {
            product_id: HeaplessString::try_from("PID-00001").unwrap(),
            name: HeaplessString::try_from("Bangus").unwrap(),
            grade: HeaplessString::try_from("B").unwrap(),
            quantity: Decimal::new(1250, 2),
            unit_price: Decimal::new(8000, 3),
            supplier_id: None,
        };
        assert!(product.check_decimal_places().is_ok());

        product.quantity = Decimal::new(2555, 3);
        assert!(matches!(
            product.check_decimal_places(),
            Err(ApiError::ValidationError(msg)) if msg.contains("quantity")
        ));
    }

    #[test]
    fn test_negative_quantity_is_rejected() {
        let form = ProductForm {
            product_id: "PID-00001".to_string(),
            name: "Bangus".to_string(),
            grade: "A".to_string(),
            quantity: "-3".to_string(),
            unit_price: "80".to_string(),
            supplier_id: None,
        };
        assert!(ProductModel::try_from(form).is_err());
    }
}
