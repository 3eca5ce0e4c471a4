//! Form input validation
//!
//! Everything a user types into an Add/Edit screen lands in one of the form
//! structs below as raw text. Forms are validated before any I/O happens, so a
//! validation failure never reaches a gateway.
//!
//! The dropdown value sets live here as well. The storage layer keeps these
//! columns as free-form text, so only input that passes through a form is
//! checked against them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;
use validator::{Validate, ValidationError};

use crate::error::{ApiError, ApiResult};

pub const CLIENT_CATEGORIES: &[&str] = &["Retail", "Wholesale", "Restaurant", "Distributor"];
pub const SUPPLIER_TYPES: &[&str] = &["Fisherman", "Fish Farm", "Wholesaler", "Importer"];
pub const PRODUCT_GRADES: &[&str] = &["A", "B", "C"];
pub const PAYMENT_STATUSES: &[&str] = &["Paid", "Unpaid", "Partial"];
pub const DELIVERY_STATUSES: &[&str] = &["Pending", "Delivered", "Cancelled"];

fn one_of(value: &str, allowed: &[&str], code: &'static str) -> Result<(), ValidationError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        let mut error = ValidationError::new(code);
        error.message = Some(Cow::Owned(format!(
            "'{value}' is not one of: {}",
            allowed.join(", ")
        )));
        Err(error)
    }
}

fn validate_client_category(value: &str) -> Result<(), ValidationError> {
    one_of(value, CLIENT_CATEGORIES, "client_category")
}

fn validate_supplier_type(value: &str) -> Result<(), ValidationError> {
    one_of(value, SUPPLIER_TYPES, "supplier_type")
}

fn validate_product_grade(value: &str) -> Result<(), ValidationError> {
    one_of(value, PRODUCT_GRADES, "product_grade")
}

fn validate_payment_status(value: &str) -> Result<(), ValidationError> {
    one_of(value, PAYMENT_STATUSES, "payment_status")
}

fn validate_delivery_status(value: &str) -> Result<(), ValidationError> {
    one_of(value, DELIVERY_STATUSES, "delivery_status")
}

fn validate_decimal_text(value: &str) -> Result<(), ValidationError> {
    parse_decimal("value", value)
        .map(|_| ())
        .map_err(|_| ValidationError::new("decimal"))
}

/// Fractional digits the quantity and money columns store.
pub const DECIMAL_PLACES: u32 = 2;

/// Rejects a value the store would have to round. Trailing zeros don't count,
/// so `2.500` passes.
pub fn check_decimal_places(field: &str, value: Decimal) -> ApiResult<Decimal> {
    if value.normalize().scale() > DECIMAL_PLACES {
        return Err(ApiError::ValidationError(format!(
            "{field} allows at most {DECIMAL_PLACES} decimal places, got '{value}'"
        )));
    }
    Ok(value)
}

/// Parse a text-box value into a `Decimal`.
///
/// Surrounding whitespace is ignored; an empty or non-numeric value, or one
/// with more than [`DECIMAL_PLACES`] fractional digits, is a validation error
/// naming `field`.
pub fn parse_decimal(field: &str, text: &str) -> ApiResult<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ApiError::ValidationError(format!("{field} is required")));
    }
    let value = Decimal::from_str(trimmed)
        .map_err(|_| ApiError::ValidationError(format!("{field} must be a number, got '{trimmed}'")))?;
    check_decimal_places(field, value)
}

/// Like [`parse_decimal`] but rejects negative values.
pub fn parse_quantity(field: &str, text: &str) -> ApiResult<Decimal> {
    let value = parse_decimal(field, text)?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ApiError::ValidationError(format!("{field} must not be negative")));
    }
    Ok(value)
}

/// Run the derive-generated checks and map failures into [`ApiError`].
pub fn validate_form<F: Validate>(form: &F) -> ApiResult<()> {
    form.validate().map_err(ApiError::from)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ClientForm {
    #[validate(length(min = 1, max = 32))]
    pub client_id: String,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub contact: String,
    #[validate(length(min = 1, max = 200))]
    pub address: String,
    #[validate(custom(function = "validate_client_category"))]
    pub category: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SupplierForm {
    #[validate(length(min = 1, max = 32))]
    pub supplier_id: String,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub phone: String,
    #[validate(length(min = 1, max = 200))]
    pub address: String,
    #[validate(custom(function = "validate_supplier_type"))]
    pub supplier_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct EmployeeForm {
    #[validate(length(min = 1, max = 32))]
    pub employee_id: String,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub google_account: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ProductForm {
    #[validate(length(min = 1, max = 32))]
    pub product_id: String,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(custom(function = "validate_product_grade"))]
    pub grade: String,
    #[validate(custom(function = "validate_decimal_text"))]
    pub quantity: String,
    #[validate(custom(function = "validate_decimal_text"))]
    pub unit_price: String,
    #[validate(length(min = 1, max = 32))]
    pub supplier_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct TransactionLineForm {
    #[validate(length(min = 1, max = 32))]
    pub product_id: String,
    #[validate(custom(function = "validate_decimal_text"))]
    pub quantity: String,
    #[validate(custom(function = "validate_decimal_text"))]
    pub unit_price: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct TransactionForm {
    #[validate(length(min = 1, max = 32))]
    pub transaction_id: String,
    #[validate(length(min = 1, max = 32))]
    pub employee_id: String,
    #[validate(length(min = 1, max = 32))]
    pub client_id: String,
    #[validate(custom(function = "validate_payment_status"))]
    pub payment_status: String,
    #[validate(custom(function = "validate_delivery_status"))]
    pub delivery_status: String,
    #[validate(length(min = 1), nested)]
    pub lines: Vec<TransactionLineForm>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_form() -> ClientForm {
        ClientForm {
            client_id: "CID-00001".to_string(),
            name: "Acme Fresh".to_string(),
            contact: "0917 555 0101".to_string(),
            address: "Pier 4, Harbor Road".to_string(),
            category: "Retail".to_string(),
        }
    }

    #[test]
    fn test_valid_client_form_passes() {
        assert!(validate_form(&client_form()).is_ok());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let mut form = client_form();
        form.name.clear();
        let err = validate_form(&form).unwrap_err();
        assert!(matches!(err, ApiError::ValidationError(msg) if msg.contains("name")));
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let mut form = client_form();
        form.category = "Pirate".to_string();
        assert!(validate_form(&form).is_err());
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("price", " 12.50 ").unwrap(), Decimal::new(1250, 2));
        assert!(matches!(
            parse_decimal("price", "twelve"),
            Err(ApiError::ValidationError(msg)) if msg.contains("price")
        ));
        assert!(parse_decimal("price", "   ").is_err());
    }

    #[test]
    fn test_parse_decimal_rejects_extra_places() {
        assert_eq!(parse_decimal("quantity", "2.50").unwrap(), Decimal::new(250, 2));
        assert_eq!(parse_decimal("quantity", "2.500").unwrap(), Decimal::new(25, 1));
        assert!(matches!(
            parse_decimal("quantity", "2.555"),
            Err(ApiError::ValidationError(msg)) if msg.contains("at most 2 decimal places")
        ));
        assert!(check_decimal_places("unit_price", Decimal::new(10001, 3)).is_err());
        assert!(check_decimal_places("unit_price", Decimal::new(10010, 3)).is_ok());
    }

    #[test]
    fn test_parse_quantity_rejects_negative() {
        assert!(parse_quantity("quantity", "-1").is_err());
        assert_eq!(parse_quantity("quantity", "0").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_product_form_with_bad_number_fails() {
        let form = ProductForm {
            product_id: "PID-00001".to_string(),
            name: "Tilapia".to_string(),
            grade: "A".to_string(),
            quantity: "ten".to_string(),
            unit_price: "120".to_string(),
            supplier_id: None,
        };
        assert!(validate_form(&form).is_err());
    }

    #[test]
    fn test_transaction_form_requires_lines() {
        let form = TransactionForm {
            transaction_id: "TID-00001".to_string(),
            employee_id: "EID-00001".to_string(),
            client_id: "CID-00001".to_string(),
            payment_status: "Paid".to_string(),
            delivery_status: "Pending".to_string(),
            lines: vec![],
        };
        assert!(validate_form(&form).is_err());
    }

    #[test]
    fn test_employee_form_checks_email() {
        let mut form = EmployeeForm {
            employee_id: "EID-00001".to_string(),
            name: "Maria Santos".to_string(),
            google_account: Some("not-an-email".to_string()),
        };
        assert!(validate_form(&form).is_err());
        form.google_account = Some("maria@example.com".to_string());
        assert!(validate_form(&form).is_ok());
        form.google_account = None;
        assert!(validate_form(&form).is_ok());
    }
}
