use chrono::{DateTime, SubsecRound, Utc};
use fish_supply_api::{
    check_decimal_places, parse_decimal, parse_quantity, validate_form, ApiError, ApiResult,
    TransactionForm, DECIMAL_PLACES,
};
use heapless::String as HeaplessString;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Entity, EntityKind, Identifiable};
use crate::utils::bounded;
use crate::utils::filter::Filterable;

/// A sale to a client, recorded by an employee.
///
/// Inserting a transaction takes its item quantities out of stock; deleting
/// it puts them back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionModel {
    pub transaction_id: HeaplessString<32>,
    pub employee_id: HeaplessString<32>,
    pub client_id: HeaplessString<32>,
    pub total_amount: Decimal,
    pub transaction_date: DateTime<Utc>,
    pub payment_status: HeaplessString<20>,
    pub delivery_status: HeaplessString<20>,
    #[serde(default)]
    pub items: Vec<TransactionItemModel>,
}

impl TransactionModel {
    /// Sum of the item subtotals.
    pub fn items_total(&self) -> Decimal {
        self.items.iter().map(TransactionItemModel::subtotal).sum()
    }

    /// Fails if the total or any line holds more fractional digits than the
    /// store keeps.
    pub fn check_decimal_places(&self) -> ApiResult<()> {
        check_decimal_places("total_amount", self.total_amount)?;
        for item in &self.items {
            check_decimal_places("quantity", item.quantity)?;
            check_decimal_places("unit_price", item.unit_price)?;
        }
        Ok(())
    }
}

/// One product line of a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionItemModel {
    pub id: Uuid,
    pub transaction_id: HeaplessString<32>,
    pub product_id: HeaplessString<32>,
    pub quantity: Decimal,
    pub unit_price: Decimal,
}

impl TransactionItemModel {
    pub fn subtotal(&self) -> Decimal {
        self.quantity * self.unit_price
    }
}

impl Identifiable for TransactionModel {
    fn get_id(&self) -> &str {
        self.transaction_id.as_str()
    }
}

impl Entity for TransactionModel {
    const KIND: EntityKind = EntityKind::Transaction;
    const ID_PREFIX: &'static str = "TID-";
}

impl Filterable for TransactionModel {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.transaction_id.as_str(),
            self.client_id.as_str(),
            self.employee_id.as_str(),
        ]
    }

    fn category(&self) -> Option<&str> {
        Some(self.payment_status.as_str())
    }
}

impl TryFrom<TransactionForm> for TransactionModel {
    type Error = ApiError;

    /// Builds the transaction dated now, with `total_amount` computed from the lines.
    fn try_from(form: TransactionForm) -> Result<Self, Self::Error> {
        validate_form(&form)?;
        let transaction_id: HeaplessString<32> = bounded("transaction_id", &form.transaction_id)?;

        let mut items = Vec::with_capacity(form.lines.len());
        for line in &form.lines {
            let quantity = parse_quantity("quantity", &line.quantity)?;
            if quantity.is_zero() {
                return Err(ApiError::ValidationError(format!(
                    "quantity for {} must be greater than zero",
                    line.product_id
                )));
            }
            items.push(TransactionItemModel {
                id: Uuid::new_v4(),
                transaction_id: transaction_id.clone(),
                product_id: bounded("product_id", &line.product_id)?,
                quantity,
                unit_price: parse_decimal("unit_price", &line.unit_price)?,
            });
        }

        let mut transaction = TransactionModel {
            transaction_id,
            employee_id: bounded("employee_id", &form.employee_id)?,
            client_id: bounded("client_id", &form.client_id)?,
            total_amount: Decimal::ZERO,
            // timestamptz keeps microseconds
            transaction_date: Utc::now().trunc_subsecs(6),
            payment_status: bounded("payment_status", &form.payment_status)?,
            delivery_status: bounded("delivery_status", &form.delivery_status)?,
            items,
        };
        // half away from zero, as numeric does
        transaction.total_amount = transaction
            .items_total()
            .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
        Ok(transaction)
    }
}
