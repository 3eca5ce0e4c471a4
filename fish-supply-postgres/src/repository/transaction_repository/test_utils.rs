use chrono::{SubsecRound, Utc};
use fish_supply_db::models::{ClientModel, EmployeeModel, TransactionItemModel, TransactionModel};
use fish_supply_db::repository::Create;
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use std::error::Error;
use uuid::Uuid;

use crate::postgres_repositories::Repositories;
use crate::repository::client_repository::test_utils::create_test_client;
use crate::repository::employee_repository::test_utils::create_test_employee;
use crate::test_helper::unique_id;

/// Build a transaction from `(product_id, quantity, unit_price)` lines.
pub fn create_test_transaction(
    transaction_id: &str,
    employee_id: &str,
    client_id: &str,
    lines: &[(&str, i64, i64)],
) -> TransactionModel {
    let items: Vec<TransactionItemModel> = lines
        .iter()
        .map(|(product_id, quantity, unit_price)| TransactionItemModel {
            id: Uuid::new_v4(),
            transaction_id: HeaplessString::try_from(transaction_id).unwrap(),
            product_id: HeaplessString::try_from(*product_id).unwrap(),
            quantity: Decimal::from(*quantity),
            unit_price: Decimal::from(*unit_price),
        })
        .collect();
    let total_amount = items.iter().map(TransactionItemModel::subtotal).sum();

    TransactionModel {
        transaction_id: HeaplessString::try_from(transaction_id).unwrap(),
        employee_id: HeaplessString::try_from(employee_id).unwrap(),
        client_id: HeaplessString::try_from(client_id).unwrap(),
        total_amount,
        transaction_date: Utc::now().trunc_subsecs(6),
        payment_status: HeaplessString::try_from("Unpaid").unwrap(),
        delivery_status: HeaplessString::try_from("Pending").unwrap(),
        items,
    }
}

/// Insert the client and employee a transaction has to reference.
pub async fn seed_parties(
    repos: &Repositories,
) -> Result<(ClientModel, EmployeeModel), Box<dyn Error + Send + Sync>> {
    let client = repos
        .client_repository
        .create(create_test_client(&unique_id("CID-")))
        .await?;
    let employee = repos
        .employee_repository
        .create(create_test_employee(&unique_id("EID-"), None))
        .await?;
    Ok((client, employee))
}
