//! Aggregates shown on the dashboard, computed over already loaded rows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ProductModel, TransactionModel};

/// Products with a quantity strictly below this count as low stock.
pub const LOW_STOCK_THRESHOLD: Decimal = Decimal::TEN;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockStatistics {
    pub total_types: usize,
    pub total_quantity: Decimal,
    pub total_stock_value: Decimal,
    pub low_stock_count: usize,
}

pub fn compute_statistics(products: &[ProductModel]) -> StockStatistics {
    products
        .iter()
        .fold(StockStatistics::default(), |mut stats, product| {
            stats.total_types += 1;
            stats.total_quantity += product.quantity;
            stats.total_stock_value += product.total_value();
            if product.quantity < LOW_STOCK_THRESHOLD {
                stats.low_stock_count += 1;
            }
            stats
        })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesSummary {
    pub transaction_count: usize,
    pub total_revenue: Decimal,
    pub paid_count: usize,
    pub unpaid_count: usize,
    /// Sum of `total_amount` over transactions not marked `Paid`
    pub outstanding_amount: Decimal,
}

pub fn summarize_sales(transactions: &[TransactionModel]) -> SalesSummary {
    transactions
        .iter()
        .fold(SalesSummary::default(), |mut summary, transaction| {
            summary.transaction_count += 1;
            summary.total_revenue += transaction.total_amount;
            if transaction.payment_status.as_str() == "Paid" {
                summary.paid_count += 1;
            } else {
                summary.unpaid_count += 1;
                summary.outstanding_amount += transaction.total_amount;
            }
            summary
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use heapless::String as HeaplessString;

    fn product(id: &str, quantity: i64, unit_price: i64) -> ProductModel {
        ProductModel {
            product_id: HeaplessString::try_from(id).unwrap(),
            name: HeaplessString::try_from("Tuna").unwrap(),
            grade: HeaplessString::try_from("A").unwrap(),
            quantity: Decimal::from(quantity),
            unit_price: Decimal::from(unit_price),
            supplier_id: None,
        }
    }

    fn transaction(total: i64, payment_status: &str) -> TransactionModel {
        TransactionModel {
            transaction_id: HeaplessString::try_from("TID-00001").unwrap(),
            employee_id: HeaplessString::try_from("EID-00001").unwrap(),
            client_id: HeaplessString::try_from("CID-00001").unwrap(),
            total_amount: Decimal::from(total),
            transaction_date: Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(),
            payment_status: HeaplessString::try_from(payment_status).unwrap(),
            delivery_status: HeaplessString::try_from("Pending").unwrap(),
            items: vec![],
        }
    }

    #[test]
    fn test_empty_collection_is_all_zero() {
        assert_eq!(compute_statistics(&[]), StockStatistics::default());
        assert_eq!(LOW_STOCK_THRESHOLD, Decimal::from(10));
    }

    #[test]
    fn test_statistics() {
        let products = vec![
            product("PID-00001", 3, 100),
            product("PID-00002", 10, 50),
            product("PID-00003", 25, 20),
        ];

        let stats = compute_statistics(&products);

        assert_eq!(stats.total_types, 3);
        assert_eq!(stats.total_quantity, Decimal::from(38));
        assert_eq!(stats.total_stock_value, Decimal::from(300 + 500 + 500));
        // 10 is not strictly below the threshold
        assert_eq!(stats.low_stock_count, 1);
    }

    #[test]
    fn test_sales_summary() {
        let summary = summarize_sales(&[
            transaction(500, "Paid"),
            transaction(200, "Unpaid"),
            transaction(100, "Partial"),
        ]);

        assert_eq!(summary.transaction_count, 3);
        assert_eq!(summary.total_revenue, Decimal::from(800));
        assert_eq!(summary.paid_count, 1);
        assert_eq!(summary.unpaid_count, 2);
        assert_eq!(summary.outstanding_amount, Decimal::from(300));
    }
}
