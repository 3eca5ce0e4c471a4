use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::Database;

/// Repository trait for changing a product's quantity in place
///
/// Implementations must apply the change in a single conditional statement on
/// the server (`quantity = quantity + delta` guarded by `quantity + delta >= 0`)
/// so that concurrent sales never lose an update.
#[async_trait]
pub trait AdjustStock<DB: Database>: Send + Sync {
    /// Add `delta` (negative to take stock out) to the product's quantity
    ///
    /// # Returns
    /// * `Ok(Some(quantity))` - The new quantity
    /// * `Ok(None)` - The product does not exist or the result would be negative;
    ///   nothing was changed
    /// * `Err` - An error if the statement could not be executed
    async fn adjust_quantity(
        &self,
        product_id: &str,
        delta: Decimal,
    ) -> Result<Option<Decimal>, Box<dyn std::error::Error + Send + Sync>>;
}
