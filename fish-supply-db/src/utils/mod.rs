pub mod filter;
pub mod id_generator;
pub mod stats;

use fish_supply_api::{ApiError, ApiResult};
use heapless::String as HeaplessString;
use std::str::FromStr;

/// Trims `value` and stores it in a fixed-capacity string.
///
/// Input longer than `N` bytes is a validation error naming `field`.
pub fn bounded<const N: usize>(field: &str, value: &str) -> ApiResult<HeaplessString<N>> {
    HeaplessString::from_str(value.trim()).map_err(|_| {
        ApiError::ValidationError(format!("{field} is too long (max {N} chars)"))
    })
}
