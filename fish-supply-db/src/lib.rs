pub mod gateway;
pub mod models;
pub mod repository;
pub mod sync;
pub mod utils;

pub use gateway::Gateway;
pub use models::*;
pub use sync::*;
pub use utils::filter::{Filterable, RowFilter};
pub use utils::id_generator::generate_next_id;
pub use utils::stats::{compute_statistics, summarize_sales, SalesSummary, StockStatistics, LOW_STOCK_THRESHOLD};

#[cfg(test)]
pub mod test_helper;
