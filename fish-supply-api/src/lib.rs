pub mod error;
pub mod telemetry;
pub mod validation;

pub use error::*;
pub use telemetry::init_tracing;
pub use validation::*;
