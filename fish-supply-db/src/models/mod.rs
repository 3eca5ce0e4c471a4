pub mod client;
pub mod employee;
pub mod entity;
pub mod identifiable;
pub mod product;
pub mod supplier;
pub mod transaction;

// Re-exports
pub use client::*;
pub use employee::*;
pub use entity::*;
pub use identifiable::*;
pub use product::*;
pub use supplier::*;
pub use transaction::*;
