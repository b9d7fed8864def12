//! Types library for the 401(k) payment tracking system
//!
//! This library provides all core type definitions shared between the
//! fee engine and its consumers, ensuring type safety and deterministic
//! decimal arithmetic for every currency and rate value.
//!
//! # Modules
//! - `ids`: Unique identifiers (ClientId, ContractId, PaymentId)
//! - `contract`: Contract and fee term types
//! - `period`: Payment schedules and billing periods
//! - `payment`: Payment record types
//! - `variance`: Variance status and result types
//! - `errors`: Error taxonomy

// Public modules
pub mod contract;
pub mod errors;
pub mod ids;
pub mod payment;
pub mod period;
pub mod variance;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::contract::*;
    pub use crate::errors::*;
    pub use crate::ids::*;
    pub use crate::payment::*;
    pub use crate::period::*;
    pub use crate::variance::*;
}
