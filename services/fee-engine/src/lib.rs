//! Fee & Variance Engine
//!
//! Pure, synchronous computations for 401(k) plan payment tracking:
//! expected periodic fees from contract terms, variance classification
//! between expected and actual fees, payment input validation, and
//! Due/Paid compliance status per billing period.
//!
//! Every call is independent and side-effect free; the surrounding
//! application owns all I/O and asynchrony.

pub mod compliance;
pub mod engine;
pub mod events;
pub mod fees;
pub mod validation;
pub mod variance;
