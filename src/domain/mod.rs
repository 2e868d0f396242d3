//! Core domain types and logic.

pub mod transaction;
pub mod asset;
pub mod lot;
pub mod holding;
pub mod engine;
pub mod invested;
pub mod valuation;
pub mod error;
