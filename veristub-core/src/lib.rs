//! # veristub-core
//!
//! Core traits and the value model for the Veristub mock contract-call
//! framework.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! handler implementations that don't need the full `veristub` chain.
//!
//! # Architecture
//!
//! A mocked call travels through three pieces:
//!
//! ## [`Value`]
//!
//! The dynamic value model: booleans, integers, strings, tuples, ok/err
//! responses, and the absent result [`Value::None`]. Plain Rust types
//! convert in via [`IntoValue`].
//!
//! ## [`Call`]
//!
//! The call description: target contract id, function name, and an ordered
//! argument list. Created fresh per invocation, never retained.
//!
//! ## [`ContractHandler`]
//!
//! The terminal endpoint: one mocked contract answering function calls.
//! Handlers are pure — identical inputs yield identical results, and the
//! miss path is [`Value::None`] rather than a failure. [`DynContractHandler`]
//! is the object-safe form used by registries.
//!
//! # Error Types
//!
//! - [`VeristubError`] - Top-level error type
//! - [`RegistryError`] - Chain construction errors
//! - [`DispatchError`] - Strict-mode dispatch misses

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod call;
mod error;
mod handler;
mod value;

// Re-exports
pub use call::Call;
pub use error::{BoxError, DispatchError, RegistryError, VeristubError};
pub use handler::{ContractHandler, DynContractHandler};
pub use value::{IntoValue, Value};
