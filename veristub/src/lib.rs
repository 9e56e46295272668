//! # veristub
//!
//! Mock contract-call dispatch for testing contract consumers without a
//! live chain.
//!
//! A [`MockChain`] holds handlers keyed by contract id. Dispatch routes a
//! call to the handler for its contract; the handler answers from canned
//! data keyed on the function name and, where the contract calls for it,
//! on the first argument. Misses resolve to [`Value::None`], never an error.
//!
//! ```rust,ignore
//! use veristub::{contracts::designer_verification, MockChain, Value};
//!
//! let chain = MockChain::builder()
//!     .register(
//!         designer_verification::CONTRACT_ID,
//!         designer_verification::DesignerVerification,
//!     )?
//!     .build();
//!
//! let verified = chain
//!     .call(
//!         designer_verification::CONTRACT_ID,
//!         designer_verification::IS_VERIFIED_DESIGNER,
//!         &[Value::Str("verified-designer".into())],
//!     )
//!     .await;
//! assert_eq!(verified, Value::Bool(true));
//! ```
//!
//! ⚠️  Everything here is canned. Nothing validates credentials or talks to
//! a chain; never wire this into production paths.
//!
//! # Crate layout
//!
//! - [`chain`] - the registry and dispatch entry point
//! - [`contracts`] - built-in canned contracts
//! - [`testing`] - scripted and recording handlers for tests
//! - [`logging`] - a tracing wrapper (feature `tracing`)
//! - [`static_table`] - phf-backed function tables (feature `phf`)

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use veristub_core;
pub use veristub_core::{
    BoxError, Call, ContractHandler, DispatchError, DynContractHandler, IntoValue, RegistryError,
    Value, VeristubError,
};

// Modules
pub mod chain;
pub mod contracts;
pub mod logging;
pub mod static_table;
pub mod testing;

pub use chain::{MockChain, MockChainBuilder};

#[cfg(feature = "phf")]
pub use phf;
