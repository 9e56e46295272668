//! Error types for Veristub.
//!
//! Dispatch itself cannot fail — unmatched contracts and functions resolve
//! to [`Value::None`] by design. Errors exist at the edges:
//!
//! - [`RegistryError`] - building a chain (duplicate contract ids)
//! - [`DispatchError`] - strict-mode lookups that refuse to degrade silently
//! - [`VeristubError`] - top-level error type
//!
//! [`Value::None`]: crate::Value::None

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Veristub operations.
#[derive(Error, Debug)]
pub enum VeristubError {
    /// An error occurred while building a chain.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// A strict-mode dispatch missed.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors that can occur while building a chain's contract registry.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// A handler is already registered under this contract id.
    #[error("contract already registered: {0}")]
    DuplicateContract(String),
}

/// Errors from strict-mode dispatch (`try_call`).
///
/// The lenient `call` path never produces these; it resolves misses to
/// `Value::None`.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// No handler is registered under the target contract id.
    #[error("no contract registered under id: {0}")]
    UnknownContract(String),

    /// The handler resolved the function to an absent result.
    #[error("contract {contract} has no function: {function}")]
    UnknownFunction {
        /// The contract id that was targeted.
        contract: String,
        /// The function name that missed.
        function: String,
    },
}

impl From<BoxError> for VeristubError {
    fn from(err: BoxError) -> Self {
        VeristubError::Custom(err)
    }
}
