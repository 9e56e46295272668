//! # Contract Handler
//!
//! A [`ContractHandler`] answers function calls addressed to one mocked
//! contract. It is the terminal point of a dispatch: the chain selects the
//! handler by contract id, the handler selects the response by function name
//! and arguments.
//!
//! # Design Philosophy
//!
//! - **Pure**: a handler is a function of `(function, args)`; identical
//!   inputs always produce identical results, and nothing can fail — the
//!   miss path is [`Value::None`], not an error.
//! - **Pluggable**: anything implementing the trait can be registered under
//!   a contract id, from hand-written match blocks to scripted test doubles.
//!
//! # Static vs Dynamic Dispatch
//!
//! The trait uses native `async fn` for zero-cost static dispatch. For
//! runtime polymorphism (the chain's registry), use [`DynContractHandler`],
//! which every `ContractHandler` implements automatically.

use crate::value::Value;
use std::{future::Future, pin::Pin};

/// A mocked contract: answers calls by function name and arguments.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot answer mocked contract calls",
    label = "missing `ContractHandler` implementation",
    note = "Implement `ContractHandler` to register this type on a `MockChain`."
)]
pub trait ContractHandler: Send + Sync + 'static {
    /// Answer a call to `function` with positional `args`.
    ///
    /// Unrecognized functions must resolve to [`Value::None`].
    fn call(&self, function: &str, args: &[Value]) -> impl Future<Output = Value> + Send;
}

/// Object-safe version of [`ContractHandler`] for registry storage.
pub trait DynContractHandler: Send + Sync + 'static {
    /// Answer a call (dynamic dispatch version).
    fn call_dyn<'a>(
        &'a self,
        function: &'a str,
        args: &'a [Value],
    ) -> Pin<Box<dyn Future<Output = Value> + Send + 'a>>;
}

// Blanket implementation: any ContractHandler is a DynContractHandler.
impl<T: ContractHandler> DynContractHandler for T {
    fn call_dyn<'a>(
        &'a self,
        function: &'a str,
        args: &'a [Value],
    ) -> Pin<Box<dyn Future<Output = Value> + Send + 'a>> {
        Box::pin(self.call(function, args))
    }
}

// Allow Box<dyn DynContractHandler> where ContractHandler is expected.
impl ContractHandler for Box<dyn DynContractHandler> {
    async fn call(&self, function: &str, args: &[Value]) -> Value {
        self.call_dyn(function, args).await
    }
}
