//! Logging wrapper for call observation.

use veristub_core::{ContractHandler, Value};

/// Wraps a handler and logs every call it answers.
///
/// With the `tracing` feature enabled, each call emits an info-level event
/// carrying the function name, argument count, and whether the handler
/// answered or resolved to the absent result.
pub struct Traced<H> {
    inner: H,
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    contract: &'static str,
}

impl<H> Traced<H> {
    /// Wrap `inner`, labeling log events with `contract`.
    pub fn new(contract: &'static str, inner: H) -> Self {
        Self { inner, contract }
    }

    /// The wrapped handler.
    pub fn inner(&self) -> &H {
        &self.inner
    }

    /// Unwrap.
    pub fn into_inner(self) -> H {
        self.inner
    }
}

impl<H: ContractHandler> ContractHandler for Traced<H> {
    async fn call(&self, function: &str, args: &[Value]) -> Value {
        let result = self.inner.call(function, args).await;
        #[cfg(feature = "tracing")]
        {
            tracing::info!(
                contract = self.contract,
                function,
                argc = args.len(),
                answered = !result.is_none(),
                "mocked contract call"
            );
        }
        result
    }
}
