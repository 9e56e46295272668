//! Testing utilities for Veristub.
//!
//! This module provides utilities to make testing contract consumers easier.
//!
//! # Features
//!
//! - [`Scripted`]: a programmable handler answering from canned
//!   `(function, value)` pairs
//! - [`Recording`]: a wrapper that records every call a handler receives

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use veristub_core::{ContractHandler, IntoValue, Value};

// ============================================================================
// Scripted Handler
// ============================================================================

/// A handler answering from a script of canned responses.
///
/// Functions not in the script resolve to [`Value::None`], matching the
/// miss behavior of real handlers.
///
/// # Example
///
/// ```rust,ignore
/// let handler = Scripted::new()
///     .answer("get-balance", 100u64)
///     .answer("is-admin", false);
/// ```
#[derive(Default)]
pub struct Scripted {
    responses: HashMap<String, Value>,
}

impl Scripted {
    /// Create an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a canned response for `function`.
    ///
    /// Later entries for the same function override earlier ones.
    pub fn answer(mut self, function: impl Into<String>, value: impl IntoValue) -> Self {
        self.responses.insert(function.into(), value.into_value());
        self
    }
}

impl ContractHandler for Scripted {
    async fn call(&self, function: &str, _args: &[Value]) -> Value {
        self.responses.get(function).cloned().unwrap_or(Value::None)
    }
}

// ============================================================================
// Recording Handler
// ============================================================================

/// One recorded call: function name and arguments as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// The function that was called.
    pub function: String,
    /// The arguments, in call order.
    pub args: Vec<Value>,
}

/// Wraps a handler and records every call it receives.
///
/// Useful for verifying that a consumer issues the calls you expect.
/// Clones share the same log.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = Recording::new(Scripted::new().answer("ping", true));
/// let log = recorder.log();
///
/// // dispatch through a chain holding `recorder`...
///
/// assert_eq!(log.calls().len(), 1);
/// ```
pub struct Recording<H> {
    inner: H,
    log: CallLog,
}

impl<H> Recording<H> {
    /// Wrap `inner` with a fresh call log.
    pub fn new(inner: H) -> Self {
        Self {
            inner,
            log: CallLog::default(),
        }
    }

    /// A shared handle to the call log.
    ///
    /// The handle stays valid after the handler moves into a chain.
    pub fn log(&self) -> CallLog {
        self.log.clone()
    }
}

impl<H: ContractHandler> ContractHandler for Recording<H> {
    async fn call(&self, function: &str, args: &[Value]) -> Value {
        self.log.push(RecordedCall {
            function: function.to_string(),
            args: args.to_vec(),
        });
        self.inner.call(function, args).await
    }
}

/// Shared log of calls received by a [`Recording`] handler.
#[derive(Default, Clone)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl CallLog {
    fn push(&self, call: RecordedCall) {
        self.calls.lock().unwrap().push(call);
    }

    /// A clone of all recorded calls.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// The number of recorded calls.
    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Clear the log.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}
