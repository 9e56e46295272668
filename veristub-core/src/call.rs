//! Call descriptions.

use crate::value::{IntoValue, Value};

/// One mocked contract invocation: target contract, function, and ordered
/// arguments.
///
/// A `Call` is created fresh per invocation and never retained; nothing in
/// the framework keeps state across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    /// The contract identifier being targeted.
    pub contract: String,
    /// The function name within the contract.
    pub function: String,
    /// Positional arguments, in call order.
    pub args: Vec<Value>,
}

impl Call {
    /// Create a call with no arguments.
    pub fn new(contract: impl Into<String>, function: impl Into<String>) -> Self {
        Self {
            contract: contract.into(),
            function: function.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl IntoValue) -> Self {
        self.args.push(arg.into_value());
        self
    }

    /// Replace the argument list wholesale.
    pub fn args<I, V>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: IntoValue,
    {
        self.args = args.into_iter().map(IntoValue::into_value).collect();
        self
    }
}
