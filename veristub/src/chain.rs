//! The mock chain: a registry of contract handlers plus the dispatch entry
//! point.
//!
//! A [`MockChain`] routes a call on its contract id, then hands the function
//! name and arguments to the matching [`ContractHandler`]. Routing misses
//! degrade silently: an unknown contract resolves to [`Value::None`], never
//! an error. Tests that want to assert wiring instead of canned data can use
//! [`MockChain::try_call`], which surfaces misses as [`DispatchError`]s.

use std::{collections::HashMap, sync::Arc};

use veristub_core::{Call, ContractHandler, DispatchError, DynContractHandler, RegistryError, Value};

/// A registry of mocked contracts, keyed by contract id.
///
/// Build one with [`MockChain::builder`], register handlers, then dispatch
/// calls. The chain holds no mutable state; every call is independent and
/// identical inputs always yield identical results.
pub struct MockChain {
    contracts: HashMap<String, Arc<dyn DynContractHandler>>,
}

impl MockChain {
    /// Start building a chain.
    pub fn builder() -> MockChainBuilder {
        MockChainBuilder::new()
    }

    /// Dispatch a call, resolving any miss to [`Value::None`].
    ///
    /// This is the lenient path: an unknown contract id, like an unknown
    /// function within a known contract, returns the absent result rather
    /// than failing.
    pub async fn call(&self, contract: &str, function: &str, args: &[Value]) -> Value {
        match self.contracts.get(contract) {
            Some(handler) => handler.call_dyn(function, args).await,
            None => Value::None,
        }
    }

    /// Dispatch a [`Call`] description. Equivalent to [`MockChain::call`].
    pub async fn dispatch(&self, call: &Call) -> Value {
        self.call(&call.contract, &call.function, &call.args).await
    }

    /// Dispatch a call, surfacing misses as errors instead of `None`.
    ///
    /// An unregistered contract id yields [`DispatchError::UnknownContract`];
    /// a handler that resolves the function to the absent result yields
    /// [`DispatchError::UnknownFunction`]. A function that legitimately
    /// answers `Value::None` is indistinguishable from a miss here, so use
    /// this only where `None` is not an expected answer.
    pub async fn try_call(
        &self,
        contract: &str,
        function: &str,
        args: &[Value],
    ) -> Result<Value, DispatchError> {
        let handler = self
            .contracts
            .get(contract)
            .ok_or_else(|| DispatchError::UnknownContract(contract.to_string()))?;

        match handler.call_dyn(function, args).await {
            Value::None => Err(DispatchError::UnknownFunction {
                contract: contract.to_string(),
                function: function.to_string(),
            }),
            value => Ok(value),
        }
    }

    /// Check whether a contract id is registered.
    pub fn contains(&self, contract: &str) -> bool {
        self.contracts.contains_key(contract)
    }

    /// The number of registered contracts.
    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    /// Whether the chain has no contracts.
    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }
}

/// Builder for [`MockChain`].
pub struct MockChainBuilder {
    contracts: HashMap<String, Arc<dyn DynContractHandler>>,
    allow_duplicates: bool,
}

impl Default for MockChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MockChainBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            contracts: HashMap::new(),
            allow_duplicates: false,
        }
    }

    /// Allow re-registering a contract id (later registrations override).
    pub fn allow_duplicates(mut self) -> Self {
        self.allow_duplicates = true;
        self
    }

    /// Register a handler under a contract id.
    ///
    /// Returns [`RegistryError::DuplicateContract`] if the id is taken and
    /// duplicates are not allowed.
    pub fn register<H: ContractHandler>(
        mut self,
        contract: impl Into<String>,
        handler: H,
    ) -> Result<Self, RegistryError> {
        let contract = contract.into();
        if !self.allow_duplicates && self.contracts.contains_key(&contract) {
            return Err(RegistryError::DuplicateContract(contract));
        }
        self.contracts.insert(contract, Arc::new(handler));
        Ok(self)
    }

    /// Build the chain.
    pub fn build(self) -> MockChain {
        MockChain {
            contracts: self.contracts,
        }
    }
}
