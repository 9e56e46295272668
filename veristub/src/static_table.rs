//! PHF-based static function tables.
//!
//! Provides a [`ContractHandler`] backed by a compile-time perfect hash map
//! from function name to response function. The table is immutable and must
//! be constructed with a static map reference.

#[cfg(feature = "phf")]
use veristub_core::{ContractHandler, Value};

/// A response function in a static table.
#[cfg(feature = "phf")]
pub type ResponseFn = fn(&[Value]) -> Value;

/// A contract handler backed by a `phf::Map` of response functions.
///
/// # Example
///
/// ```rust,ignore
/// static FUNCTIONS: phf::Map<&'static str, ResponseFn> = phf::phf_map! {
///     "ping" => |_args| Value::ok(true),
/// };
///
/// let handler = FnTable::new(&FUNCTIONS);
/// ```
#[cfg(feature = "phf")]
pub struct FnTable {
    map: &'static phf::Map<&'static str, ResponseFn>,
}

#[cfg(feature = "phf")]
impl FnTable {
    /// Create a handler from a static PHF map.
    pub const fn new(map: &'static phf::Map<&'static str, ResponseFn>) -> Self {
        Self { map }
    }
}

#[cfg(feature = "phf")]
impl ContractHandler for FnTable {
    async fn call(&self, function: &str, args: &[Value]) -> Value {
        match self.map.get(function) {
            Some(f) => f(args),
            None => Value::None,
        }
    }
}

// Note: no builder is provided because PHF maps are constructed at compile
// time, not runtime. Use MockChainBuilder with a hand-written handler for
// runtime-assembled contracts.
