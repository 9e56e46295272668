use veristub::contracts::designer_verification::{CONTRACT_ID, DesignerVerification};
use veristub::{MockChain, Value};

/// A chain with the canned designer-verification contract registered.
pub fn designer_chain() -> MockChain {
    MockChain::builder()
        .register(CONTRACT_ID, DesignerVerification)
        .expect("fresh builder cannot hold a duplicate")
        .build()
}

pub fn s(v: &str) -> Value {
    Value::Str(v.to_string())
}
