//! Chain-level dispatch: routing by contract id, strict mode, and the
//! testing handlers.

use veristub::contracts::designer_verification::{
    CONTRACT_ID, GET_TOTAL_VERIFIED_DESIGNERS, VERIFY_DESIGNER,
};
use veristub::logging::Traced;
use veristub::testing::{Recording, Scripted};
use veristub::{Call, DispatchError, MockChain, Value};

mod common;
use common::{designer_chain, s};

#[tokio::test]
async fn test_other_contracts_resolve_to_none() {
    let chain = designer_chain();

    let result = chain
        .call("some-other-contract", VERIFY_DESIGNER, &[s("new-designer")])
        .await;

    assert_eq!(result, Value::None);
}

#[tokio::test]
async fn test_dispatch_call_description() {
    let chain = designer_chain();

    let call = Call::new(CONTRACT_ID, GET_TOTAL_VERIFIED_DESIGNERS);
    assert_eq!(chain.dispatch(&call).await, Value::UInt(5));

    let miss = Call::new("ghost-contract", "ghost-function").arg("x");
    assert_eq!(chain.dispatch(&miss).await, Value::None);
}

#[tokio::test]
async fn test_try_call_surfaces_misses() {
    let chain = designer_chain();

    let unknown_contract = chain.try_call("ghost-contract", VERIFY_DESIGNER, &[]).await;
    assert!(matches!(
        unknown_contract,
        Err(DispatchError::UnknownContract(_))
    ));

    let unknown_function = chain.try_call(CONTRACT_ID, "revoke-designer", &[]).await;
    assert!(matches!(
        unknown_function,
        Err(DispatchError::UnknownFunction { .. })
    ));

    let hit = chain.try_call(CONTRACT_ID, VERIFY_DESIGNER, &[]).await;
    assert_eq!(hit.unwrap(), Value::ok(true));
}

#[tokio::test]
async fn test_scripted_handler_answers_from_script() {
    let chain = MockChain::builder()
        .register(
            "token",
            Scripted::new()
                .answer("get-balance", 100u64)
                .answer("is-admin", false),
        )
        .unwrap()
        .build();

    assert_eq!(
        chain.call("token", "get-balance", &[s("alice")]).await,
        Value::UInt(100)
    );
    assert_eq!(
        chain.call("token", "is-admin", &[s("alice")]).await,
        Value::Bool(false)
    );
    assert_eq!(chain.call("token", "transfer", &[]).await, Value::None);
}

#[tokio::test]
async fn test_recording_handler_logs_calls() {
    let recorder = Recording::new(Scripted::new().answer("ping", true));
    let log = recorder.log();

    let chain = MockChain::builder()
        .register("probe", recorder)
        .unwrap()
        .build();

    chain.call("probe", "ping", &[s("a")]).await;
    chain.call("probe", "pong", &[]).await;

    let calls = log.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].function, "ping");
    assert_eq!(calls[0].args, vec![s("a")]);
    assert_eq!(calls[1].function, "pong");

    log.clear();
    assert_eq!(log.count(), 0);
}

#[tokio::test]
async fn test_traced_wrapper_preserves_answers() {
    let chain = MockChain::builder()
        .register(
            CONTRACT_ID,
            Traced::new(
                CONTRACT_ID,
                veristub::contracts::designer_verification::DesignerVerification,
            ),
        )
        .unwrap()
        .build();

    assert_eq!(
        chain.call(CONTRACT_ID, VERIFY_DESIGNER, &[]).await,
        Value::ok(true)
    );
    assert_eq!(chain.call(CONTRACT_ID, "unknown", &[]).await, Value::None);
}

#[cfg(feature = "phf")]
#[tokio::test]
async fn test_phf_function_table() {
    use veristub::phf;
    use veristub::static_table::{FnTable, ResponseFn};

    static FUNCTIONS: phf::Map<&'static str, ResponseFn> = phf::phf_map! {
        "ping" => |_args| Value::ok(true),
        "echo-first" => |args| args.first().cloned().unwrap_or(Value::None),
    };

    let chain = MockChain::builder()
        .register("static", FnTable::new(&FUNCTIONS))
        .unwrap()
        .build();

    assert_eq!(chain.call("static", "ping", &[]).await, Value::ok(true));
    assert_eq!(
        chain.call("static", "echo-first", &[s("hello")]).await,
        s("hello")
    );
    assert_eq!(chain.call("static", "missing", &[]).await, Value::None);
}
