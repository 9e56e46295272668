//! # Experience Designer Verification (canned)
//!
//! A built-in handler reproducing the `experience-designer-verification`
//! contract surface with fixed answers — no credentials are checked, no
//! record is persisted, and `verify-designer` accepts every submission
//! unconditionally.
//!
//! Use this when testing consumers of the verification contract without a
//! live chain. It provides no validation of any kind.

use veristub_core::{ContractHandler, IntoValue, Value};

/// Contract id this handler answers under.
pub const CONTRACT_ID: &str = "experience-designer-verification";

/// Submit a designer for verification. Always succeeds in the mock.
pub const VERIFY_DESIGNER: &str = "verify-designer";
/// Check whether a designer id is verified.
pub const IS_VERIFIED_DESIGNER: &str = "is-verified-designer";
/// Fetch the record of a verified designer.
pub const GET_DESIGNER_INFO: &str = "get-designer-info";
/// Count of verified designers on the mock chain.
pub const GET_TOTAL_VERIFIED_DESIGNERS: &str = "get-total-verified-designers";

/// The one designer id the canned data knows as verified.
pub const VERIFIED_DESIGNER_ID: &str = "verified-designer";

/// Fixed count answered by `get-total-verified-designers`.
pub const TOTAL_VERIFIED_DESIGNERS: u128 = 5;

/// A verified designer's on-chain record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignerRecord {
    /// Block height at which verification happened.
    pub verified_at: u64,
    /// Certification tier, e.g. `"senior"`.
    pub certification_level: String,
    /// Declared specialization, e.g. `"e-commerce"`.
    pub specialization: String,
    /// Reputation score in `0..=100`.
    pub reputation_score: u8,
    /// Whether the verification is currently active.
    pub active: bool,
}

impl DesignerRecord {
    /// The fixed record answered for [`VERIFIED_DESIGNER_ID`].
    pub fn canned() -> Self {
        Self {
            verified_at: 1000,
            certification_level: "senior".to_string(),
            specialization: "e-commerce".to_string(),
            reputation_score: 95,
            active: true,
        }
    }
}

impl IntoValue for DesignerRecord {
    // Field keys keep the contract's kebab-case spelling.
    fn into_value(self) -> Value {
        Value::tuple([
            ("verified-at", Value::UInt(self.verified_at as u128)),
            ("certification-level", self.certification_level.into_value()),
            ("specialization", self.specialization.into_value()),
            ("reputation-score", Value::UInt(self.reputation_score as u128)),
            ("active", Value::Bool(self.active)),
        ])
    }
}

/// The canned `experience-designer-verification` handler.
///
/// Stateless; every call re-synthesizes its answer from constants.
#[derive(Debug, Default, Clone, Copy)]
pub struct DesignerVerification;

impl DesignerVerification {
    fn is_verified(args: &[Value]) -> bool {
        args.first().and_then(Value::as_str) == Some(VERIFIED_DESIGNER_ID)
    }
}

impl ContractHandler for DesignerVerification {
    async fn call(&self, function: &str, args: &[Value]) -> Value {
        match function {
            // Accepts any credentials, valid or not.
            VERIFY_DESIGNER => Value::ok(true),
            IS_VERIFIED_DESIGNER => Value::Bool(Self::is_verified(args)),
            GET_DESIGNER_INFO => {
                if Self::is_verified(args) {
                    DesignerRecord::canned().into_value()
                } else {
                    Value::None
                }
            }
            GET_TOTAL_VERIFIED_DESIGNERS => Value::UInt(TOTAL_VERIFIED_DESIGNERS),
            _ => Value::None,
        }
    }
}
