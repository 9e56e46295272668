//! Built-in canned contracts.

pub mod designer_verification;
