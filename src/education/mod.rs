//! Education module
//!
//! Academy records, their admission and pricing rules, and course tooltips.

mod academy;
mod tooltip;

#[cfg(test)]
mod property_tests;

pub use academy::*;
pub use tooltip::*;
