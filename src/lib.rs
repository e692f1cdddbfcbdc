// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of durafmt, released under the BSD 3-Clause License.

pub mod component;
pub mod format;
pub mod validate;

pub use component::{decompose, Component, Unit};
pub use format::{pluralize, to_string_long, to_string_short, LongDuration, ShortDuration};
pub use validate::{validate, Millis};

/// Errors that may be encountered when using the durafmt crate.
///
/// Every variant carries the offending input rendered as text.
///
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Duration: Argument is not a number: {0}")]
    NotANumber(String),

    #[error("Duration: Argument is not an integer: {0}")]
    NotAnInteger(String),

    #[error("Duration: Argument is not positive: {0}")]
    NotPositive(String),

    #[error("Duration: Argument is out of range: {0}")]
    OutOfRange(String),
}
