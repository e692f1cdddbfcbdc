// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of durafmt, released under the BSD 3-Clause License.

use std::borrow::Cow;
use std::fmt;

use crate::component::{decompose, Component, Unit};
use crate::validate::{validate, Millis};
use crate::Error;

/// Display a duration in the positional form `D:HH:MM:SS.mmm`.
///
/// Leading units appear only when nonzero (days) or when a coarser unit is
/// present (hours). The millisecond suffix appears only when nonzero.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShortDuration(pub u64);

/// Display a duration in the form `1 minute, and 1 second`.
///
/// Zero valued units are omitted. Use `with_omit_oxford_comma` or the
/// alternate flag (`{:#}`) to drop the comma before the final "and".
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LongDuration {
    millis: u64,
    omit_oxford_comma: bool,
}

impl fmt::Display for ShortDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 1 {
            return f.write_str("0:00");
        }

        for (i, component) in decompose(self.0).iter().enumerate() {
            match (i, component.unit) {
                (0, _) => write!(f, "{}", component.value)?,
                (_, Unit::Millisecond) => write!(f, ".{:03}", component.value)?,
                (_, _) => write!(f, ":{:02}", component.value)?,
            }
        }

        Ok(())
    }
}

impl LongDuration {
    pub fn new(millis: u64) -> Self {
        LongDuration {
            millis,
            omit_oxford_comma: false,
        }
    }

    pub fn with_omit_oxford_comma(mut self, omit_oxford_comma: bool) -> Self {
        self.omit_oxford_comma = omit_oxford_comma;
        self
    }
}

impl fmt::Display for LongDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let omit_oxford_comma = self.omit_oxford_comma || f.alternate();

        let components: Vec<Component> = decompose(self.millis)
            .into_iter()
            .filter(|c| c.value > 0)
            .collect();

        // Any nonzero duration has at least one nonzero component.
        let Some((last, rest)) = components.split_last() else {
            return f.write_str("0 seconds");
        };

        for (i, component) in rest.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{component}")?;
        }

        if !rest.is_empty() {
            if !omit_oxford_comma {
                f.write_str(",")?;
            }
            f.write_str(" and ")?;
        }

        write!(f, "{last}")
    }
}

/// Append an "s" to `word` unless `count` is one.
pub fn pluralize(word: &str, count: u64) -> Cow<'_, str> {
    if count == 1 {
        Cow::Borrowed(word)
    } else {
        Cow::Owned(format!("{word}s"))
    }
}

/// Format a duration in milliseconds as `"4:01"`.
///
/// # Errors
/// Returns `Err(durafmt::Error)` when `duration` is not a non-negative
/// integer.
///
pub fn to_string_short<T: Millis>(duration: T) -> Result<String, Error> {
    let millis = validate(&duration)?;
    Ok(ShortDuration(millis).to_string())
}

/// Format a duration in milliseconds as `"4 minutes, and 1 second"`.
///
/// Pass `omit_oxford_comma = true` for `"4 minutes and 1 second"`.
///
/// # Errors
/// Returns `Err(durafmt::Error)` when `duration` is not a non-negative
/// integer.
///
pub fn to_string_long<T: Millis>(duration: T, omit_oxford_comma: bool) -> Result<String, Error> {
    let millis = validate(&duration)?;
    Ok(LongDuration::new(millis)
        .with_omit_oxford_comma(omit_oxford_comma)
        .to_string())
}
