// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of durafmt, released under the BSD 3-Clause License.

use log::trace;
use serde::Serialize;
use std::fmt;

use crate::format::pluralize;

pub const MILLIS_PER_SECOND: u64 = 1000;
pub const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: u64 = 24 * MILLIS_PER_HOUR;

/// Unit of one duration component.
///
/// Variants are ordered from the coarsest to the finest unit.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

/// When a unit appears in a decomposed duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Inclusion {
    /// Only when the unit's value is nonzero.
    NonZero,

    /// When the unit's value is nonzero or any coarser unit is present.
    Cascade,

    /// Always.
    Always,
}

/// One (unit, value) pair of a decomposed duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Component {
    pub unit: Unit,
    pub value: u64,
}

impl Unit {
    /// All units, coarsest first.
    pub const ALL: [Unit; 5] = [
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
        Unit::Millisecond,
    ];

    /// The singular name of the unit.
    pub fn name(self) -> &'static str {
        match self {
            Unit::Day => "day",
            Unit::Hour => "hour",
            Unit::Minute => "minute",
            Unit::Second => "second",
            Unit::Millisecond => "millisecond",
        }
    }

    /// The number of milliseconds in one of this unit.
    pub fn millis(self) -> u64 {
        match self {
            Unit::Day => MILLIS_PER_DAY,
            Unit::Hour => MILLIS_PER_HOUR,
            Unit::Minute => MILLIS_PER_MINUTE,
            Unit::Second => MILLIS_PER_SECOND,
            Unit::Millisecond => 1,
        }
    }

    /// The span of the next coarser unit, which bounds this unit's value.
    fn modulus(self) -> Option<u64> {
        match self {
            Unit::Day => None,
            Unit::Hour => Some(MILLIS_PER_DAY),
            Unit::Minute => Some(MILLIS_PER_HOUR),
            Unit::Second => Some(MILLIS_PER_MINUTE),
            Unit::Millisecond => Some(MILLIS_PER_SECOND),
        }
    }

    fn inclusion(self) -> Inclusion {
        match self {
            Unit::Day | Unit::Millisecond => Inclusion::NonZero,
            Unit::Hour => Inclusion::Cascade,
            Unit::Minute | Unit::Second => Inclusion::Always,
        }
    }

    /// Extract this unit's share of the given duration.
    fn extract(self, millis: u64) -> u64 {
        let remainder = match self.modulus() {
            Some(modulus) => millis % modulus,
            None => millis,
        };
        remainder / self.millis()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Component {
    /// Write `<value> <unit>` with the unit pluralized to match the value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, pluralize(self.unit.name(), self.value))
    }
}

/// Break a duration into its day, hour, minute, second, and millisecond parts.
///
/// Minutes and seconds are always present. Days and milliseconds are present
/// only when nonzero. Hours are present when nonzero or when days are present.
///
/// # Returns
/// The components ordered from the coarsest to the finest unit.
///
pub fn decompose(millis: u64) -> Vec<Component> {
    let mut components = Vec::with_capacity(Unit::ALL.len());

    for unit in Unit::ALL {
        let value = unit.extract(millis);
        let include = match unit.inclusion() {
            Inclusion::NonZero => value != 0,
            Inclusion::Cascade => value != 0 || !components.is_empty(),
            Inclusion::Always => true,
        };

        if include {
            components.push(Component { unit, value });
        }
    }

    trace!(
        "Decomposed {millis} milliseconds into {} components.",
        components.len()
    );
    components
}
