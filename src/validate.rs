// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of durafmt, released under the BSD 3-Clause License.

use log::trace;
use serde_json::Value;
use std::time::Duration;

use crate::Error;

/// The smallest `f64` that no longer fits in a `u64`.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// Values that may be interpreted as a count of milliseconds.
///
/// Implementations check, in order, that the value is a number, that it is
/// an integer, and that it is not negative. The first failing check
/// determines the error.
///
pub trait Millis {
    /// Convert the value to a whole number of milliseconds.
    ///
    /// # Errors
    /// * `Error::NotANumber` when the value is absent, non-numeric, or NaN.
    /// * `Error::NotAnInteger` when the value has a fractional part.
    /// * `Error::NotPositive` when the value is negative.
    /// * `Error::OutOfRange` when the value does not fit in a `u64`.
    ///
    fn to_millis(&self) -> Result<u64, Error>;
}

/// Validate a duration given in milliseconds.
///
/// # Returns
/// `Ok(u64)` with the validated count of milliseconds.
///
/// # Errors
/// Returns the first check that `input` fails. See [`Millis::to_millis`].
///
pub fn validate<T: Millis + ?Sized>(input: &T) -> Result<u64, Error> {
    let millis = input.to_millis()?;
    trace!("Validated a duration of {millis} milliseconds.");
    Ok(millis)
}

/// Check a floating point value, reporting errors with `text`.
fn check_float(value: f64, text: String) -> Result<u64, Error> {
    if value.is_nan() {
        return Err(Error::NotANumber(text));
    }
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(Error::NotAnInteger(text));
    }
    if value < 0.0 {
        return Err(Error::NotPositive(text));
    }
    if value >= U64_LIMIT {
        return Err(Error::OutOfRange(text));
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let millis = value as u64;
    Ok(millis)
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {
        $(
            impl Millis for $t {
                fn to_millis(&self) -> Result<u64, Error> {
                    u64::try_from(*self).map_err(|_| Error::OutOfRange(self.to_string()))
                }
            }
        )*
    };
}

macro_rules! impl_signed {
    ($($t:ty),*) => {
        $(
            impl Millis for $t {
                fn to_millis(&self) -> Result<u64, Error> {
                    u64::try_from(*self).map_err(|_| {
                        if *self < 0 {
                            Error::NotPositive(self.to_string())
                        } else {
                            Error::OutOfRange(self.to_string())
                        }
                    })
                }
            }
        )*
    };
}

impl_unsigned!(u8, u16, u32, u64, u128, usize);
impl_signed!(i8, i16, i32, i64, i128, isize);

impl Millis for f64 {
    fn to_millis(&self) -> Result<u64, Error> {
        check_float(*self, self.to_string())
    }
}

impl Millis for f32 {
    fn to_millis(&self) -> Result<u64, Error> {
        check_float(f64::from(*self), self.to_string())
    }
}

impl Millis for str {
    fn to_millis(&self) -> Result<u64, Error> {
        let text = self.trim();

        if let Ok(value) = text.parse::<u64>() {
            return Ok(value);
        }
        if let Ok(value) = text.parse::<i64>() {
            return u64::try_from(value).map_err(|_| Error::NotPositive(text.into()));
        }

        match text.parse::<f64>() {
            Ok(value) => check_float(value, text.into()),
            Err(_) => Err(Error::NotANumber(text.into())),
        }
    }
}

impl Millis for String {
    fn to_millis(&self) -> Result<u64, Error> {
        self.as_str().to_millis()
    }
}

impl<T: Millis> Millis for Option<T> {
    fn to_millis(&self) -> Result<u64, Error> {
        match self {
            Some(value) => value.to_millis(),
            None => Err(Error::NotANumber("None".into())),
        }
    }
}

impl Millis for Value {
    fn to_millis(&self) -> Result<u64, Error> {
        match self {
            Value::Number(number) => {
                if let Some(value) = number.as_u64() {
                    Ok(value)
                } else if number.is_i64() {
                    Err(Error::NotPositive(number.to_string()))
                } else if let Some(value) = number.as_f64() {
                    check_float(value, number.to_string())
                } else {
                    Err(Error::NotANumber(number.to_string()))
                }
            }
            Value::String(text) => text.as_str().to_millis(),
            _ => Err(Error::NotANumber(self.to_string())),
        }
    }
}

impl Millis for Duration {
    fn to_millis(&self) -> Result<u64, Error> {
        if self.subsec_nanos() % 1_000_000 != 0 {
            return Err(Error::NotAnInteger(format!("{self:?}")));
        }
        u64::try_from(self.as_millis()).map_err(|_| Error::OutOfRange(format!("{self:?}")))
    }
}

impl<T: Millis + ?Sized> Millis for &T {
    fn to_millis(&self) -> Result<u64, Error> {
        (**self).to_millis()
    }
}
