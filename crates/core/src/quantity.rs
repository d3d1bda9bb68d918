//! Quantity coercion at the input boundary.
//!
//! Quantities reach the store from typed callers, from command-line text and
//! from JSON files. Each source goes through [`ToQuantity`], which either
//! produces an `i64` or a validation error. Nothing downstream has to guess.

use serde_json::Value;

use crate::error::{DomainError, DomainResult};

/// Conversion of a loosely-typed quantity into a stock count.
///
/// Accepted inputs:
/// - integers of any width, when they fit in `i64`
/// - text holding an optionally signed decimal integer, surrounding
///   whitespace ignored (`" 12 "`, `"+3"`, `"-4"`)
/// - finite floats, truncated toward zero
/// - JSON numbers, booleans (`true` = 1) and strings following the rules above
///
/// Everything else (`"5.0"`, `"abc"`, `null`, arrays, objects) is rejected.
pub trait ToQuantity: core::fmt::Debug {
    fn to_quantity(&self) -> DomainResult<i64>;
}

impl<T: ToQuantity + ?Sized> ToQuantity for &T {
    fn to_quantity(&self) -> DomainResult<i64> {
        (**self).to_quantity()
    }
}

macro_rules! impl_integer_quantity {
    ($($t:ty),*) => {
        $(
            impl ToQuantity for $t {
                fn to_quantity(&self) -> DomainResult<i64> {
                    i64::try_from(*self).map_err(|_| out_of_range(self))
                }
            }
        )*
    };
}

impl_integer_quantity!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl ToQuantity for f64 {
    fn to_quantity(&self) -> DomainResult<i64> {
        truncate_float(*self)
    }
}

impl ToQuantity for f32 {
    fn to_quantity(&self) -> DomainResult<i64> {
        truncate_float(f64::from(*self))
    }
}

impl ToQuantity for bool {
    fn to_quantity(&self) -> DomainResult<i64> {
        Ok(i64::from(*self))
    }
}

impl ToQuantity for str {
    fn to_quantity(&self) -> DomainResult<i64> {
        let trimmed = self.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("quantity must be an integer, got empty text"));
        }
        trimmed
            .parse::<i64>()
            .map_err(|_| DomainError::validation(format!("quantity must be an integer, got {self:?}")))
    }
}

impl ToQuantity for String {
    fn to_quantity(&self) -> DomainResult<i64> {
        self.as_str().to_quantity()
    }
}

impl ToQuantity for Value {
    fn to_quantity(&self) -> DomainResult<i64> {
        match self {
            Value::Number(n) => {
                if let Some(v) = n.as_i64() {
                    Ok(v)
                } else if n.is_u64() {
                    Err(out_of_range(n))
                } else {
                    match n.as_f64() {
                        Some(f) => truncate_float(f),
                        None => Err(DomainError::validation(format!(
                            "quantity must be an integer, got {n}"
                        ))),
                    }
                }
            }
            Value::Bool(b) => b.to_quantity(),
            Value::String(s) => s.to_quantity(),
            other => Err(DomainError::validation(format!(
                "quantity must be an integer, got {other}"
            ))),
        }
    }
}

fn truncate_float(value: f64) -> DomainResult<i64> {
    if !value.is_finite() {
        return Err(DomainError::validation(format!(
            "quantity must be an integer, got {value}"
        )));
    }
    let truncated = value.trunc();
    // i64::MAX is not representable as f64; 2^63 is the first value out of range.
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(out_of_range(&value));
    }
    Ok(truncated as i64)
}

fn out_of_range(value: &dyn core::fmt::Display) -> DomainError {
    DomainError::validation(format!("quantity {value} is out of range"))
}
