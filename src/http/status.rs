//! Status code predicates.
//!
//! Each constructor returns a [`StatusPredicate`] that can be applied to
//! anything exposing a status. A missing status never matches.

use serde_json::Value;

/// Anything that may carry an HTTP status code.
pub trait HasStatus {
    fn status(&self) -> Option<u16>;
}

impl HasStatus for u16 {
    fn status(&self) -> Option<u16> {
        Some(*self)
    }
}

impl HasStatus for Value {
    /// Reads a numeric `status` field.
    fn status(&self) -> Option<u16> {
        self.get("status")
            .and_then(Value::as_u64)
            .and_then(|s| u16::try_from(s).ok())
    }
}

/// A single comparison against a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPredicate {
    Is(u16),
    LessThan(u16),
    AtLeast(u16),
    /// Half-open: `low <= status < high`.
    Within { low: u16, high: u16 },
}

impl StatusPredicate {
    pub fn matches<R>(&self, response: &R) -> bool
    where
        R: HasStatus + ?Sized,
    {
        let Some(status) = response.status() else {
            return false;
        };

        match *self {
            StatusPredicate::Is(code) => status == code,
            StatusPredicate::LessThan(bound) => status < bound,
            StatusPredicate::AtLeast(bound) => status >= bound,
            StatusPredicate::Within { low, high } => status >= low && status < high,
        }
    }
}

pub fn status_is(code: u16) -> StatusPredicate {
    StatusPredicate::Is(code)
}

pub fn status_code_lt(bound: u16) -> StatusPredicate {
    StatusPredicate::LessThan(bound)
}

pub fn status_code_gte(bound: u16) -> StatusPredicate {
    StatusPredicate::AtLeast(bound)
}

pub fn status_within_range(low: u16, high: u16) -> StatusPredicate {
    StatusPredicate::Within { low, high }
}

/// 2xx.
pub fn is_success<R: HasStatus + ?Sized>(response: &R) -> bool {
    status_within_range(200, 300).matches(response)
}

pub fn is_unauthorized<R: HasStatus + ?Sized>(response: &R) -> bool {
    status_is(401).matches(response)
}
