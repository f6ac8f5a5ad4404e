//! Positional parameter binding
//!
//! Placeholder indices come from the position a value is appended at, never
//! from a fixed per-filter slot.

use serde_json::Value;
use std::fmt;

/// 1-based positional placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Placeholder(usize);

impl Placeholder {
    pub fn index(&self) -> usize {
        self.0
    }
}

// PostgreSQL native `$n` syntax; the only place the token format is decided.
impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

/// Append-only parameter list shared by WHERE and HAVING compilation
#[derive(Debug, Clone, Default)]
pub struct ParameterBinder {
    values: Vec<Value>,
}

impl ParameterBinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value and return the placeholder that refers to it
    pub fn bind(&mut self, value: impl Into<Value>) -> Placeholder {
        self.values.push(value.into());
        Placeholder(self.values.len())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}
