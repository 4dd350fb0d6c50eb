//! The candidate items a select chooses from.

use std::fmt;

/// The value half of a [`SelectOption`]: a string or a number.
///
/// Selection membership compares options by this value, never by label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OptionValue {
    Str(String),
    Num(i64),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Str(s) => f.write_str(s),
            OptionValue::Num(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Str(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Str(s)
    }
}

impl From<i64> for OptionValue {
    fn from(n: i64) -> Self {
        OptionValue::Num(n)
    }
}

impl From<i32> for OptionValue {
    fn from(n: i32) -> Self {
        OptionValue::Num(n.into())
    }
}

/// A label/value pair. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectOption {
    label: String,
    value: OptionValue,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &OptionValue {
        &self.value
    }

    /// Whether `other` denotes the same choice as `self`.
    pub fn same_value(&self, other: &SelectOption) -> bool {
        self.value == other.value
    }
}
