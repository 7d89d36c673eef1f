//! Config values stored in widget schemas and the config store

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single configuration value
///
/// Values coming back from the store or from a posted form are loosely
/// typed, so every accessor is forgiving about the underlying variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl ConfigValue {
    /// The empty string, written for fields missing from a posted form
    pub fn empty() -> Self {
        ConfigValue::Text(String::new())
    }

    /// Whether this value counts as set.
    ///
    /// Empty strings, `"0"`, zero and `false` are all unset.
    pub fn is_set(&self) -> bool {
        match self {
            ConfigValue::Bool(b) => *b,
            ConfigValue::Integer(i) => *i != 0,
            ConfigValue::Float(f) => *f != 0.0,
            ConfigValue::Text(s) => !s.is_empty() && s != "0",
        }
    }

    /// Read as integer, parsing text when necessary
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ConfigValue::Bool(b) => Some(i64::from(*b)),
            ConfigValue::Integer(i) => Some(*i),
            ConfigValue::Float(f) if f.is_finite() => Some(*f as i64),
            ConfigValue::Float(_) => None,
            ConfigValue::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Read as float, parsing text when necessary
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ConfigValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            ConfigValue::Integer(i) => Some(*i as f64),
            ConfigValue::Float(f) => Some(*f),
            ConfigValue::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Text view of the value (None for non-text variants)
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl Default for ConfigValue {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Bool(b) => write!(f, "{}", if *b { "1" } else { "0" }),
            ConfigValue::Integer(i) => write!(f, "{}", i),
            ConfigValue::Float(v) => write!(f, "{}", v),
            ConfigValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Integer(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        ConfigValue::Integer(i64::from(value))
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        ConfigValue::Float(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Text(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_values() {
        assert!(!ConfigValue::empty().is_set());
        assert!(!ConfigValue::from("0").is_set());
        assert!(!ConfigValue::from(0).is_set());
        assert!(!ConfigValue::from(0.0).is_set());
        assert!(!ConfigValue::from(false).is_set());
    }

    #[test]
    fn test_set_values() {
        assert!(ConfigValue::from("yes").is_set());
        assert!(ConfigValue::from("00").is_set());
        assert!(ConfigValue::from(-3).is_set());
        assert!(ConfigValue::from(true).is_set());
    }

    #[test]
    fn test_numeric_parsing() {
        assert_eq!(ConfigValue::from(" 25 ").as_i64(), Some(25));
        assert_eq!(ConfigValue::from("abc").as_i64(), None);
        assert_eq!(ConfigValue::from(true).as_i64(), Some(1));
        assert_eq!(ConfigValue::from("1.5").as_f64(), Some(1.5));
    }

    #[test]
    fn test_untagged_serialization() {
        let json = serde_json::to_string(&ConfigValue::from(10)).unwrap();
        assert_eq!(json, "10");

        let parsed: ConfigValue = serde_json::from_str("\"GB\"").unwrap();
        assert_eq!(parsed, ConfigValue::from("GB"));

        let parsed: ConfigValue = serde_json::from_str("false").unwrap();
        assert_eq!(parsed, ConfigValue::Bool(false));
    }
}
