//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (non-empty identifiers, ports in
//! the TCP range) so that once a value reaches the domain layer it can be
//! treated as trusted.
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Port could not be read as an integer.
    #[error("invalid port value: {0}")]
    InvalidPort(String),
    /// Port parsed as an integer but lies outside 1..=65535.
    #[error("port out of range: {0}")]
    PortOutOfRange(i64),
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Rejects blank input and keeps anything else exactly as given.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(TypeConstraintError::EmptyString);
                }
                Ok(Self(value))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(
    CitizenId,
    "Opaque citizen key in its text transit form; never blank, never altered."
);

/// Validated TCP port in the range 1..=65535.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "i64", into = "u16")]
pub struct Port(u16);

impl Port {
    /// Port used when a profile does not name one.
    pub const DEFAULT: Port = Port(5432);

    /// Creates a port ensuring it is inside the valid range.
    pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
        match u16::try_from(value) {
            Ok(port) if port > 0 => Ok(Self(port)),
            _ => Err(TypeConstraintError::PortOutOfRange(value)),
        }
    }

    /// Returns the raw port number.
    pub const fn get(self) -> u16 {
        self.0
    }
}

impl Display for Port {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Port {
    type Error = TypeConstraintError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Port> for u16 {
    fn from(value: Port) -> Self {
        value.0
    }
}

/// Port exactly as it arrived from a form or the persisted file.
///
/// Operators and older config files supply the port either as a JSON number
/// or as a string; the value is coerced with [`PortValue::to_port`] only when
/// it is actually needed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PortValue {
    Number(i64),
    Text(String),
}

impl PortValue {
    /// Coerces the raw value into a validated [`Port`].
    pub fn to_port(&self) -> Result<Port, TypeConstraintError> {
        match self {
            PortValue::Number(value) => Port::new(*value),
            PortValue::Text(text) => {
                let value = text
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| TypeConstraintError::InvalidPort(text.clone()))?;
                Port::new(value)
            }
        }
    }
}

impl Default for PortValue {
    fn default() -> Self {
        Port::DEFAULT.into()
    }
}

impl From<Port> for PortValue {
    fn from(value: Port) -> Self {
        PortValue::Number(i64::from(value.get()))
    }
}

impl Display for PortValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PortValue::Number(value) => write!(f, "{value}"),
            PortValue::Text(text) => write!(f, "{text}"),
        }
    }
}
