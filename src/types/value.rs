//! Dynamic values that can be stored in a map slice.

use std::convert::TryFrom;

use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;
use strum::{EnumDiscriminants, AsRefStr};
use thiserror::Error;

use crate::types::number::{serialize_finite, Error as NumberError};
use crate::types::{MapSlice, Number};

#[derive(Debug, Error, Copy, Clone, PartialEq, Hash)]
pub enum Error {
    #[error("cannot convert value of kind {} into target type", .0.as_ref())]
    CannotConvert(ValueKind),
}

pub type Sequence = Vec<Value>;

/// The closed set of JSON shapes a map slice holds by default.
///
/// Variants are tried in declaration order when decoding, so a quoted number
/// stays a `String`, an integral number lands in `Integer` when it fits an
/// `i64`, and every other number, however large or small, lands in `Float`.
/// Objects decode into `Mapping`, which keeps field order at every depth.
///
/// A non-finite `Float` fails to encode, since JSON cannot spell it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, EnumDiscriminants)]
#[serde(untagged)]
#[strum_discriminants(name(ValueKind), derive(Hash, AsRefStr))]
pub enum Value {
    Null,
    String(String),
    Integer(i64),
    Boolean(bool),
    Float(#[serde(serialize_with = "serialize_finite")] f64),
    Sequence(Sequence),
    Mapping(MapSlice),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        self.into()
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Projects either numeric variant onto a [`Number`].
    pub fn as_number(&self) -> Option<Number> {
        Number::try_from(self).ok()
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<Sequence> for Value {
    fn from(value: Sequence) -> Self {
        Self::Sequence(value)
    }
}

impl From<MapSlice> for Value {
    fn from(value: MapSlice) -> Self {
        Self::Mapping(value)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Value {
        match value {
            Number::Integer(i) => Self::Integer(i),
            Number::Float(f) => Self::Float(f),
        }
    }
}

/// Fails instead of rounding when the decimal has no exact JSON form.
impl TryFrom<Decimal> for Value {
    type Error = NumberError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Number::try_from(value).map(Self::from)
    }
}

impl<'k> TryFrom<&'k Value> for &'k str {
    type Error = Error;

    fn try_from(value: &'k Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(Error::CannotConvert(value.into())),
        }
    }
}

impl<'k> TryFrom<&'k Value> for i64 {
    type Error = Error;

    fn try_from(value: &'k Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(i) => Ok(*i),
            _ => Err(Error::CannotConvert(value.into())),
        }
    }
}

impl<'k> TryFrom<&'k Value> for Number {
    type Error = Error;

    fn try_from(value: &'k Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(i) => Ok(Self::Integer(*i)),
            Value::Float(f) => Ok(Self::Float(*f)),
            _ => Err(Error::CannotConvert(value.into())),
        }
    }
}

impl TryFrom<Value> for MapSlice {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Mapping(m) => Ok(m),
            _ => Err(Error::CannotConvert(value.into())),
        }
    }
}
