//! The generic numeric form that JSON numbers decode into.

use std::cmp::Ordering;
use std::convert::TryFrom;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::ser::Error as SerError;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Error, Copy, Clone, PartialEq)]
pub enum Error {
    #[error("decimal {0} has no exact JSON number form")]
    InexactDecimal(Decimal),
    #[error("number {0} has no exact decimal form")]
    InexactFloat(f64),
}

/// Either an integral number that fits in an `i64`, or a double precision
/// float holding any other JSON number.
///
/// Floats go through `serde_json`'s round-trip exact parser, so a float
/// encodes to text that decodes back to the very same float.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Integer(i64),
    Float(#[serde(serialize_with = "serialize_finite")] f64),
}

/// JSON has no spelling for NaN or the infinities; refuse them instead of
/// letting them turn into `null`.
pub(crate) fn serialize_finite<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        Err(<S::Error as SerError>::custom(format_args!("{} has no JSON number form", value)))
    }
}

// Both `i64` bounds are exact powers of two, so they survive as `f64`.
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;

fn cmp_integer_float(i: i64, f: f64) -> Ordering {
    if f.is_nan() {
        return if f.is_sign_negative() { Ordering::Greater } else { Ordering::Less };
    }
    if f >= I64_UPPER {
        return Ordering::Less;
    }
    if f < I64_LOWER {
        return Ordering::Greater;
    }

    let whole = f.trunc();
    match i.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0f64.partial_cmp(&(f - whole)).unwrap_or(Ordering::Equal),
        ordering => ordering,
    }
}

impl Number {
    /// Does a comparison based on the numerical values represented, without
    /// rounding integers to floats.
    /// Whole value floats will compare as equal to their integer counterparts.
    pub fn val_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Integer(l), Self::Integer(r)) => l.cmp(r),
            (Self::Integer(l), Self::Float(r)) => cmp_integer_float(*l, *r),
            (Self::Float(l), Self::Integer(r)) => cmp_integer_float(*r, *l).reverse(),
            (Self::Float(l), Self::Float(r)) => l.partial_cmp(r).unwrap_or_else(|| l.total_cmp(r)),
        }
    }

    pub fn val_eq(&self, other: &Self) -> bool {
        self.val_cmp(other) == Ordering::Equal
    }

    /// Converts to a decimal. A float converts to the shortest decimal that
    /// reads back as the same float, and fails if that decimal does not fit,
    /// rather than rounding it.
    pub fn to_decimal(&self) -> Result<Decimal, Error> {
        match self {
            Self::Integer(i) => Ok(Decimal::from(*i)),
            Self::Float(f) if f.is_finite() => {
                Decimal::from_str_exact(&f.to_string()).map_err(|_| Error::InexactFloat(*f))
            },
            Self::Float(f) => Err(Error::InexactFloat(*f)),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl TryFrom<Decimal> for Number {
    type Error = Error;

    /// Succeeds only when the decimal survives being written out as JSON and
    /// read back.
    fn try_from(d: Decimal) -> Result<Self, Self::Error> {
        if d.fract().is_zero() {
            if let Some(i) = d.to_i64() {
                return Ok(Self::Integer(i));
            }
        }

        let f = d.to_f64().ok_or(Error::InexactDecimal(d))?;
        match Decimal::from_str_exact(&f.to_string()) {
            Ok(back) if back == d => Ok(Self::Float(f)),
            _ => Err(Error::InexactDecimal(d)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::seq::SliceRandom;
    use rust_decimal_macros::dec;

    #[test]
    fn val_cmp() {
        for l in -3i64..=3 {
            let li = Number::Integer(l);
            let lf = Number::Float(l as f64);

            for r in -3i64..=3 {
                let ri = Number::Integer(r);
                let rf = Number::Float(r as f64);

                let expected = l.cmp(&r);

                assert_eq!(expected, li.val_cmp(&ri));
                assert_eq!(expected, li.val_cmp(&rf));
                assert_eq!(expected, lf.val_cmp(&ri));
                assert_eq!(expected, lf.val_cmp(&rf));
            }
        }

        let expected = vec![
            Number::Float(-1.5),
            Number::Integer(-1),
            Number::Float(-0.5),
            Number::Integer(0),
            Number::Float(0.5),
            Number::Integer(1),
            Number::Float(1.5),
        ];

        let mut produced = expected.clone();
        produced.shuffle(&mut rand::thread_rng());
        produced.sort_by(Number::val_cmp);

        assert_eq!(expected, produced);
    }

    #[test]
    fn val_cmp_extremes() {
        let inputs_and_expected = vec![
            ((i64::MAX, 9_223_372_036_854_775_808.0), Ordering::Less),
            ((i64::MIN, -9_223_372_036_854_775_808.0), Ordering::Equal),
            ((i64::MIN, -1e300), Ordering::Greater),
            ((i64::MAX, f64::INFINITY), Ordering::Less),
            ((0, f64::NEG_INFINITY), Ordering::Greater),
            ((9_007_199_254_740_993, 9_007_199_254_740_992.0), Ordering::Greater),
        ];

        for ((i, f), expected) in inputs_and_expected {
            assert_eq!(expected, Number::Integer(i).val_cmp(&Number::Float(f)));
            assert_eq!(expected.reverse(), Number::Float(f).val_cmp(&Number::Integer(i)));
        }
    }

    #[test]
    fn val_eq() {
        assert!(Number::Integer(3).val_eq(&Number::Float(3.0)));
        assert!(Number::Float(3.0).val_eq(&Number::Integer(3)));
        assert!(!Number::Integer(3).val_eq(&Number::Float(3.5)));
        assert!(Number::Float(0.0).val_eq(&Number::Float(-0.0)));

        // Structural equality still tells the variants apart.
        assert_ne!(Number::Integer(3), Number::Float(3.0));
    }

    #[test]
    fn serde() {
        let inputs_and_expected = vec![
            ("27", Number::Integer(27)),
            ("-27", Number::Integer(-27)),
            ("3.1415", Number::Float(3.1415)),
            ("-3.1415", Number::Float(-3.1415)),
            ("1e-30", Number::Float(1e-30)),
            ("1e300", Number::Float(1e300)),
        ];

        for (input, expected) in inputs_and_expected {
            let produced = serde_json::from_str::<Number>(input).unwrap();
            assert_eq!(expected, produced);
            assert_eq!(input, serde_json::to_string(&produced).unwrap());
        }

        assert!(serde_json::from_str::<Number>("[27]").is_err());

        for input in vec![f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(serde_json::to_string(&Number::Float(input)).is_err());
        }
    }

    #[test]
    fn to_decimal() {
        assert_eq!(Ok(dec!(-27)), Number::Integer(-27).to_decimal());
        assert_eq!(Ok(dec!(3.1415)), Number::Float(3.1415).to_decimal());
        assert_eq!(Ok(dec!(0.1)), Number::Float(0.1).to_decimal());

        // Too small or too large for a decimal is an error, never zero.
        for input in vec![1e-30, 1e300, f64::NAN] {
            let produced = Number::Float(input).to_decimal();
            assert!(matches!(produced, Err(Error::InexactFloat(_))), "{:?}", produced);
        }
    }

    #[test]
    fn try_from_decimal() {
        let inputs_and_expected = vec![
            (dec!(27), Ok(Number::Integer(27))),
            (dec!(27.000), Ok(Number::Integer(27))),
            (dec!(-3.1415), Ok(Number::Float(-3.1415))),
            (dec!(0.5), Ok(Number::Float(0.5))),
            (
                dec!(12345678901234567.5),
                Err(Error::InexactDecimal(dec!(12345678901234567.5))),
            ),
            (
                dec!(0.1234567890123456789),
                Err(Error::InexactDecimal(dec!(0.1234567890123456789))),
            ),
        ];

        for (input, expected) in inputs_and_expected {
            let produced = Number::try_from(input);
            assert_eq!(expected, produced);
        }

        let produced = Number::try_from(dec!(12345678901234567.5)).unwrap_err().to_string();
        assert_eq!("decimal 12345678901234567.5 has no exact JSON number form", produced);
    }
}
