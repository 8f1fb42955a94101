//! Defines the text layout used when encoding map slices.

use std::io::Write;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Error as JsonError;
use strum::{EnumString, EnumIter, AsRefStr};

/// Represents the different layouts of JSON text that can be produced.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Deserialize, EnumString, EnumIter, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Style {
    /// No insignificant whitespace, e.g. `{"abc":123,"def":"456"}`.
    Compact,
    /// Two-space indentation with one field per line.
    Pretty,
}

impl Default for Style {
    fn default() -> Self {
        Self::Compact
    }
}

impl Style {
    pub fn write<W, T>(&self, writer: W, value: &T) -> Result<(), JsonError>
    where
        W: Write,
        T: ?Sized + Serialize,
    {
        match self {
            Self::Compact => serde_json::to_writer(writer, value),
            Self::Pretty => serde_json::to_writer_pretty(writer, value),
        }
    }

    pub fn to_vec<T>(&self, value: &T) -> Result<Vec<u8>, JsonError>
    where
        T: ?Sized + Serialize,
    {
        match self {
            Self::Compact => serde_json::to_vec(value),
            Self::Pretty => serde_json::to_vec_pretty(value),
        }
    }

    pub fn to_string<T>(&self, value: &T) -> Result<String, JsonError>
    where
        T: ?Sized + Serialize,
    {
        match self {
            Self::Compact => serde_json::to_string(value),
            Self::Pretty => serde_json::to_string_pretty(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::str::FromStr;

    use strum::IntoEnumIterator;

    #[test]
    fn from_str() {
        let inputs_and_expected = vec![
            ("compact", Ok(Style::Compact)),
            ("pretty", Ok(Style::Pretty)),
            ("Pretty", Err(())),
            ("", Err(())),
        ];

        for (input, expected) in inputs_and_expected {
            let produced = Style::from_str(input).map_err(|_| ());
            assert_eq!(expected, produced);
        }
    }

    #[test]
    fn deserialize() {
        let produced: Style = serde_json::from_str(r#""pretty""#).unwrap();
        assert_eq!(Style::Pretty, produced);

        assert!(serde_json::from_str::<Style>(r#""loose""#).is_err());
    }

    #[test]
    fn to_string() {
        let input = vec![1, 2];

        let inputs_and_expected = vec![
            (Style::Compact, "[1,2]"),
            (Style::Pretty, "[\n  1,\n  2\n]"),
        ];

        for (style, expected) in inputs_and_expected {
            assert_eq!(expected, style.to_string(&input).unwrap());
            assert_eq!(expected.as_bytes(), style.to_vec(&input).unwrap().as_slice());

            let mut buffer = Vec::new();
            style.write(&mut buffer, &input).unwrap();
            assert_eq!(expected.as_bytes(), buffer.as_slice());
        }

        let produced = Style::iter()
            .map(|s| AsRef::<str>::as_ref(&s).to_string())
            .collect::<Vec<_>>();
        assert_eq!(vec!["compact", "pretty"], produced);
    }

    #[test]
    fn default() {
        assert_eq!(Style::Compact, Style::default());
    }
}
