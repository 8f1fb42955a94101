#![cfg(test)]

use std::collections::BTreeMap;

use crate::types::{Item, MapSlice, Value};

pub(crate) const GOLDEN_JSON: &str = r#"{"abc":123,"def":"456"}"#;

/// A map with sequence keys, which has no JSON object form.
pub(crate) type Unencodable = BTreeMap<Vec<i64>, i64>;

pub(crate) fn golden() -> MapSlice {
    MapSlice::from(vec![
        Item::new("abc", Value::Integer(123)),
        Item::new("def", Value::from("456")),
    ])
}
