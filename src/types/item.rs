use serde::Deserialize;
use serde::Serialize;

use crate::types::Value;

/// One ordered entry of a map slice.
///
/// On its own an item serializes as a plain struct, `{"key":...,"value":...}`.
/// Inside a [`MapSlice`](crate::MapSlice) it becomes a single object field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item<V = Value> {
    pub key: String,
    pub value: V,
}

impl<V> Item<V> {
    pub fn new<K: Into<String>>(key: K, value: V) -> Self {
        Self { key: key.into(), value }
    }

    pub fn into_pair(self) -> (String, V) {
        (self.key, self.value)
    }
}

impl<K: Into<String>, V> From<(K, V)> for Item<V> {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}
