use std::any::type_name;
use std::fmt::{Formatter, Result as FmtResult};
use std::io::{Read, Write};
use std::iter::FusedIterator;
use std::iter::{Extend, FromIterator};
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};
use std::slice::Iter as InnerIter;
use std::str::FromStr;
use std::vec::IntoIter as InnerIntoIter;

use indexmap::IndexMap;
use serde::de::{DeserializeOwned, MapAccess, Visitor};
use serde::ser::{Error as SerError, SerializeMap};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Error as JsonError;

use crate::config::Style;
use crate::error::{Error, Result};
use crate::types::{Item, Value};

/// An ordered sequence of key-value items that encodes as a JSON object.
///
/// Field order in the encoded object is exactly the order of the items, and
/// decoding keeps the fields in the order they appear in the source text.
///
/// Keys are not required to be unique. Encoding emits every item as its own
/// field, and decoding appends every field it encounters, so
/// `{"a":1,"a":2}` decodes to two items rather than keeping only the last.
/// Use [`MapSlice::into_index_map`] for last-write-wins semantics.
///
/// The container dereferences to its inner `Vec`, so slice and vector
/// methods (`len`, `retain`, `insert`, sorting, indexing) work on the items
/// directly.
///
/// There is no internal locking. Separate instances share no state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MapSlice<V = Value>(Vec<Item<V>>);

impl<V> MapSlice<V> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn push<K: Into<String>>(&mut self, key: K, value: V) {
        self.0.push(Item::new(key, value))
    }

    pub fn push_item(&mut self, item: Item<V>) {
        self.0.push(item)
    }

    pub fn into_inner(self) -> Vec<Item<V>> {
        self.0
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter(self.0.iter())
    }

    /// Returns the keys of all items, in item order.
    pub fn keys(&self) -> Keys<'_, V> {
        Keys(self.0.iter())
    }

    /// Returns the values of all items, in item order.
    pub fn values(&self) -> Values<'_, V> {
        Values(self.0.iter())
    }

    pub fn key_vec(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }

    pub fn value_vec(&self) -> Vec<&V> {
        self.values().collect()
    }

    /// Collapses the items into an `IndexMap`. For repeated keys the last
    /// value wins, and the key keeps the position of its first occurrence.
    pub fn into_index_map(self) -> IndexMap<String, V> {
        self.0.into_iter().map(Item::into_pair).collect()
    }
}

impl<V: Serialize> MapSlice<V> {
    /// Encodes this map slice as compact JSON text.
    pub fn encode(&self) -> Result<String> {
        self.encode_with(Style::Compact)
    }

    pub fn encode_with(&self, style: Style) -> Result<String> {
        style.to_string(self).map_err(Self::encode_error)
    }

    pub fn encode_vec(&self) -> Result<Vec<u8>> {
        Style::Compact.to_vec(self).map_err(Self::encode_error)
    }

    pub fn encode_to_writer<W: Write>(&self, writer: W, style: Style) -> Result<()> {
        style.write(writer, self).map_err(Self::encode_error)
    }

    fn encode_error(source: JsonError) -> Error {
        Error::Encode { container: type_name::<Self>(), source }
    }
}

impl<V: DeserializeOwned> MapSlice<V> {
    pub fn from_json_str(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(Error::Decode)
    }

    pub fn from_json_slice(input: &[u8]) -> Result<Self> {
        serde_json::from_slice(input).map_err(Error::Decode)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).map_err(Error::Decode)
    }

    /// Replaces the items of this map slice with the fields of a JSON object.
    ///
    /// Every field becomes one item, duplicates included. The input is
    /// decoded fully before anything is replaced, so on error this map slice
    /// is left as it was.
    pub fn decode(&mut self, input: &str) -> Result<()> {
        *self = Self::from_json_str(input)?;
        Ok(())
    }

    pub fn decode_slice(&mut self, input: &[u8]) -> Result<()> {
        *self = Self::from_json_slice(input)?;
        Ok(())
    }

    pub fn decode_reader<R: Read>(&mut self, reader: R) -> Result<()> {
        *self = Self::from_json_reader(reader)?;
        Ok(())
    }
}

impl<V> Default for MapSlice<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Serialize> Serialize for MapSlice<V> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;

        for item in &self.0 {
            map.serialize_entry(&item.key, &item.value).map_err(|err| {
                <S::Error as SerError>::custom(format_args!(
                    "cannot encode value of type {} at key {:?} in {}: {}",
                    type_name::<V>(), item.key, type_name::<Self>(), err,
                ))
            })?;
        }

        map.end()
    }
}

struct MapSliceVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for MapSliceVisitor<V> {
    type Value = MapSlice<V>;

    fn expecting(&self, formatter: &mut Formatter) -> FmtResult {
        formatter.write_str("a JSON object")
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        // Size hints come from the input, so don't trust them too far.
        let mut items = Vec::with_capacity(access.size_hint().unwrap_or(0).min(4096));

        while let Some((key, value)) = access.next_entry()? {
            items.push(Item { key, value });
        }

        Ok(MapSlice(items))
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for MapSlice<V> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(MapSliceVisitor(PhantomData))
    }
}

impl<V: DeserializeOwned> FromStr for MapSlice<V> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json_str(s)
    }
}

impl<V> From<Vec<Item<V>>> for MapSlice<V> {
    fn from(items: Vec<Item<V>>) -> Self {
        Self(items)
    }
}

impl<V> From<MapSlice<V>> for Vec<Item<V>> {
    fn from(map_slice: MapSlice<V>) -> Self {
        map_slice.0
    }
}

impl<V> From<IndexMap<String, V>> for MapSlice<V> {
    fn from(map: IndexMap<String, V>) -> Self {
        map.into_iter().collect()
    }
}

impl<V> Deref for MapSlice<V> {
    type Target = Vec<Item<V>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<V> DerefMut for MapSlice<V> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<V> AsRef<[Item<V>]> for MapSlice<V> {
    fn as_ref(&self) -> &[Item<V>] {
        &self.0
    }
}

impl<V> Extend<Item<V>> for MapSlice<V> {
    fn extend<I: IntoIterator<Item = Item<V>>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl<V> Extend<(String, V)> for MapSlice<V> {
    fn extend<I: IntoIterator<Item = (String, V)>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Item::from))
    }
}

impl<V> FromIterator<Item<V>> for MapSlice<V> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Item<V>>,
    {
        Self(iter.into_iter().collect())
    }
}

impl<V> FromIterator<(String, V)> for MapSlice<V> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (String, V)>,
    {
        Self(iter.into_iter().map(Item::from).collect())
    }
}

impl<V> IntoIterator for MapSlice<V> {
    type Item = Item<V>;
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.0.into_iter())
    }
}

impl<'a, V> IntoIterator for &'a MapSlice<V> {
    type Item = &'a Item<V>;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'a, V>(InnerIter<'a, Item<V>>);

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a Item<V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, V> DoubleEndedIterator for Iter<'a, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<'a, V> ExactSizeIterator for Iter<'a, V> {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl<'a, V> FusedIterator for Iter<'a, V> {}

pub struct Keys<'a, V>(InnerIter<'a, Item<V>>);

impl<'a, V> Iterator for Keys<'a, V> {
    type Item = &'a String;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|item| &item.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, V> DoubleEndedIterator for Keys<'a, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|item| &item.key)
    }
}

impl<'a, V> ExactSizeIterator for Keys<'a, V> {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl<'a, V> FusedIterator for Keys<'a, V> {}

pub struct Values<'a, V>(InnerIter<'a, Item<V>>);

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|item| &item.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, V> DoubleEndedIterator for Values<'a, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|item| &item.value)
    }
}

impl<'a, V> ExactSizeIterator for Values<'a, V> {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl<'a, V> FusedIterator for Values<'a, V> {}

pub struct IntoIter<V>(InnerIntoIter<Item<V>>);

impl<V> Iterator for IntoIter<V> {
    type Item = Item<V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<V> DoubleEndedIterator for IntoIter<V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl<V> FusedIterator for IntoIter<V> {}

/// Builds a [`MapSlice`] of [`Value`]s, keeping the entries in the order
/// written.
///
/// ```
/// let map_slice = mapslice::mapslice!{
///     "abc" => 123,
///     "def" => "456",
/// };
///
/// assert_eq!(r#"{"abc":123,"def":"456"}"#, map_slice.encode().unwrap());
/// ```
#[macro_export]
macro_rules! mapslice {
    ($($key:expr => $value:expr),* $(,)?) => {
        $crate::MapSlice::<$crate::Value>::from(vec![
            $($crate::Item::new($key, $crate::Value::from($value)),)*
        ])
    };
}
