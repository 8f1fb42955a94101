//! An insertion-ordered sequence of key-value items that round-trips through
//! JSON as an object, with the fields in the order the items were added.
//!
//! ```
//! use mapslice::{MapSlice, Value};
//!
//! let mut map_slice = MapSlice::<Value>::new();
//! map_slice.decode(r#"{"abc":123,"def":"456"}"#).unwrap();
//!
//! assert_eq!(vec!["abc", "def"], map_slice.key_vec());
//! assert_eq!(vec![&Value::Integer(123), &Value::from("456")], map_slice.value_vec());
//! assert_eq!(r#"{"abc":123,"def":"456"}"#, map_slice.encode().unwrap());
//! ```

pub mod config;
pub mod error;
pub mod types;

mod test_util;

pub use crate::config::Style;
pub use crate::error::{Error, Result};
pub use crate::types::{Item, MapSlice, Number, Value, ValueKind};
