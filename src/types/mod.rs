pub mod item;
pub mod map_slice;
mod number;
mod value;

pub use rust_decimal::Decimal;

pub use self::item::Item;
pub use self::map_slice::MapSlice;
pub use self::number::{Number, Error as NumberError};
pub use self::value::{Value, ValueKind, Sequence, Error as ValueError};
