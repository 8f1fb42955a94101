mod style;

pub use self::style::Style;
