//! Dynamic value types for the MessagePack codec.

mod value;

pub use value::{Value, ValueMap};
