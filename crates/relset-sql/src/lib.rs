pub mod serializer;
pub use serializer::{Params, Placeholder, Serializer};

pub use relset_core::stmt;
