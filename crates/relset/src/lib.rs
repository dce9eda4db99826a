mod entity;
pub use entity::Entity;

pub mod relation;
pub use relation::{Operands, Relation};

pub use relset_core::{driver::Capability, path, stmt, Error, Result};
pub use relset_sql::Serializer;
