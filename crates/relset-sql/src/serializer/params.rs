use super::{Flavor, Formatter, ToSql};

use relset_core::stmt;

/// Collects bind values as the serializer reaches their placeholders.
pub trait Params {
    /// Stores `value` and returns the placeholder that refers to it.
    fn push(&mut self, value: &stmt::Value) -> Placeholder;
}

/// One-based position of a parameter in the statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder(pub usize);

impl Params for Vec<stmt::Value> {
    fn push(&mut self, value: &stmt::Value) -> Placeholder {
        Vec::push(self, value.clone());
        Placeholder(self.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        use std::fmt::Write;

        // Writing to a `String` cannot fail
        let _ = match f.serializer.flavor {
            Flavor::Sqlite => write!(f.dst, "?{}", self.0),
            Flavor::Postgresql => write!(f.dst, "${}", self.0),
            Flavor::Mysql => f.dst.write_char('?'),
        };
    }
}
