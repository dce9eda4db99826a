use super::{Ident, TableDerived};

#[derive(Debug, Clone, PartialEq)]
pub enum TableRef {
    /// A table defined in the schema, by name
    Table(Ident),

    /// A subquery used as a table
    Derived(TableDerived),
}

impl TableRef {
    pub fn as_derived(&self) -> Option<&TableDerived> {
        match self {
            TableRef::Derived(derived) => Some(derived),
            _ => None,
        }
    }

    #[track_caller]
    pub fn as_derived_unwrap(&self) -> &TableDerived {
        self.as_derived()
            .unwrap_or_else(|| panic!("expected `Derived`; actual={self:#?}"))
    }

    /// The name the rest of the query uses to refer to this source.
    pub fn name(&self) -> &Ident {
        match self {
            TableRef::Table(name) => name,
            TableRef::Derived(derived) => &derived.alias,
        }
    }
}

impl From<Ident> for TableRef {
    fn from(value: Ident) -> Self {
        TableRef::Table(value)
    }
}

impl From<&Ident> for TableRef {
    fn from(value: &Ident) -> Self {
        TableRef::Table(value.clone())
    }
}

impl From<&str> for TableRef {
    fn from(value: &str) -> Self {
        TableRef::Table(value.into())
    }
}

impl From<TableDerived> for TableRef {
    fn from(value: TableDerived) -> Self {
        TableRef::Derived(value)
    }
}
