use super::{ExprSet, Filter, Node, Query, Returning, TableRef, Visit, VisitMut};

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// The projection part of a SQL query.
    pub returning: Returning,

    /// The `FROM` part of a SQL query. Either a table or a derived table.
    pub source: TableRef,

    /// Query filter
    pub filter: Filter,
}

impl Select {
    pub fn new(source: impl Into<TableRef>, filter: impl Into<Filter>) -> Self {
        Self {
            returning: Returning::Star,
            source: source.into(),
            filter: filter.into(),
        }
    }

    pub fn add_filter(&mut self, filter: impl Into<Filter>) {
        self.filter.add_filter(filter);
    }
}

impl ExprSet {
    pub fn as_select(&self) -> Option<&Select> {
        match self {
            Self::Select(expr) => Some(expr),
            _ => None,
        }
    }

    #[track_caller]
    pub fn as_select_unwrap(&self) -> &Select {
        self.as_select()
            .unwrap_or_else(|| panic!("expected `Select`; actual={self:#?}"))
    }

    pub fn as_select_mut(&mut self) -> Option<&mut Select> {
        match self {
            Self::Select(expr) => Some(expr),
            _ => None,
        }
    }

    #[track_caller]
    pub fn as_select_mut_unwrap(&mut self) -> &mut Select {
        match self {
            Self::Select(select) => select,
            _ => panic!("expected `Select`; actual={self:#?}"),
        }
    }

    pub fn is_select(&self) -> bool {
        matches!(self, Self::Select(_))
    }
}

impl From<Select> for ExprSet {
    fn from(value: Select) -> Self {
        ExprSet::Select(Box::new(value))
    }
}

impl From<Select> for Query {
    fn from(value: Select) -> Self {
        Query::new(value)
    }
}

impl Node for Select {
    fn visit<V: Visit>(&self, mut visit: V) {
        visit.visit_stmt_select(self);
    }

    fn visit_mut<V: VisitMut>(&mut self, mut visit: V) {
        visit.visit_stmt_select_mut(self);
    }
}
