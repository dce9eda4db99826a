use std::fmt;

/// The set operation used to combine queries.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub enum SetOp {
    /// Rows from either query, duplicates removed
    Union,

    /// Rows from either query, duplicates kept
    UnionAll,

    /// Rows present in both queries
    Intersect,
}

impl SetOp {
    /// The name of the operation as it appears in the query API.
    pub fn name(self) -> &'static str {
        match self {
            SetOp::Union => "union",
            SetOp::UnionAll => "union_all",
            SetOp::Intersect => "intersect",
        }
    }
}

impl fmt::Display for SetOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetOp::Union => "UNION".fmt(f),
            SetOp::UnionAll => "UNION ALL".fmt(f),
            SetOp::Intersect => "INTERSECT".fmt(f),
        }
    }
}

impl fmt::Debug for SetOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
