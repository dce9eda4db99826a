use std::fmt;

/// A category of instruction for loading associated records alongside a
/// query's rows.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Directive {
    /// Load associations, letting the query decide between a separate query
    /// and a join.
    Includes,

    /// Load associations with a separate query per association.
    Preload,

    /// Load associations by joining them into the main query.
    EagerLoad,
}

impl Directive {
    /// All categories, in the order they are checked.
    pub const ALL: [Directive; 3] = [Directive::Includes, Directive::Preload, Directive::EagerLoad];
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::Includes => "includes".fmt(f),
            Directive::Preload => "preload".fmt(f),
            Directive::EagerLoad => "eager load".fmt(f),
        }
    }
}
