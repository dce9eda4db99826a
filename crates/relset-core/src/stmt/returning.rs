use super::Ident;

/// The projection of a select.
#[derive(Debug, Clone, PartialEq)]
pub enum Returning {
    /// `SELECT *`
    Star,

    /// Return the listed columns, in order
    Columns(Vec<Ident>),
}

impl Returning {
    pub fn is_star(&self) -> bool {
        matches!(self, Self::Star)
    }

    pub fn columns<T>(columns: impl IntoIterator<Item = T>) -> Self
    where
        T: Into<Ident>,
    {
        Returning::Columns(columns.into_iter().map(Into::into).collect())
    }
}
