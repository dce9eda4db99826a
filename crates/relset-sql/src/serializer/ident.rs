use super::{Formatter, Params, ToSql};

/// A quoted identifier.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let quote = if f.serializer.is_mysql() { '`' } else { '"' };

        f.dst.push(quote);
        for ch in self.0.as_ref().chars() {
            // Embedded quotes are escaped by doubling them
            if ch == quote {
                f.dst.push(quote);
            }
            f.dst.push(ch);
        }
        f.dst.push(quote);
    }
}

impl ToSql for &relset_core::stmt::Ident {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        Ident(self.as_str()).to_sql(f);
    }
}
