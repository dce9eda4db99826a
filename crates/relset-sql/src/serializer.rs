#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

mod flavor;
use flavor::Flavor;

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod expr;
mod statement;

use relset_core::{stmt, Error, Result};

/// Serialize a query to a SQL string
#[derive(Debug)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects and
    /// supported features.
    flavor: Flavor,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,

    /// Bind values of the query, consumed in placeholder order
    binds: &'a [stmt::Value],

    /// Number of bind values consumed so far
    next_bind: usize,

    /// First problem found while serializing. Serialization keeps going so
    /// the fragment writers stay infallible; the error is reported at the end.
    error: Option<Error>,
}

impl Serializer {
    /// Serializes `query`, pushing `binds` into `params` as their placeholders
    /// are written.
    ///
    /// `binds` must hold exactly one value per [`stmt::Expr::Param`] in the
    /// query, in the order the placeholders appear.
    pub fn serialize(
        &self,
        query: &stmt::Query,
        binds: &[stmt::Value],
        params: &mut impl Params,
    ) -> Result<String> {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
            binds,
            next_bind: 0,
            error: None,
        };

        query.to_sql(&mut fmt);

        if let Some(err) = fmt.error {
            return Err(err);
        }

        if fmt.next_bind != binds.len() {
            return Err(Error::invalid_statement(format!(
                "query has {} placeholder(s) but {} bind value(s)",
                fmt.next_bind,
                binds.len()
            )));
        }

        ret.push(';');

        tracing::trace!(sql = %ret, params = binds.len(), "serialized query");

        Ok(ret)
    }
}

impl<T> Formatter<'_, T> {
    fn fail(&mut self, err: Error) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }
}
