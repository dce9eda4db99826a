/// Backend features that change how statements are built.
///
/// A capability is chosen by whoever knows which database the statement is
/// headed for and is passed in explicitly; nothing in relset inspects a
/// connection to guess it.
#[derive(Debug)]
pub struct Capability {
    /// SQL: operands of a set operation (`UNION`, `INTERSECT`, ...) may be
    /// wrapped in parentheses. This is what allows `ORDER BY` and `LIMIT`
    /// inside an individual operand.
    pub set_op_grouping: bool,
}

impl Capability {
    /// SQLite capabilities.
    ///
    /// SQLite rejects parentheses around the members of a compound select.
    /// Operands must be plain selects, so any ordering has to be removed
    /// before combining.
    pub const SQLITE: Self = Self {
        set_op_grouping: false,
    };

    /// PostgreSQL capabilities
    pub const POSTGRESQL: Self = Self {
        set_op_grouping: true,
    };

    /// MySQL capabilities
    pub const MYSQL: Self = Self {
        set_op_grouping: true,
    };
}
