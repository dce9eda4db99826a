use super::Serializer;

use relset_core::driver::Capability;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flavor {
    Postgresql,
    Sqlite,
    Mysql,
}

impl Serializer {
    pub fn sqlite() -> Serializer {
        Serializer {
            flavor: Flavor::Sqlite,
        }
    }

    pub fn postgresql() -> Serializer {
        Serializer {
            flavor: Flavor::Postgresql,
        }
    }

    pub fn mysql() -> Serializer {
        Serializer {
            flavor: Flavor::Mysql,
        }
    }

    /// The capabilities of the database this serializer targets.
    pub fn capability(&self) -> &'static Capability {
        match self.flavor {
            Flavor::Postgresql => &Capability::POSTGRESQL,
            Flavor::Sqlite => &Capability::SQLITE,
            Flavor::Mysql => &Capability::MYSQL,
        }
    }

    pub(super) fn is_mysql(&self) -> bool {
        matches!(self.flavor, Flavor::Mysql)
    }
}
