#[macro_use]
mod macros;

pub mod driver;
pub use driver::Capability;

mod error;
pub use error::{Error, IncompatibleCombination, IntoError};

pub mod stmt;

/// A Result type alias that uses relset's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
