pub mod error;
pub mod types;

#[cfg(feature = "savings")]
pub mod savings;

#[cfg(feature = "loans")]
pub mod loans;

pub use error::FinLogicError;
pub use types::*;

/// Standard result type for all finlogic operations
pub type FinLogicResult<T> = Result<T, FinLogicError>;
