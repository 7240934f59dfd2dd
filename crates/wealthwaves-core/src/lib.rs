pub mod error;
pub mod policy;
pub mod time_value;
pub mod types;

#[cfg(feature = "loans")]
pub mod loans;

#[cfg(feature = "goals")]
pub mod goals;

#[cfg(feature = "budget")]
pub mod budget;

#[cfg(feature = "business")]
pub mod business;

#[cfg(feature = "savings")]
pub mod savings;

#[cfg(feature = "validation")]
pub mod validation;

pub use error::WealthError;
pub use policy::EnginePolicy;
pub use types::*;

/// Standard result type for all wealthwaves operations
pub type WealthResult<T> = Result<T, WealthError>;
