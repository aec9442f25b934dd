//! Domain models and operation parameter types.
//!
//! Domain models are converted from entity models at the repository boundary, where
//! Discord snowflakes stored as text are parsed into `u64` and enum columns into their
//! closed variant sets. Services and the bot layer only ever see these types.

pub mod guild;
pub mod queue;
pub mod role;
pub mod token;
