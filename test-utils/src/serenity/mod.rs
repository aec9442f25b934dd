//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity objects by deserializing JSON, simulating what
//! Discord's API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_guild;
//!
//! let guild = create_test_guild(123456789, "Test Guild", 42);
//! ```

pub mod guild;

pub use guild::create_test_guild;
