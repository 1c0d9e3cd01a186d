//! # msgcat common
//!
//! Shared types, errors, logging bootstrap and test utilities for the
//! msgcat workspace.
//!
//! This crate provides the foundational types used across the other crates:
//! the [`LocaleTag`] naming a language file and the [`TimeUnit`] granularity
//! used when formatting durations.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{CommonError, Result};
pub use types::*;
pub use utils::*;
