//! # msgcat
//!
//! Command line inspector for msgcat language files.
//!
//! Opens a data directory the same way a host application would (reading
//! `config.yml` and `language/<tag>.yml`, layered over the bundled defaults)
//! and prints what the live catalog serves.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod cli;
pub mod error;
pub mod ids;

pub use app::*;
pub use cli::*;
pub use error::*;
pub use ids::*;
