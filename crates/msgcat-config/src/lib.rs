//! # msgcat config
//!
//! Host configuration for msgcat: the `language` key an administrator sets in
//! `config.yml`, environment overrides, validation and a lock-free cache that
//! can be reloaded while readers are active.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use cache::*;
pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
