//! # msgcat i18n
//!
//! Localized message catalogs backed by YAML language files.
//!
//! An administrator picks a language tag in the host configuration. The
//! catalog is built from two layers:
//!
//! - the user-editable `<data_dir>/language/<tag>.yml`, and
//! - a read-only language file embedded in the application, used for every
//!   key the user file does not define.
//!
//! A missing or broken user file degrades to the embedded defaults; only a
//! missing embedded default is fatal. Catalogs are immutable snapshots that
//! [`MessageFacade::reload`] swaps atomically, so readers never observe a
//! half-built catalog.
//!
//! # Example
//!
//! ```rust,no_run
//! use msgcat_common::LocaleTag;
//! use msgcat_i18n::{message_keys, MessageFacade, StaticResources};
//! use std::sync::Arc;
//!
//! message_keys! {
//!     pub enum Msg {
//!         Welcome => "WELCOME",
//!     }
//! }
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let resources = StaticResources::new()
//!     .with("language/en-US.yml", "MESSAGES:\n  WELCOME:\n    string: Hello!\n");
//! let facade: MessageFacade<Msg> = MessageFacade::new(
//!     "plugin-data",
//!     Arc::new(LocaleTag::default_tag()),
//!     Arc::new(resources),
//! )?;
//!
//! assert_eq!(facade.message(Msg::Welcome), "Hello!");
//! println!("{}", facade.time_string(90_000)?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod diagnostics;
pub mod duration;
pub mod embedded;
pub mod error;
pub mod facade;
pub mod keys;
pub mod layered;
pub mod locale;
pub mod message;
pub mod resource;

pub use catalog::MessageCatalog;
pub use diagnostics::{DiagnosticSink, LanguageEvent, RecordingSink, TracingSink};
pub use duration::{DurationFormatter, TimeLabels};
pub use embedded::{EmbeddedResources, RustEmbedResources, StaticResources};
pub use error::{I18nError, I18nResult, LoadReason, ResourceLoadError};
pub use facade::MessageFacade;
pub use keys::MessageKey;
pub use layered::LayeredSource;
pub use locale::{LanguageSource, LocaleResolver};
pub use message::Message;
pub use resource::LanguageLoader;

// Re-export commonly used shared types
pub use msgcat_common::{LocaleTag, TimeUnit};
