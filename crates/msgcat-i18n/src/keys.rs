//! Opaque message and macro identifiers supplied by the host application.

use std::fmt::Debug;
use std::hash::Hash;

/// A member of a closed, caller-defined set of identifiers.
///
/// Message ids address `MESSAGES.<key>` in language files; macros name
/// `%<key>%` placeholders in message text. Keys must not contain `.`.
pub trait MessageKey: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// The key as written in language files.
    fn key(&self) -> &'static str;
}

/// Declares an enum implementing [`MessageKey`](crate::MessageKey).
///
/// The generated enum also gets an `ALL` slice in declaration order and a
/// `from_key` lookup.
///
/// ```rust
/// use msgcat_i18n::{message_keys, MessageKey};
///
/// message_keys! {
///     /// Messages sent by the plugin.
///     pub enum Msg {
///         HomeSet => "COMMAND_SUCCESS_SETHOME",
///         Cooldown => "TELEPORT_COOLDOWN",
///     }
/// }
///
/// assert_eq!(Msg::Cooldown.key(), "TELEPORT_COOLDOWN");
/// assert_eq!(Msg::from_key("COMMAND_SUCCESS_SETHOME"), Some(Msg::HomeSet));
/// assert_eq!(Msg::ALL.len(), 2);
/// ```
#[macro_export]
macro_rules! message_keys {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $key:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[allow(missing_docs)]
                $variant
            ),+
        }

        impl $name {
            /// Every identifier, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Looks up the identifier written as `key` in language files.
            #[must_use]
            pub fn from_key(key: &str) -> Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|id| $crate::MessageKey::key(id) == key)
            }
        }

        impl $crate::MessageKey for $name {
            fn key(&self) -> &'static str {
                match self {
                    $(Self::$variant => $key),+
                }
            }
        }
    };
}
