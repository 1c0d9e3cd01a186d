//! A message addressed to a recipient, resolved when it is used.

use crate::facade::MessageFacade;
use crate::keys::MessageKey;
use std::collections::BTreeMap;
use std::fmt;

/// A message bound to a recipient and id.
///
/// Creating one performs no I/O. Text is looked up in the catalog that is
/// live when [`Message::text`] is called, and `%KEY%` placeholders are
/// replaced with the macro values set on the message. Delivery is left to the
/// caller.
pub struct Message<'a, R, M: MessageKey> {
    recipient: R,
    id: M,
    macros: BTreeMap<&'static str, String>,
    facade: &'a MessageFacade<M>,
}

impl<'a, R, M: MessageKey> Message<'a, R, M> {
    pub(crate) fn new(recipient: R, id: M, facade: &'a MessageFacade<M>) -> Self {
        Self {
            recipient,
            id,
            macros: BTreeMap::new(),
            facade,
        }
    }

    /// The recipient this message is for.
    pub fn recipient(&self) -> &R {
        &self.recipient
    }

    /// The message id.
    pub fn id(&self) -> M {
        self.id
    }

    /// Sets the value substituted for the `%KEY%` placeholder of `macro_key`.
    #[must_use]
    pub fn set_macro<X: MessageKey>(mut self, macro_key: X, value: impl fmt::Display) -> Self {
        self.macros.insert(macro_key.key(), value.to_string());
        self
    }

    /// The value set for `macro_key`, if any.
    pub fn macro_value<X: MessageKey>(&self, macro_key: X) -> Option<&str> {
        self.macros.get(macro_key.key()).map(String::as_str)
    }

    /// Whether the message is enabled in the live catalog.
    pub fn is_enabled(&self) -> bool {
        self.facade.is_enabled(self.id)
    }

    /// Repeat delay in seconds from the live catalog.
    pub fn repeat_delay(&self) -> u64 {
        self.facade.repeat_delay(self.id)
    }

    /// Message text from the live catalog with placeholders replaced.
    ///
    /// Placeholders without a value are left as written.
    pub fn text(&self) -> String {
        substitute(&self.facade.message(self.id), &self.macros)
    }
}

/// Replaces each `%KEY%` in `template` with its value in one left-to-right
/// pass. Inserted values are not scanned again.
fn substitute(template: &str, macros: &BTreeMap<&'static str, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('%') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find('%') else {
            out.push_str(&rest[start..]);
            return out;
        };

        if let Some(value) = macros.get(&after[..end]) {
            out.push_str(value);
            rest = &after[end + 1..];
        } else {
            // The closing `%` may open the next placeholder.
            out.push('%');
            rest = after;
        }
    }

    out.push_str(rest);
    out
}

impl<R: fmt::Debug, M: MessageKey> fmt::Debug for Message<'_, R, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message")
            .field("recipient", &self.recipient)
            .field("id", &self.id)
            .field("macros", &self.macros)
            .finish_non_exhaustive()
    }
}
