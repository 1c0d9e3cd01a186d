//! Immutable snapshot of one loaded language.

use crate::duration::{DurationFormatter, TimeLabels};
use crate::keys::MessageKey;
use crate::layered::LayeredSource;
use msgcat_common::LocaleTag;

/// Key paths used in language files.
pub mod paths {
    /// Section holding per-message settings.
    pub const MESSAGES: &str = "MESSAGES";
    /// Per-message enabled flag.
    pub const ENABLED: &str = "enabled";
    /// Per-message repeat delay in seconds.
    pub const REPEAT_DELAY: &str = "repeat-delay";
    /// Per-message text.
    pub const STRING: &str = "string";

    /// Singular item name.
    pub const ITEM_NAME: &str = "ITEM_INFO.ITEM_NAME";
    /// Plural item name.
    pub const ITEM_NAME_PLURAL: &str = "ITEM_INFO.ITEM_NAME_PLURAL";
    /// Item name shown in inventories.
    pub const INVENTORY_ITEM_NAME: &str = "ITEM_INFO.INVENTORY_ITEM_NAME";
    /// Item lore lines.
    pub const ITEM_LORE: &str = "ITEM_INFO.ITEM_LORE";
    /// Display name of the world spawn.
    pub const SPAWN_DISPLAY_NAME: &str = "SPAWN_DISPLAY_NAME";
    /// Display name of a home location.
    pub const HOME_DISPLAY_NAME: &str = "HOME_DISPLAY_NAME";

    /// Section holding time unit labels.
    pub const TIME_STRINGS: &str = "TIME_STRINGS";
}

/// The queryable result of one load or reload.
///
/// Every accessor is total: keys absent from both layers yield the documented
/// default rather than an error.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    tag: LocaleTag,
    generation: u64,
    source: LayeredSource,
    formatter: DurationFormatter,
}

impl MessageCatalog {
    /// Builds a catalog over `source`, loaded for `tag`.
    #[must_use]
    pub fn new(tag: LocaleTag, source: LayeredSource, generation: u64) -> Self {
        let formatter = DurationFormatter::new(time_labels(&source));
        Self {
            tag,
            generation,
            source,
            formatter,
        }
    }

    /// Language the catalog was loaded for.
    #[must_use]
    pub const fn tag(&self) -> &LocaleTag {
        &self.tag
    }

    /// Load sequence number; higher is newer.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// The layered source backing the catalog.
    #[must_use]
    pub const fn source(&self) -> &LayeredSource {
        &self.source
    }

    fn message_path<M: MessageKey>(id: M, field: &str) -> String {
        format!("{}.{}.{field}", paths::MESSAGES, id.key())
    }

    /// Whether the message is enabled. Defaults to `true`.
    #[must_use]
    pub fn is_enabled<M: MessageKey>(&self, id: M) -> bool {
        self.source
            .get_bool(&Self::message_path(id, paths::ENABLED))
            .unwrap_or(true)
    }

    /// Seconds before the message may repeat to the same recipient. Defaults to 0.
    #[must_use]
    pub fn repeat_delay<M: MessageKey>(&self, id: M) -> u64 {
        self.source
            .get_u64(&Self::message_path(id, paths::REPEAT_DELAY))
            .unwrap_or(0)
    }

    /// Message text. Defaults to empty.
    #[must_use]
    pub fn message<M: MessageKey>(&self, id: M) -> String {
        self.source
            .get_string(&Self::message_path(id, paths::STRING))
            .unwrap_or_default()
    }

    /// Whether either layer defines text for the message.
    #[must_use]
    pub fn has_message<M: MessageKey>(&self, id: M) -> bool {
        self.source
            .get_string(&Self::message_path(id, paths::STRING))
            .is_some()
    }

    /// Ids among `ids` with no text in either layer.
    #[must_use]
    pub fn missing_messages<M: MessageKey>(&self, ids: &[M]) -> Vec<M> {
        ids.iter().copied().filter(|id| !self.has_message(*id)).collect()
    }

    fn text(&self, path: &str) -> String {
        self.source.get_string(path).unwrap_or_default()
    }

    /// Singular item name.
    #[must_use]
    pub fn item_name(&self) -> String {
        self.text(paths::ITEM_NAME)
    }

    /// Plural item name.
    #[must_use]
    pub fn item_name_plural(&self) -> String {
        self.text(paths::ITEM_NAME_PLURAL)
    }

    /// Item name shown in inventories.
    #[must_use]
    pub fn inventory_item_name(&self) -> String {
        self.text(paths::INVENTORY_ITEM_NAME)
    }

    /// Item lore, one entry per line.
    #[must_use]
    pub fn item_lore(&self) -> Vec<String> {
        self.source
            .get_string_list(paths::ITEM_LORE)
            .unwrap_or_default()
    }

    /// Display name of the world spawn.
    #[must_use]
    pub fn spawn_display_name(&self) -> String {
        self.text(paths::SPAWN_DISPLAY_NAME)
    }

    /// Display name of a home location.
    #[must_use]
    pub fn home_display_name(&self) -> String {
        self.text(paths::HOME_DISPLAY_NAME)
    }

    /// Localized time unit labels.
    #[must_use]
    pub const fn time_labels(&self) -> &TimeLabels {
        self.formatter.labels()
    }

    /// Text shown for durations without a limit.
    #[must_use]
    pub fn unlimited_label(&self) -> &str {
        &self.time_labels().unlimited
    }

    /// Formatter using this catalog's labels.
    #[must_use]
    pub const fn duration_formatter(&self) -> &DurationFormatter {
        &self.formatter
    }
}

/// Reads `TIME_STRINGS`, keeping the built-in English label for each key
/// absent from both layers.
fn time_labels(source: &LayeredSource) -> TimeLabels {
    let defaults = TimeLabels::default();
    let label = |key: &str, fallback: String| {
        source
            .get_string(&format!("{}.{key}", paths::TIME_STRINGS))
            .unwrap_or(fallback)
    };

    TimeLabels {
        day: label("DAY", defaults.day),
        day_plural: label("DAY_PLURAL", defaults.day_plural),
        hour: label("HOUR", defaults.hour),
        hour_plural: label("HOUR_PLURAL", defaults.hour_plural),
        minute: label("MINUTE", defaults.minute),
        minute_plural: label("MINUTE_PLURAL", defaults.minute_plural),
        second: label("SECOND", defaults.second),
        second_plural: label("SECOND_PLURAL", defaults.second_plural),
        less_than: label("LESS_THAN", defaults.less_than),
        unlimited: label("UNLIMITED", defaults.unlimited),
    }
}
