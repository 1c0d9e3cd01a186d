//! Public entry point: the live catalog, its accessors and reloading.

use crate::catalog::MessageCatalog;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::embedded::EmbeddedResources;
use crate::error::I18nResult;
use crate::keys::MessageKey;
use crate::locale::LanguageSource;
use crate::message::Message;
use crate::resource::LanguageLoader;
use arc_swap::ArcSwap;
use msgcat_common::{LocaleTag, TimeUnit};
use std::marker::PhantomData;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Serves localized messages for the message ids `M`.
///
/// Holds the live [`MessageCatalog`] behind an [`ArcSwap`]. Every accessor
/// loads the current snapshot once, so a concurrent [`reload`](Self::reload)
/// is observed either entirely or not at all.
pub struct MessageFacade<M: MessageKey> {
    loader: LanguageLoader,
    language: Arc<dyn LanguageSource>,
    current: ArcSwap<MessageCatalog>,
    generation: AtomicU64,
    _ids: PhantomData<fn() -> M>,
}

impl<M: MessageKey> MessageFacade<M> {
    /// Loads the configured language from `data_dir`, logging diagnostics
    /// through `tracing`.
    ///
    /// # Errors
    ///
    /// Fails only when the embedded default language file is missing or
    /// invalid.
    pub fn new<P: AsRef<Path>>(
        data_dir: P,
        language: Arc<dyn LanguageSource>,
        resources: Arc<dyn EmbeddedResources>,
    ) -> I18nResult<Self> {
        Self::with_sink(data_dir, language, resources, Arc::new(TracingSink))
    }

    /// Like [`new`](Self::new), reporting diagnostics to `sink`.
    ///
    /// # Errors
    ///
    /// Fails only when the embedded default language file is missing or
    /// invalid.
    pub fn with_sink<P: AsRef<Path>>(
        data_dir: P,
        language: Arc<dyn LanguageSource>,
        resources: Arc<dyn EmbeddedResources>,
        sink: Arc<dyn DiagnosticSink>,
    ) -> I18nResult<Self> {
        let loader = LanguageLoader::new(data_dir, resources, sink);
        let catalog = Self::load_catalog(&loader, language.as_ref(), 1)?;
        info!("Message catalog initialized for language {}", catalog.tag());

        Ok(Self {
            loader,
            language,
            current: ArcSwap::from_pointee(catalog),
            generation: AtomicU64::new(1),
            _ids: PhantomData,
        })
    }

    fn load_catalog(
        loader: &LanguageLoader,
        language: &dyn LanguageSource,
        generation: u64,
    ) -> I18nResult<MessageCatalog> {
        let configured = language.configured_language();
        debug!("Configured language: {:?}", configured);

        let tag = loader.resolver().resolve_configured(configured.as_deref());
        let source = loader.load(&tag)?;
        Ok(MessageCatalog::new(tag, source, generation))
    }

    /// Re-reads the configured language and its files and swaps in the new catalog.
    ///
    /// # Errors
    ///
    /// When the embedded default cannot be loaded; the previous catalog then
    /// stays live.
    pub fn reload(&self) -> I18nResult<()> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let catalog = match Self::load_catalog(&self.loader, self.language.as_ref(), generation) {
            Ok(catalog) => Arc::new(catalog),
            Err(err) => {
                warn!("Reload failed, keeping the current catalog: {}", err);
                return Err(err);
            }
        };

        if self.install(&catalog) {
            info!(
                "Message catalog reloaded for language {} (generation {})",
                catalog.tag(),
                generation
            );
        } else {
            debug!("Reload of generation {} superseded by a newer catalog", generation);
        }
        Ok(())
    }

    /// Makes `catalog` live unless a newer generation already is. Returns
    /// whether it was installed.
    fn install(&self, catalog: &Arc<MessageCatalog>) -> bool {
        // Racing reloads must not replace a newer catalog with an older one.
        let previous = self.current.rcu(|current| {
            if current.generation() > catalog.generation() {
                Arc::clone(current)
            } else {
                Arc::clone(catalog)
            }
        });
        previous.generation() <= catalog.generation()
    }

    /// The live catalog.
    pub fn snapshot(&self) -> Arc<MessageCatalog> {
        self.current.load_full()
    }

    /// Language of the live catalog.
    pub fn language(&self) -> LocaleTag {
        self.current.load().tag().clone()
    }

    /// The loader used for (re)loading.
    pub const fn loader(&self) -> &LanguageLoader {
        &self.loader
    }

    /// Starts a message to `recipient`. No lookup happens until it is used.
    pub fn build<R>(&self, recipient: R, id: M) -> Message<'_, R, M> {
        Message::new(recipient, id, self)
    }

    /// Whether the message is enabled.
    pub fn is_enabled(&self, id: M) -> bool {
        self.current.load().is_enabled(id)
    }

    /// Repeat delay of the message, in seconds.
    pub fn repeat_delay(&self, id: M) -> u64 {
        self.current.load().repeat_delay(id)
    }

    /// Text of the message, or empty.
    pub fn message(&self, id: M) -> String {
        self.current.load().message(id)
    }

    /// Ids among `ids` with no text in the live catalog.
    pub fn missing_messages(&self, ids: &[M]) -> Vec<M> {
        self.current.load().missing_messages(ids)
    }

    /// Singular item name, or empty.
    pub fn item_name(&self) -> String {
        self.current.load().item_name()
    }

    /// Plural item name, or empty.
    pub fn item_name_plural(&self) -> String {
        self.current.load().item_name_plural()
    }

    /// Inventory item name, or empty.
    pub fn inventory_item_name(&self) -> String {
        self.current.load().inventory_item_name()
    }

    /// Item lore lines, or empty.
    pub fn item_lore(&self) -> Vec<String> {
        self.current.load().item_lore()
    }

    /// Spawn display name, or empty.
    pub fn spawn_display_name(&self) -> String {
        self.current.load().spawn_display_name()
    }

    /// Home display name, or empty.
    pub fn home_display_name(&self) -> String {
        self.current.load().home_display_name()
    }

    /// Text shown for durations without a limit.
    pub fn unlimited_string(&self) -> String {
        self.current.load().unlimited_label().to_string()
    }

    /// Formats a duration in milliseconds down to seconds.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a negative duration.
    pub fn time_string(&self, millis: i64) -> I18nResult<String> {
        self.time_string_with(millis, TimeUnit::Seconds)
    }

    /// Formats a duration in milliseconds down to `granularity`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a negative duration.
    pub fn time_string_with(&self, millis: i64, granularity: TimeUnit) -> I18nResult<String> {
        self.current
            .load()
            .duration_formatter()
            .format(millis, granularity)
    }

    /// Formats a duration down to the unit named `granularity`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a negative duration or unknown unit.
    pub fn time_string_in(&self, millis: i64, granularity: &str) -> I18nResult<String> {
        self.current
            .load()
            .duration_formatter()
            .format_named(millis, granularity)
    }
}

impl<M: MessageKey> std::fmt::Debug for MessageFacade<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let current = self.current.load();
        f.debug_struct("MessageFacade")
            .field("loader", &self.loader)
            .field("language", current.tag())
            .field("generation", &current.generation())
            .finish_non_exhaustive()
    }
}
