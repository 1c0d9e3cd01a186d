//! Integration tests for reloading and snapshot consistency.

use msgcat_common::test_utils::{init_test_logging, language_fixtures, write_language_file};
use msgcat_config::{Config, ConfigCache};
use msgcat_i18n::{
    message_keys, EmbeddedResources, I18nError, LanguageEvent, LocaleTag, MessageFacade,
    RecordingSink, StaticResources,
};
use std::borrow::Cow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

message_keys! {
    enum Msg {
        First => "FIRST",
        Second => "SECOND",
        Home => "COMMAND_SUCCESS_HOME",
    }
}

fn generation_file(generation: usize) -> String {
    format!(
        "MESSAGES:
  FIRST:
    string: gen-{generation}
  SECOND:
    string: gen-{generation}
"
    )
}

fn english_resources() -> Arc<StaticResources> {
    Arc::new(StaticResources::new().with("language/en-US.yml", language_fixtures::english_yaml()))
}

/// Resources that can be made to disappear, simulating a broken package.
struct FlakyResources {
    inner: StaticResources,
    available: AtomicBool,
}

impl EmbeddedResources for FlakyResources {
    fn get(&self, name: &str) -> Option<Cow<'static, [u8]>> {
        if self.available.load(Ordering::SeqCst) {
            self.inner.get(name)
        } else {
            None
        }
    }

    fn names(&self) -> Vec<String> {
        self.inner.names()
    }
}

#[test]
fn test_reload_picks_up_edited_file() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    write_language_file(dir.path(), "en-US", &generation_file(1));
    let facade: MessageFacade<Msg> = MessageFacade::new(
        dir.path(),
        Arc::new(LocaleTag::default_tag()),
        english_resources(),
    )
    .unwrap();
    let before = facade.snapshot();

    write_language_file(dir.path(), "en-US", &generation_file(2));
    facade.reload().unwrap();

    assert_eq!(facade.message(Msg::First), "gen-2");
    assert!(facade.snapshot().generation() > before.generation());
    // Snapshots taken earlier are unaffected.
    assert_eq!(before.message(Msg::First), "gen-1");
}

#[test]
fn test_reload_follows_configured_language() {
    let dir = TempDir::new().unwrap();
    write_language_file(dir.path(), "fr-FR", language_fixtures::french_partial_yaml());
    let config = Arc::new(ConfigCache::new(Config::default()));
    let sink = Arc::new(RecordingSink::new());
    let facade: MessageFacade<Msg> = MessageFacade::with_sink(
        dir.path(),
        config.clone(),
        english_resources(),
        sink.clone(),
    )
    .unwrap();
    assert_eq!(facade.language(), LocaleTag::default_tag());

    config.update(Config {
        language: "fr-FR".to_string(),
        ..Config::default()
    });
    facade.reload().unwrap();

    assert_eq!(facade.language().as_str(), "fr-FR");
    assert_eq!(facade.message(Msg::Home), "Bienvenue chez vous, %PLAYER_NAME%.");
    assert_eq!(facade.item_name(), "Étoile de spawn");
    assert_eq!(facade.item_name_plural(), "Spawn Stars");

    config.update(Config {
        language: "it-IT".to_string(),
        ..Config::default()
    });
    sink.take();
    facade.reload().unwrap();

    assert_eq!(facade.language(), LocaleTag::default_tag());
    assert_eq!(sink.fallback_count(), 1);
    assert!(sink
        .events()
        .iter()
        .any(|event| matches!(event, LanguageEvent::NotFound { .. })));
}

#[test]
fn test_failed_reload_keeps_previous_catalog() {
    let dir = TempDir::new().unwrap();
    write_language_file(dir.path(), "en-US", &generation_file(1));
    let resources = Arc::new(FlakyResources {
        inner: StaticResources::new().with("language/en-US.yml", language_fixtures::english_yaml()),
        available: AtomicBool::new(true),
    });
    let facade: MessageFacade<Msg> = MessageFacade::new(
        dir.path(),
        Arc::new(LocaleTag::default_tag()),
        resources.clone(),
    )
    .unwrap();
    let generation = facade.snapshot().generation();

    write_language_file(dir.path(), "en-US", &generation_file(2));
    resources.available.store(false, Ordering::SeqCst);

    let err = facade.reload().unwrap_err();
    assert!(matches!(err, I18nError::DefaultResourceMissing { .. }));
    assert_eq!(facade.message(Msg::First), "gen-1");
    assert_eq!(facade.snapshot().generation(), generation);

    resources.available.store(true, Ordering::SeqCst);
    facade.reload().unwrap();
    assert_eq!(facade.message(Msg::First), "gen-2");
}

#[test]
fn test_concurrent_readers_see_whole_snapshots() {
    let dir = TempDir::new().unwrap();
    write_language_file(dir.path(), "en-US", &generation_file(0));
    let facade: MessageFacade<Msg> = MessageFacade::with_sink(
        dir.path(),
        Arc::new(LocaleTag::default_tag()),
        english_resources(),
        Arc::new(RecordingSink::new()),
    )
    .unwrap();
    let done = AtomicBool::new(false);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let mut last_generation = 0;
                while !done.load(Ordering::SeqCst) {
                    let snapshot = facade.snapshot();
                    assert_eq!(snapshot.message(Msg::First), snapshot.message(Msg::Second));
                    assert!(snapshot.message(Msg::First).starts_with("gen-"));
                    assert!(snapshot.generation() >= last_generation);
                    last_generation = snapshot.generation();

                    assert!(facade.message(Msg::Second).starts_with("gen-"));
                }
            });
        }

        scope.spawn(|| {
            for generation in 1..=50 {
                write_language_file(dir.path(), "en-US", &generation_file(generation));
                facade.reload().unwrap();
            }
            done.store(true, Ordering::SeqCst);
        });
    });

    assert_eq!(facade.message(Msg::First), "gen-50");
}

#[test]
fn test_built_message_reads_catalog_at_use() {
    let dir = TempDir::new().unwrap();
    write_language_file(dir.path(), "en-US", &generation_file(1));
    let facade: MessageFacade<Msg> = MessageFacade::new(
        dir.path(),
        Arc::new(LocaleTag::default_tag()),
        english_resources(),
    )
    .unwrap();

    let message = facade.build("console", Msg::First);
    assert_eq!(message.text(), "gen-1");

    write_language_file(dir.path(), "en-US", &generation_file(2));
    facade.reload().unwrap();
    assert_eq!(message.text(), "gen-2");
}
