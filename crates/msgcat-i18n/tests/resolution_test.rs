//! Integration tests for locale resolution and layered loading.

use msgcat_common::test_utils::{init_test_logging, language_fixtures, write_language_file};
use msgcat_i18n::{
    message_keys, I18nError, LanguageEvent, LanguageLoader, LoadReason, LocaleResolver, LocaleTag,
    MessageCatalog, MessageFacade, RecordingSink, StaticResources,
};
use std::sync::Arc;
use tempfile::TempDir;

message_keys! {
    enum Msg {
        Home => "COMMAND_SUCCESS_HOME",
        Cooldown => "TELEPORT_COOLDOWN",
    }
}

const FRENCH_DEFAULTS: &str = r#"
MESSAGES:
  COMMAND_SUCCESS_HOME:
    string: "Bienvenue."
ITEM_INFO:
  ITEM_NAME: "Étoile"
  ITEM_NAME_PLURAL: "Étoiles"
"#;

fn tag(text: &str) -> LocaleTag {
    LocaleTag::new(text).unwrap()
}

fn resources() -> Arc<StaticResources> {
    Arc::new(
        StaticResources::new()
            .with("language/en-US.yml", language_fixtures::english_yaml())
            .with("language/fr-FR.yml", FRENCH_DEFAULTS),
    )
}

fn loader(dir: &TempDir, sink: &Arc<RecordingSink>) -> LanguageLoader {
    LanguageLoader::new(dir.path(), resources(), sink.clone())
}

#[test]
fn test_existing_tag_resolves_unchanged() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    write_language_file(dir.path(), "fr-FR", "ITEM_INFO:\n  ITEM_NAME: Étoile\n");
    let sink = Arc::new(RecordingSink::new());
    let resolver = LocaleResolver::new(dir.path(), sink.clone());

    assert_eq!(resolver.resolve(&tag("fr-FR")), tag("fr-FR"));
    assert!(sink.events().is_empty());
}

#[test]
fn test_missing_tag_falls_back_with_one_event() {
    let dir = TempDir::new().unwrap();
    let sink = Arc::new(RecordingSink::new());
    let resolver = LocaleResolver::new(dir.path(), sink.clone());

    assert_eq!(resolver.resolve(&tag("de-DE")), LocaleTag::default_tag());
    assert_eq!(
        sink.events(),
        vec![LanguageEvent::FallbackToDefault {
            requested: "de-DE".to_string(),
            fallback: LocaleTag::default_tag(),
        }]
    );
}

#[test]
fn test_tag_lookup_is_case_sensitive() {
    let dir = TempDir::new().unwrap();
    write_language_file(dir.path(), "fr-FR", "");
    let sink = Arc::new(RecordingSink::new());
    let resolver = LocaleResolver::new(dir.path(), sink.clone());

    // Skip on case-insensitive file systems, where both names hit the same file.
    if dir.path().join("language/fr-fr.yml").exists() {
        return;
    }
    assert_eq!(resolver.resolve(&tag("fr-fr")), LocaleTag::default_tag());
    assert_eq!(sink.fallback_count(), 1);
}

#[test]
fn test_user_layer_overrides_embedded_layer() {
    let dir = TempDir::new().unwrap();
    write_language_file(
        dir.path(),
        "fr-FR",
        concat!(
            "ITEM_INFO:\n  ITEM_NAME: Étoile de spawn\n",
            "MESSAGES:\n  TELEPORT_COOLDOWN:\n    repeat-delay: 9\n",
        ),
    );
    let sink = Arc::new(RecordingSink::new());
    let source = loader(&dir, &sink).load(&tag("fr-FR")).unwrap();
    let catalog = MessageCatalog::new(tag("fr-FR"), source, 1);

    assert_eq!(catalog.item_name(), "Étoile de spawn");
    assert_eq!(catalog.item_name_plural(), "Étoiles");
    assert_eq!(catalog.message(Msg::Home), "Bienvenue.");
    assert_eq!(catalog.repeat_delay(Msg::Cooldown), 9);
    // The French default layer has no spawn name, and English is not consulted.
    assert_eq!(catalog.spawn_display_name(), "");
    assert!(matches!(sink.events().as_slice(), [LanguageEvent::Loaded { .. }]));
}

#[test]
fn test_tag_without_embedded_resource_uses_english_defaults() {
    let dir = TempDir::new().unwrap();
    write_language_file(dir.path(), "es-ES", "HOME_DISPLAY_NAME: Casa\n");
    let sink = Arc::new(RecordingSink::new());
    let loader = loader(&dir, &sink);

    assert_eq!(loader.default_resource_name(&tag("es-ES")), "language/en-US.yml");
    let catalog = MessageCatalog::new(tag("es-ES"), loader.load(&tag("es-ES")).unwrap(), 1);
    assert_eq!(catalog.home_display_name(), "Casa");
    assert_eq!(catalog.spawn_display_name(), "Spawn");
    assert_eq!(
        catalog.message(Msg::Cooldown),
        "You must wait %DURATION% before teleporting again."
    );
}

#[test]
fn test_missing_user_file_is_reported_and_defaults_apply() {
    let dir = TempDir::new().unwrap();
    let sink = Arc::new(RecordingSink::new());
    let loader = loader(&dir, &sink);

    let err = loader.load_user_layer(&LocaleTag::default_tag()).unwrap_err();
    assert_eq!(err.reason(), LoadReason::NotFound);

    let source = loader.load(&LocaleTag::default_tag()).unwrap();
    let catalog = MessageCatalog::new(LocaleTag::default_tag(), source, 1);
    assert_eq!(catalog.item_name(), "Spawn Star");

    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].reason(), Some(LoadReason::NotFound));
}

#[test]
fn test_malformed_user_file_is_reported_and_ignored() {
    let dir = TempDir::new().unwrap();
    write_language_file(dir.path(), "en-US", language_fixtures::malformed_yaml());
    let sink = Arc::new(RecordingSink::new());
    let loader = loader(&dir, &sink);

    let source = loader.load(&LocaleTag::default_tag()).unwrap();
    let catalog = MessageCatalog::new(LocaleTag::default_tag(), source, 1);
    assert_eq!(catalog.message(Msg::Home), "Welcome home, %PLAYER_NAME%.");

    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].reason(), Some(LoadReason::Malformed));
}

#[test]
fn test_non_mapping_user_file_is_malformed() {
    let dir = TempDir::new().unwrap();
    write_language_file(dir.path(), "en-US", "- just\n- a list\n");
    let sink = Arc::new(RecordingSink::new());

    let err = loader(&dir, &sink)
        .load_user_layer(&LocaleTag::default_tag())
        .unwrap_err();
    assert_eq!(err.reason(), LoadReason::Malformed);
}

#[test]
fn test_unreadable_user_file_is_reported_and_ignored() {
    let dir = TempDir::new().unwrap();
    // A directory where the file should be exists but cannot be read as text.
    std::fs::create_dir_all(dir.path().join("language/en-US.yml")).unwrap();
    let sink = Arc::new(RecordingSink::new());
    let loader = loader(&dir, &sink);

    assert_eq!(
        loader.resolver().resolve(&LocaleTag::default_tag()),
        LocaleTag::default_tag()
    );
    let source = loader.load(&LocaleTag::default_tag()).unwrap();
    assert_eq!(
        MessageCatalog::new(LocaleTag::default_tag(), source, 1).home_display_name(),
        "Home"
    );

    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].reason(), Some(LoadReason::Unreadable));
}

#[test]
fn test_missing_embedded_default_is_fatal() {
    let dir = TempDir::new().unwrap();
    let resources = Arc::new(StaticResources::new().with("language/fr-FR.yml", FRENCH_DEFAULTS));

    let result: Result<MessageFacade<Msg>, _> =
        MessageFacade::new(dir.path(), Arc::new(tag("de-DE")), resources);

    let err = result.unwrap_err();
    assert!(err.is_fatal());
    match err {
        I18nError::DefaultResourceMissing { resource } => {
            assert_eq!(resource, "language/en-US.yml");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_malformed_embedded_default_is_fatal() {
    let dir = TempDir::new().unwrap();
    let resources = Arc::new(StaticResources::new().with("language/en-US.yml", "A: [broken\n"));
    let sink = Arc::new(RecordingSink::new());

    let err = LanguageLoader::new(dir.path(), resources, sink)
        .load(&LocaleTag::default_tag())
        .unwrap_err();
    assert!(matches!(err, I18nError::DefaultResourceMalformed { .. }));
}

#[test]
fn test_install_defaults_never_overwrites() {
    let dir = TempDir::new().unwrap();
    write_language_file(dir.path(), "fr-FR", "HOME_DISPLAY_NAME: Maison\n");
    let sink = Arc::new(RecordingSink::new());
    let loader = loader(&dir, &sink);

    let installed = loader.install_defaults().unwrap();
    assert_eq!(installed, vec![dir.path().join("language/en-US.yml")]);
    assert_eq!(
        std::fs::read_to_string(dir.path().join("language/fr-FR.yml")).unwrap(),
        "HOME_DISPLAY_NAME: Maison\n"
    );

    assert!(loader.install_defaults().unwrap().is_empty());
    assert_eq!(
        loader.resolver().resolve(&LocaleTag::default_tag()),
        LocaleTag::default_tag()
    );
    assert_eq!(sink.fallback_count(), 0);
}
