//! Read-only language files bundled with the application.

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

/// Bundled files addressed by logical path, e.g. `language/en-US.yml`.
///
/// Paths always use `/` regardless of platform.
pub trait EmbeddedResources: Send + Sync {
    /// Contents of the resource at `name`.
    fn get(&self, name: &str) -> Option<Cow<'static, [u8]>>;

    /// Logical paths of every bundled resource.
    fn names(&self) -> Vec<String>;

    /// Whether a resource exists at `name`.
    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

/// Adapter exposing a `#[derive(RustEmbed)]` folder as [`EmbeddedResources`].
///
/// The folder must contain a `language/` directory.
pub struct RustEmbedResources<E> {
    _assets: PhantomData<fn() -> E>,
}

impl<E: RustEmbed> RustEmbedResources<E> {
    /// Creates the adapter.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _assets: PhantomData,
        }
    }
}

impl<E: RustEmbed> Default for RustEmbedResources<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for RustEmbedResources<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RustEmbedResources")
            .field("assets", &std::any::type_name::<E>())
            .finish()
    }
}

impl<E: RustEmbed> EmbeddedResources for RustEmbedResources<E> {
    fn get(&self, name: &str) -> Option<Cow<'static, [u8]>> {
        E::get(name).map(|file| file.data)
    }

    fn names(&self) -> Vec<String> {
        E::iter().map(Cow::into_owned).collect()
    }
}

/// In-memory resources, e.g. built from `include_str!`.
#[derive(Debug, Default, Clone)]
pub struct StaticResources {
    files: BTreeMap<String, Cow<'static, [u8]>>,
}

impl StaticResources {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a static resource, builder style.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, contents: &'static str) -> Self {
        self.files
            .insert(name.into(), Cow::Borrowed(contents.as_bytes()));
        self
    }

    /// Adds an owned resource.
    pub fn insert(&mut self, name: impl Into<String>, contents: impl Into<Vec<u8>>) {
        self.files.insert(name.into(), Cow::Owned(contents.into()));
    }
}

impl EmbeddedResources for StaticResources {
    fn get(&self, name: &str) -> Option<Cow<'static, [u8]>> {
        self.files.get(name).cloned()
    }

    fn names(&self) -> Vec<String> {
        self.files.keys().cloned().collect()
    }

    fn contains(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }
}
