//! Two-level YAML lookup: user values over bundled defaults.

use msgcat_common::path_segments;
use serde_yaml::{Mapping, Value};

/// A user layer overlaying a default layer.
///
/// Lookups take a dotted path (`ITEM_INFO.ITEM_NAME`). The user layer is
/// consulted first; when it has no value of the requested type the default
/// layer is consulted; otherwise the lookup yields `None`. Null values count
/// as absent.
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredSource {
    user: Value,
    defaults: Value,
}

impl LayeredSource {
    /// Layers `user` over `defaults`.
    #[must_use]
    pub const fn new(user: Value, defaults: Value) -> Self {
        Self { user, defaults }
    }

    /// A source with only defaults.
    #[must_use]
    pub fn defaults_only(defaults: Value) -> Self {
        Self::new(empty_layer(), defaults)
    }

    /// The user layer.
    #[must_use]
    pub const fn user(&self) -> &Value {
        &self.user
    }

    /// The default layer.
    #[must_use]
    pub const fn defaults(&self) -> &Value {
        &self.defaults
    }

    fn layers(&self) -> [&Value; 2] {
        [&self.user, &self.defaults]
    }

    /// First value found at `path` in either layer.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Value> {
        self.find(path, Some)
    }

    /// Whether any layer has a value at `path`.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Whether the user layer itself has a value at `path`.
    #[must_use]
    pub fn user_contains(&self, path: &str) -> bool {
        lookup(&self.user, path).is_some()
    }

    /// First boolean at `path`.
    #[must_use]
    pub fn get_bool(&self, path: &str) -> Option<bool> {
        self.find(path, Value::as_bool)
    }

    /// First non-negative integer at `path`.
    #[must_use]
    pub fn get_u64(&self, path: &str) -> Option<u64> {
        self.find(path, Value::as_u64)
    }

    /// First scalar at `path`, rendered as text.
    #[must_use]
    pub fn get_string(&self, path: &str) -> Option<String> {
        self.find(path, scalar_to_string)
    }

    /// First sequence at `path`, with each scalar entry rendered as text.
    #[must_use]
    pub fn get_string_list(&self, path: &str) -> Option<Vec<String>> {
        self.find(path, |value| {
            value
                .as_sequence()
                .map(|items| items.iter().filter_map(scalar_to_string).collect())
        })
    }

    fn find<'a, T, F>(&'a self, path: &str, convert: F) -> Option<T>
    where
        F: Fn(&'a Value) -> Option<T>,
    {
        self.layers()
            .into_iter()
            .filter_map(|layer| lookup(layer, path))
            .find_map(convert)
    }
}

impl Default for LayeredSource {
    fn default() -> Self {
        Self::new(empty_layer(), empty_layer())
    }
}

/// An empty mapping, used in place of a missing or invalid layer.
#[must_use]
pub fn empty_layer() -> Value {
    Value::Mapping(Mapping::new())
}

fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    path_segments(path)
        .try_fold(root, |node, segment| node.as_mapping()?.get(segment))
        .filter(|value| !value.is_null())
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}
