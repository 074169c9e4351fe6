//! Hierarchical configuration document backed by YAML
//!
//! A [`ConfigDocument`] owns the parsed user mapping and the bundled default
//! mapping. All reads go through [`Section`], a borrowed view that pairs a
//! node of the user mapping with the default node at the same path.

use serde_yaml::{Mapping, Value};

use crate::{Error, Result};

/// Parse YAML source into a mapping.
///
/// An empty document parses as an empty mapping.
pub fn parse_mapping(source: &str) -> Result<Mapping> {
    let value: Value = serde_yaml::from_str(source).map_err(|e| Error::Parse {
        message: e.to_string(),
    })?;

    match value {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        other => Err(Error::Parse {
            message: format!("expected a mapping at the document root, found {}", kind_of(&other)),
        }),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// A loaded configuration document with its default schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    values: Mapping,
    defaults: Mapping,
}

impl ConfigDocument {
    pub fn new(values: Mapping, defaults: Mapping) -> Self {
        Self { values, defaults }
    }

    /// Parse both documents from YAML source.
    pub fn from_yaml(source: &str, defaults: &str) -> Result<Self> {
        Ok(Self::new(parse_mapping(source)?, parse_mapping(defaults)?))
    }

    /// The document root, reading through to the defaults.
    pub fn root(&self) -> Section<'_> {
        Section::new(String::new(), &self.values, Some(&self.defaults))
    }

    /// The default schema's root.
    pub fn defaults_root(&self) -> Section<'_> {
        Section::new(String::new(), &self.defaults, Some(&self.defaults))
    }

    /// The document's own `version`, ignoring defaults.
    pub fn version(&self) -> Option<i64> {
        self.root().value("version").and_then(as_int)
    }

    /// The default schema's `version`.
    pub fn default_version(&self) -> Option<i64> {
        self.defaults_root().value("version").and_then(as_int)
    }
}

/// A borrowed view of one node in a [`ConfigDocument`].
///
/// Keys are dot-separated paths relative to this node.
#[derive(Debug, Clone)]
pub struct Section<'a> {
    path: String,
    values: &'a Mapping,
    defaults: Option<&'a Mapping>,
}

impl<'a> Section<'a> {
    pub(crate) fn new(path: String, values: &'a Mapping, defaults: Option<&'a Mapping>) -> Self {
        Self {
            path,
            values,
            defaults,
        }
    }

    /// Path of this node from the document root; empty for the root.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Full path of `key` from the document root.
    pub fn full_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    /// Value at `key` in this document only. `null` counts as absent.
    pub fn value(&self, key: &str) -> Option<&'a Value> {
        lookup(self.values, key)
    }

    /// Value at `key` in the default schema only.
    pub fn default_value(&self, key: &str) -> Option<&'a Value> {
        self.defaults.and_then(|defaults| lookup(defaults, key))
    }

    /// Whether `key` is set in this document, ignoring defaults.
    pub fn contains(&self, key: &str) -> bool {
        self.value(key).is_some()
    }

    /// Whether `key` is set in this document and is a mapping.
    pub fn is_section(&self, key: &str) -> bool {
        matches!(self.value(key), Some(Value::Mapping(_)))
    }

    /// Whether `key` is set in this document and is a number.
    pub fn is_number(&self, key: &str) -> bool {
        matches!(self.value(key), Some(Value::Number(_)))
    }

    /// The mapping at `key` in this document, with its defaults attached.
    pub fn child(&self, key: &str) -> Option<Section<'a>> {
        let values = self.value(key)?.as_mapping()?;
        let defaults = self.default_value(key).and_then(Value::as_mapping);
        Some(Section::new(self.full_path(key), values, defaults))
    }

    /// The mapping at `key` in the default schema.
    pub fn default_child(&self, key: &str) -> Option<Section<'a>> {
        let defaults = self.default_value(key)?.as_mapping()?;
        Some(Section::new(self.full_path(key), defaults, Some(defaults)))
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.typed(key, as_bool).unwrap_or(false)
    }

    pub fn get_bool_or(&self, key: &str, default: bool) -> bool {
        self.value(key).and_then(as_bool).unwrap_or(default)
    }

    pub fn get_int(&self, key: &str) -> i64 {
        self.typed(key, as_int).unwrap_or(0)
    }

    pub fn get_int_or(&self, key: &str, default: i64) -> i64 {
        self.value(key).and_then(as_int).unwrap_or(default)
    }

    pub fn get_double(&self, key: &str) -> f64 {
        self.typed(key, as_double).unwrap_or(0.0)
    }

    pub fn get_double_or(&self, key: &str, default: f64) -> f64 {
        self.value(key).and_then(as_double).unwrap_or(default)
    }

    pub fn get_string(&self, key: &str) -> Option<String> {
        self.typed(key, as_string)
    }

    pub fn get_string_or(&self, key: &str, default: &str) -> String {
        self.value(key)
            .and_then(as_string)
            .unwrap_or_else(|| default.to_string())
    }

    // A present value of the wrong type yields the default's value.
    fn typed<T>(&self, key: &str, convert: impl Fn(&Value) -> Option<T>) -> Option<T> {
        self.value(key)
            .and_then(&convert)
            .or_else(|| self.default_value(key).and_then(&convert))
    }
}

fn lookup<'a>(map: &'a Mapping, key: &str) -> Option<&'a Value> {
    let mut segments = key.split('.');
    let mut current = map.get(segments.next()?)?;
    for segment in segments {
        current = current.as_mapping()?.get(segment)?;
    }
    (!current.is_null()).then_some(current)
}

fn as_bool(value: &Value) -> Option<bool> {
    value.as_bool()
}

fn as_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        _ => None,
    }
}

fn as_double(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

fn as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Render `value` on one line, using flow style for collections.
pub(crate) fn render_inline(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Sequence(items) => {
            let items: Vec<_> = items.iter().map(render_inline).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Mapping(map) => {
            let entries: Vec<_> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", render_inline(k), render_inline(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
        Value::Tagged(tagged) => format!("{} {}", tagged.tag, render_inline(&tagged.value)),
        scalar => as_string(scalar).unwrap_or_default(),
    }
}
