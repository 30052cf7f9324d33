//! Notation of a single catalog entry.
//!
//! An entry is one TOML key/value pair whose value is a string, an inline
//! table, or an array. Parsing is done by `toml_edit`, which keeps inline
//! table attributes in source order; several lint rules are about that
//! order. The result is lowered into [`Value`], the shape the rules and the
//! formatter match on.

use std::fmt;

use thiserror::Error;
use toml_edit::{DocumentMut, Item, Key, TomlError};

/// A parsed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A basic (`"..."`) or literal (`'...'`) string.
    String(String),
    /// An inline table, attributes in source order.
    Table(InlineTable),
    /// An array of values.
    Array(Vec<Value>),
}

impl Value {
    /// The string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The table payload, if this is an inline table.
    pub fn as_table(&self) -> Option<&InlineTable> {
        match self {
            Value::Table(t) => Some(t),
            _ => None,
        }
    }

    /// The elements, if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The elements as strings, if this is an array made only of strings.
    pub fn as_string_array(&self) -> Option<Vec<&str>> {
        self.as_array()?.iter().map(Value::as_str).collect()
    }
}

/// An inline table that remembers attribute order.
///
/// Dotted keys nest: `version.ref = "x"` is stored as a `version` attribute
/// holding a table with a single `ref` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineTable {
    entries: Vec<(String, Value)>,
}

impl InlineTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attribute names in source order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Look up an attribute.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Look up a string attribute.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Look up a table attribute.
    pub fn get_table(&self, key: &str) -> Option<&InlineTable> {
        self.get(key).and_then(Value::as_table)
    }

    /// Look up an array attribute.
    pub fn get_array(&self, key: &str) -> Option<&[Value]> {
        self.get(key).and_then(Value::as_array)
    }

    /// Whether the attribute is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A parsed entry: the alias and its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub alias: String,
    pub value: Value,
}

/// Malformed entry notation.
#[derive(Debug, Error)]
pub enum NotationError {
    /// The text is not valid TOML.
    #[error("{}", describe(.0))]
    Toml(#[from] TomlError),

    /// The text holds no key/value pair, or more than one.
    #[error("expected one declaration but found {0}")]
    DeclarationCount(usize),

    /// A value type catalogs don't use (numbers, booleans, dates).
    #[error("unsupported {kind} value for key '{key}'")]
    UnsupportedValue { key: String, kind: &'static str },
}

/// First line of the parser message plus its detail lines, on one line.
fn describe(err: &TomlError) -> String {
    err.message()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(": ")
}

/// Parse one entry's content into its alias and value.
///
/// A top-level dotted key (`kotlin.version = "2.0"`) declares the alias
/// `kotlin` with a table value.
///
/// # Errors
///
/// Returns a [`NotationError`] for invalid TOML (unbalanced brackets or
/// braces, unterminated strings, duplicate keys, trailing text), for
/// anything but exactly one declaration, or for value types other than
/// strings, inline tables, and arrays.
pub fn parse_entry(content: &str) -> Result<Declaration, NotationError> {
    let document: DocumentMut = content.parse()?;
    let root = document.as_table();

    let mut items = root.iter();
    let (Some((alias, item)), None) = (items.next(), items.next()) else {
        return Err(NotationError::DeclarationCount(root.len()));
    };

    Ok(Declaration {
        alias: alias.to_string(),
        value: lower_item(alias, item)?,
    })
}

fn lower_item(key: &str, item: &Item) -> Result<Value, NotationError> {
    match item {
        Item::Value(value) => lower_value(key, value),
        Item::Table(table) => {
            let mut lowered = InlineTable::new();
            for (k, nested) in table.iter() {
                lowered.entries.push((k.to_string(), lower_item(k, nested)?));
            }
            Ok(Value::Table(lowered))
        }
        Item::None => Err(NotationError::DeclarationCount(0)),
        Item::ArrayOfTables(_) => Err(NotationError::UnsupportedValue {
            key: key.to_string(),
            kind: "array of tables",
        }),
    }
}

fn lower_value(key: &str, value: &toml_edit::Value) -> Result<Value, NotationError> {
    match value {
        toml_edit::Value::String(s) => Ok(Value::String(s.value().clone())),
        toml_edit::Value::InlineTable(table) => {
            let mut lowered = InlineTable::new();
            for (k, nested) in table.iter() {
                lowered.entries.push((k.to_string(), lower_value(k, nested)?));
            }
            Ok(Value::Table(lowered))
        }
        toml_edit::Value::Array(items) => items
            .iter()
            .map(|item| lower_value(key, item))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        other => Err(NotationError::UnsupportedValue {
            key: key.to_string(),
            kind: other.type_name(),
        }),
    }
}

/// Renders the value back in catalog notation.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(&quote(s)),
            Value::Array(items) => {
                let rendered: Vec<String> = items.iter().map(|v| v.to_string()).collect();
                if rendered.is_empty() {
                    write!(f, "[]")
                } else {
                    write!(f, "[ {} ]", rendered.join(", "))
                }
            }
            Value::Table(table) => {
                let rendered: Vec<String> = table
                    .entries
                    .iter()
                    .map(|(k, v)| format!("{} = {}", render_key(k), v))
                    .collect();
                if rendered.is_empty() {
                    write!(f, "{{ }}")
                } else {
                    write!(f, "{{ {} }}", rendered.join(", "))
                }
            }
        }
    }
}

/// Render a string the way `toml_edit` writes a fresh string value.
pub fn quote(s: &str) -> String {
    toml_edit::Value::from(s).to_string()
}

/// Render a key bare when possible, quoted otherwise.
pub fn render_key(key: &str) -> String {
    Key::new(key).to_string()
}
