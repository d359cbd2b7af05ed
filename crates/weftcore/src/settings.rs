use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::SettingsError;

/// A single typed entry in a settings tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum SettingsEntry {
    Bool(bool),
    Int(i32),
    Long(i64),
    Double(f64),
    String(String),
    BoolArray(Vec<bool>),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
    DoubleArray(Vec<f64>),
    StringArray(Vec<String>),
    Tree(Settings),
}

impl SettingsEntry {
    /// Short kind name used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            SettingsEntry::Bool(_) => "bool",
            SettingsEntry::Int(_) => "int",
            SettingsEntry::Long(_) => "long",
            SettingsEntry::Double(_) => "double",
            SettingsEntry::String(_) => "string",
            SettingsEntry::BoolArray(_) => "bool array",
            SettingsEntry::IntArray(_) => "int array",
            SettingsEntry::LongArray(_) => "long array",
            SettingsEntry::DoubleArray(_) => "double array",
            SettingsEntry::StringArray(_) => "string array",
            SettingsEntry::Tree(_) => "tree",
        }
    }
}

/// Ordered key-value tree that variables are persisted to and read from.
///
/// Entries keep insertion order, so anything written out and read back
/// is traversed in the same order it was stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings {
    entries: IndexMap<String, SettingsEntry>,
}

impl Settings {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Look up a raw entry.
    pub fn get(&self, key: &str) -> Option<&SettingsEntry> {
        self.entries.get(key)
    }

    /// Store a raw entry, replacing any previous entry under the same key.
    pub fn set(&mut self, key: impl Into<String>, entry: SettingsEntry) {
        self.entries.insert(key.into(), entry);
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn require(&self, key: &str) -> Result<&SettingsEntry, SettingsError> {
        self.entries
            .get(key)
            .ok_or_else(|| SettingsError::MissingKey(key.to_string()))
    }

    fn wrong_kind(key: &str, expected: &'static str, actual: &SettingsEntry) -> SettingsError {
        SettingsError::WrongKind {
            key: key.to_string(),
            expected,
            actual: actual.kind(),
        }
    }

    pub fn get_bool(&self, key: &str) -> Result<bool, SettingsError> {
        match self.require(key)? {
            SettingsEntry::Bool(v) => Ok(*v),
            other => Err(Self::wrong_kind(key, "bool", other)),
        }
    }

    pub fn get_int(&self, key: &str) -> Result<i32, SettingsError> {
        match self.require(key)? {
            SettingsEntry::Int(v) => Ok(*v),
            other => Err(Self::wrong_kind(key, "int", other)),
        }
    }

    pub fn get_long(&self, key: &str) -> Result<i64, SettingsError> {
        match self.require(key)? {
            SettingsEntry::Long(v) => Ok(*v),
            other => Err(Self::wrong_kind(key, "long", other)),
        }
    }

    pub fn get_double(&self, key: &str) -> Result<f64, SettingsError> {
        match self.require(key)? {
            SettingsEntry::Double(v) => Ok(*v),
            other => Err(Self::wrong_kind(key, "double", other)),
        }
    }

    pub fn get_string(&self, key: &str) -> Result<&str, SettingsError> {
        match self.require(key)? {
            SettingsEntry::String(v) => Ok(v),
            other => Err(Self::wrong_kind(key, "string", other)),
        }
    }

    pub fn get_bool_array(&self, key: &str) -> Result<&[bool], SettingsError> {
        match self.require(key)? {
            SettingsEntry::BoolArray(v) => Ok(v),
            other => Err(Self::wrong_kind(key, "bool array", other)),
        }
    }

    pub fn get_int_array(&self, key: &str) -> Result<&[i32], SettingsError> {
        match self.require(key)? {
            SettingsEntry::IntArray(v) => Ok(v),
            other => Err(Self::wrong_kind(key, "int array", other)),
        }
    }

    pub fn get_long_array(&self, key: &str) -> Result<&[i64], SettingsError> {
        match self.require(key)? {
            SettingsEntry::LongArray(v) => Ok(v),
            other => Err(Self::wrong_kind(key, "long array", other)),
        }
    }

    pub fn get_double_array(&self, key: &str) -> Result<&[f64], SettingsError> {
        match self.require(key)? {
            SettingsEntry::DoubleArray(v) => Ok(v),
            other => Err(Self::wrong_kind(key, "double array", other)),
        }
    }

    pub fn get_string_array(&self, key: &str) -> Result<&[String], SettingsError> {
        match self.require(key)? {
            SettingsEntry::StringArray(v) => Ok(v),
            other => Err(Self::wrong_kind(key, "string array", other)),
        }
    }

    pub fn get_tree(&self, key: &str) -> Result<&Settings, SettingsError> {
        match self.require(key)? {
            SettingsEntry::Tree(v) => Ok(v),
            other => Err(Self::wrong_kind(key, "tree", other)),
        }
    }

    pub fn set_bool(&mut self, key: impl Into<String>, value: bool) {
        self.set(key, SettingsEntry::Bool(value));
    }

    pub fn set_int(&mut self, key: impl Into<String>, value: i32) {
        self.set(key, SettingsEntry::Int(value));
    }

    pub fn set_long(&mut self, key: impl Into<String>, value: i64) {
        self.set(key, SettingsEntry::Long(value));
    }

    pub fn set_double(&mut self, key: impl Into<String>, value: f64) {
        self.set(key, SettingsEntry::Double(value));
    }

    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.set(key, SettingsEntry::String(value.into()));
    }

    pub fn set_bool_array(&mut self, key: impl Into<String>, values: Vec<bool>) {
        self.set(key, SettingsEntry::BoolArray(values));
    }

    pub fn set_int_array(&mut self, key: impl Into<String>, values: Vec<i32>) {
        self.set(key, SettingsEntry::IntArray(values));
    }

    pub fn set_long_array(&mut self, key: impl Into<String>, values: Vec<i64>) {
        self.set(key, SettingsEntry::LongArray(values));
    }

    pub fn set_double_array(&mut self, key: impl Into<String>, values: Vec<f64>) {
        self.set(key, SettingsEntry::DoubleArray(values));
    }

    pub fn set_string_array(&mut self, key: impl Into<String>, values: Vec<String>) {
        self.set(key, SettingsEntry::StringArray(values));
    }

    pub fn set_tree(&mut self, key: impl Into<String>, tree: Settings) {
        self.set(key, SettingsEntry::Tree(tree));
    }
}
