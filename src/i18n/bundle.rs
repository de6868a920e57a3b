//! Parsed message bundle

use std::collections::HashMap;

use serde::Serialize;

use super::properties;

/// Read-only key to message mapping produced by one load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MessageBundle {
    messages: HashMap<String, String>,
}

impl MessageBundle {
    pub fn new(messages: HashMap<String, String>) -> Self {
        Self { messages }
    }

    /// Parse properties text straight into a bundle
    pub fn from_properties(text: &str) -> Self {
        Self::new(properties::parse(text))
    }

    /// Look up a message
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// Look up a message, falling back to the key itself
    pub fn get_or_key<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.messages.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize back to properties text, sorted by key
    pub fn to_properties(&self) -> String {
        properties::to_properties(&self.messages)
    }
}
