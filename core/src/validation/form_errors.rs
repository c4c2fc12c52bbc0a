//! Field name -> message map shared by client validation and backend error mapping

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key for messages that cannot be attributed to a single field
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Field-keyed localized messages.
///
/// Keys are unique; inserting a field twice keeps the last message.
/// Iteration is sorted by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormErrors {
    errors: BTreeMap<String, String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a map holding a single general message
    pub fn general(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(NON_FIELD_ERRORS, message);
        errors
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    /// Insert only when a validator produced a message
    pub fn insert_opt(&mut self, field: impl Into<String>, message: Option<String>) {
        if let Some(message) = message {
            self.insert(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The message to show in a banner: the general message if any,
    /// otherwise the message of the alphabetically first field. Backend
    /// bodies are parsed without key order, so payload order is not used.
    pub fn primary_message(&self) -> Option<&str> {
        self.get(NON_FIELD_ERRORS)
            .or_else(|| self.errors.values().next().map(String::as_str))
    }

    /// Merge another map in; its messages win on conflicts
    pub fn extend(&mut self, other: FormErrors) {
        self.errors.extend(other.errors);
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.errors
    }
}

impl IntoIterator for FormErrors {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormErrors {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut errors = Self::new();
        for (field, message) in iter {
            errors.insert(field, message);
        }
        errors
    }
}
