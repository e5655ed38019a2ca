use std::fmt::Display;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An ordered set of wire fields. Iteration follows insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignedFieldSet {
    fields: IndexMap<String, String>,
}

impl SignedFieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`. Blank values are ignored, and the field stays absent (or keeps its previous value).
    /// Returns true if the value was stored.
    pub fn add_field<V: Display>(&mut self, name: &str, value: V) -> bool {
        let value = value.to_string();
        if name.trim().is_empty() || value.trim().is_empty() {
            return false;
        }
        self.fields.insert(name.to_string(), value);
        true
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// The value of `name`, or the empty string if the field is absent.
    pub fn value_or_empty(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }

    /// Values for `names`, in the given order. Absent fields contribute an empty string.
    pub fn values_for(&self, names: &[&str]) -> Vec<String> {
        names.iter().map(|n| self.value_or_empty(n).to_string()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn names(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    /// Renders the fields as an `application/x-www-form-urlencoded` body.
    pub fn to_form_urlencoded(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new()).extend_pairs(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a SignedFieldSet {
    type IntoIter = indexmap::map::Iter<'a, String, String>;
    type Item = (&'a String, &'a String);

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
