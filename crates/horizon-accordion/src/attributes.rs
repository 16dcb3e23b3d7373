//! Element attributes for each accordion part.
//!
//! The accordion follows the WAI-ARIA accordion pattern: every trigger
//! button points at its panel with `aria-controls` and reports
//! `aria-expanded`; every panel is a `region` labelled by its button and is
//! `hidden` while collapsed. `data-*` attributes mirror the state for styling.

use std::collections::BTreeMap;
use std::fmt;

/// An ordered set of element attributes.
///
/// Boolean attributes that are present carry an empty string value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    values: BTreeMap<&'static str, String>,
}

impl Attributes {
    /// Create an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute.
    pub fn set(&mut self, name: &'static str, value: impl Into<String>) -> &mut Self {
        self.values.insert(name, value.into());
        self
    }

    /// Set a boolean attribute: present when `on`, absent otherwise.
    pub fn flag(&mut self, name: &'static str, on: bool) -> &mut Self {
        if on {
            self.values.insert(name, String::new());
        } else {
            self.values.remove(name);
        }
        self
    }

    /// Value of an attribute.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Whether an attribute is present.
    pub fn has(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate attributes in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.values.iter().map(|(name, value)| (*name, value.as_str()))
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, value) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            if value.is_empty() {
                f.write_str(name)?;
            } else {
                write!(f, "{name}=\"{value}\"")?;
            }
        }
        Ok(())
    }
}
