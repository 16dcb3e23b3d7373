//! Accordion configuration.
//!
//! [`AccordionConfig`] carries the mode flags that stay fixed for the lifetime
//! of an accordion, plus its optional id and default selection. It can be
//! built in code or loaded from TOML/JSON:
//!
//! ```
//! use horizon_accordion::{AccordionConfig, DefaultIndex};
//!
//! let config = AccordionConfig::from_toml_str(r#"
//! id = "faq"
//! multiple = true
//! collapsible = true
//! default_index = [0, 2]
//! "#).unwrap();
//!
//! assert!(config.multiple);
//! assert_eq!(config.default_index, Some(DefaultIndex::Many(vec![0, 2])));
//! ```

use std::path::Path;

use horizon_accordion_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::error::{AccordionError, Result};
use crate::selection::OpenPanels;

/// The initial selection of an uncontrolled accordion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultIndex {
    /// A single panel index.
    One(usize),
    /// A list of panel indices.
    Many(Vec<usize>),
}

impl DefaultIndex {
    /// Coerce the default to the accordion's mode.
    ///
    /// A scalar is wrapped into a set in multiple mode and a list loses its
    /// repeated indices. In exclusive mode a list yields its first element, or
    /// panel 0 when empty.
    pub fn coerce(&self, multiple: bool) -> OpenPanels {
        match (self, multiple) {
            (Self::One(index), true) => OpenPanels::Multiple(vec![*index]),
            (Self::Many(indices), true) => OpenPanels::from(indices.clone()),
            (Self::One(index), false) => OpenPanels::Single(Some(*index)),
            (Self::Many(indices), false) => {
                OpenPanels::Single(Some(indices.first().copied().unwrap_or(0)))
            }
        }
    }
}

impl From<usize> for DefaultIndex {
    fn from(index: usize) -> Self {
        Self::One(index)
    }
}

impl From<Vec<usize>> for DefaultIndex {
    fn from(indices: Vec<usize>) -> Self {
        Self::Many(indices)
    }
}

/// Mode flags and defaults for an accordion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccordionConfig {
    /// Container id. Generated when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Allow more than one panel open at a time.
    pub multiple: bool,
    /// Allow the last open panel to be closed.
    pub collapsible: bool,
    /// Ignore every selection request.
    pub read_only: bool,
    /// Initial selection for uncontrolled use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_index: Option<DefaultIndex>,
}

impl AccordionConfig {
    /// Create a configuration with every flag off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the container id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set whether several panels may be open at once.
    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Set whether the last open panel may be closed.
    pub fn with_collapsible(mut self, collapsible: bool) -> Self {
        self.collapsible = collapsible;
        self
    }

    /// Set whether selection requests are ignored.
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Set the initial selection.
    pub fn with_default_index(mut self, default_index: impl Into<DefaultIndex>) -> Self {
        self.default_index = Some(default_index.into());
        self
    }

    /// Parse a configuration from TOML.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        tracing::debug!(target: targets::CONFIG, ?config, "loaded accordion config from TOML");
        Ok(config)
    }

    /// Parse a configuration from JSON.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(source)?;
        tracing::debug!(target: targets::CONFIG, ?config, "loaded accordion config from JSON");
        Ok(config)
    }

    /// Load a configuration file, choosing the format by extension.
    ///
    /// `.json` files are parsed as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source =
            std::fs::read_to_string(path).map_err(|err| AccordionError::io(path, err))?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&source),
            _ => Self::from_toml_str(&source),
        }
    }

    /// Serialize the configuration as TOML.
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// The selection an uncontrolled accordion starts with.
    ///
    /// Priority: the default index (coerced to the mode), then all closed for
    /// collapsible accordions, then panel 0.
    pub fn initial_open_panels(&self) -> OpenPanels {
        match (&self.default_index, self.collapsible, self.multiple) {
            (Some(default), _, multiple) => default.coerce(multiple),
            (None, true, true) => OpenPanels::empty_set(),
            (None, true, false) => OpenPanels::NONE,
            (None, false, true) => OpenPanels::Multiple(vec![0]),
            (None, false, false) => OpenPanels::Single(Some(0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_priority() {
        assert_eq!(AccordionConfig::new().initial_open_panels(), OpenPanels::from(0));
        assert_eq!(
            AccordionConfig::new().with_multiple(true).initial_open_panels(),
            OpenPanels::from(vec![0])
        );
        assert_eq!(
            AccordionConfig::new().with_collapsible(true).initial_open_panels(),
            OpenPanels::NONE
        );
        assert_eq!(
            AccordionConfig::new()
                .with_multiple(true)
                .with_collapsible(true)
                .initial_open_panels(),
            OpenPanels::empty_set()
        );
        assert_eq!(
            AccordionConfig::new()
                .with_collapsible(true)
                .with_default_index(2)
                .initial_open_panels(),
            OpenPanels::from(2)
        );
    }

    #[test]
    fn test_default_index_coercion() {
        assert_eq!(DefaultIndex::One(3).coerce(true), OpenPanels::from(vec![3]));
        assert_eq!(DefaultIndex::Many(vec![4, 1]).coerce(false), OpenPanels::from(4));
        assert_eq!(DefaultIndex::Many(vec![]).coerce(false), OpenPanels::from(0));
        assert_eq!(
            DefaultIndex::Many(vec![0, 1]).coerce(true),
            OpenPanels::from(vec![0, 1])
        );
    }

    #[test]
    fn test_toml_round_trip_of_flags() {
        let config = AccordionConfig::from_toml_str(
            r#"
            collapsible = true
            default_index = 1
            "#,
        )
        .unwrap();
        assert!(config.collapsible);
        assert!(!config.multiple);
        assert_eq!(config.default_index, Some(DefaultIndex::One(1)));
        assert_eq!(config.id, None);

        let text = config.to_toml_string().unwrap();
        assert!(text.contains("collapsible = true"));
    }

    #[test]
    fn test_json_config() {
        let config =
            AccordionConfig::from_json_str(r#"{"read_only": true, "default_index": [1, 2]}"#)
                .unwrap();
        assert!(config.read_only);
        assert_eq!(config.default_index, Some(DefaultIndex::Many(vec![1, 2])));
    }

    #[test]
    fn test_invalid_config() {
        let err = AccordionConfig::from_toml_str("multiple = \"yes\"").unwrap_err();
        assert!(matches!(err, AccordionError::Toml(_)));

        let err = AccordionConfig::from_json_str("{\"default_index\": -1}").unwrap_err();
        assert!(matches!(err, AccordionError::Json(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = AccordionConfig::load("/nonexistent/accordion.toml").unwrap_err();
        assert!(matches!(err, AccordionError::Io { .. }));
    }
}
