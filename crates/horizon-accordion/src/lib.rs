//! Horizon Accordion - an accessible accordion state model.
//!
//! An accordion is a vertically stacked set of items, each with a trigger
//! button and a collapsible panel. This crate owns the behaviour: which panels
//! are open, how a trigger click changes that, keyboard navigation between
//! triggers, and the ARIA attributes each part exposes. Rendering is left to
//! the host toolkit.
//!
//! # Example
//!
//! ```
//! use horizon_accordion::prelude::*;
//!
//! let accordion = Accordion::builder().multiple(true).build();
//! let shipping = accordion.add_item(ItemOptions::new());
//! let returns = accordion.add_item(ItemOptions::new());
//!
//! returns.button().click().unwrap();
//! assert_eq!(accordion.open_panels(), OpenPanels::from(vec![0, 1]));
//!
//! shipping.button().click().unwrap();
//! assert_eq!(accordion.open_panels(), OpenPanels::from(vec![1]));
//! ```
//!
//! # Logging
//!
//! The crate logs through [`tracing`]; see
//! [`logging::targets`](horizon_accordion_core::logging::targets) for the
//! target names.

pub use horizon_accordion_core::{
    logging, ConnectionId, DebugNode, Property, ReadOnlyProperty, Signal,
    TreeFormatter, TreeStyle,
};

#[cfg(feature = "accessibility")]
pub mod accessibility;
pub mod attributes;
pub mod config;
pub mod context;
pub mod descendants;
pub mod diagnostics;
pub mod error;
pub mod ids;
pub mod model;
pub mod navigation;
pub mod parts;
pub mod prelude;
pub mod selection;

pub use attributes::Attributes;
pub use config::{AccordionConfig, DefaultIndex};
pub use context::{AccordionContext, ItemContext};
pub use descendants::{Descendant, DescendantRegistry, FocusTarget, ItemId, ItemOptions};
pub use diagnostics::{Diagnostic, DiagnosticLog};
pub use error::{AccordionError, Result};
pub use model::{Accordion, AccordionBuilder, PanelChange, Transition};
pub use navigation::{NavKey, Navigable, NavigationOptions, Orientation, TextDirection};
pub use parts::{AccordionButton, AccordionItem, AccordionPanel};
pub use selection::{toggle, ItemState, OpenPanels, Toggle};
