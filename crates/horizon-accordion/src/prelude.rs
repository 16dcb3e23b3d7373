//! Prelude module for Horizon Accordion.
//!
//! ```
//! use horizon_accordion::prelude::*;
//! ```

// ============================================================================
// Container and Parts
// ============================================================================

pub use crate::descendants::{FocusTarget, ItemId, ItemOptions};
pub use crate::model::{Accordion, AccordionBuilder, PanelChange, Transition};
pub use crate::parts::{AccordionButton, AccordionItem, AccordionPanel};

// ============================================================================
// Selection State
// ============================================================================

pub use crate::context::{AccordionContext, ItemContext};
pub use crate::selection::{ItemState, OpenPanels};

// ============================================================================
// Configuration and Errors
// ============================================================================

pub use crate::config::{AccordionConfig, DefaultIndex};
pub use crate::diagnostics::Diagnostic;
pub use crate::error::AccordionError;
pub use crate::navigation::{NavKey, NavigationOptions, Orientation, TextDirection};

// ============================================================================
// Signal/Slot and Property System
// ============================================================================

pub use horizon_accordion_core::{ConnectionId, Property, Signal};
