//! Read-only views for descendant widgets.
//!
//! Widgets nested inside an accordion or one of its items use these snapshots
//! to react to the shared state without reaching into the model.

use crate::selection::{ItemState, OpenPanels};

/// State of an accordion as seen by its descendants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionContext {
    /// The container id.
    pub id: String,
    /// Open panel indices with the "none open" sentinel filtered out.
    pub open_panels: Vec<usize>,
}

impl AccordionContext {
    pub(crate) fn new(id: &str, open: &OpenPanels) -> Self {
        Self {
            id: id.to_owned(),
            open_panels: open.to_vec(),
        }
    }

    /// Whether `index` is among the open panels.
    pub fn is_open(&self, index: usize) -> bool {
        self.open_panels.contains(&index)
    }
}

/// State of a single item as seen by its descendants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemContext {
    /// The item's effective index.
    pub index: usize,
    /// Whether the item's panel is open.
    pub is_expanded: bool,
}

impl ItemContext {
    pub(crate) fn new(index: usize, state: ItemState) -> Self {
        Self {
            index,
            is_expanded: state.is_open(),
        }
    }

    /// The item state this context was derived from.
    pub fn state(&self) -> ItemState {
        if self.is_expanded {
            ItemState::Open
        } else {
            ItemState::Collapsed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_is_filtered() {
        let ctx = AccordionContext::new("acc", &OpenPanels::NONE);
        assert!(ctx.open_panels.is_empty());

        let ctx = AccordionContext::new("acc", &OpenPanels::from(vec![0, 3]));
        assert_eq!(ctx.open_panels, vec![0, 3]);
        assert!(ctx.is_open(3));
        assert!(!ctx.is_open(1));
    }

    #[test]
    fn test_item_context_state() {
        let ctx = ItemContext::new(2, ItemState::Open);
        assert!(ctx.is_expanded);
        assert_eq!(ctx.state(), ItemState::Open);
    }
}
