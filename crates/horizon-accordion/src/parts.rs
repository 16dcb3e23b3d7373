//! Handles for the parts of an accordion item.
//!
//! An [`AccordionItem`] is created by [`Accordion::add_item`] and stays
//! registered until it is dropped. Its [`button`](AccordionItem::button) and
//! [`panel`](AccordionItem::panel) borrow the item and expose the behaviour and
//! attributes of the trigger and the collapsible region.
//!
//! ```
//! use horizon_accordion::{Accordion, ItemOptions};
//!
//! let accordion = Accordion::builder().id("faq").build();
//! let first = accordion.add_item(ItemOptions::new());
//! let second = accordion.add_item(ItemOptions::new());
//!
//! second.button().click().unwrap();
//! assert!(second.is_expanded().unwrap());
//! assert!(first.panel().is_hidden().unwrap());
//! assert_eq!(second.panel_id().unwrap(), "panel--faq--1");
//! ```

use std::fmt;
use std::sync::Arc;

use horizon_accordion_core::logging::targets;

use crate::attributes::Attributes;
use crate::context::ItemContext;
use crate::descendants::{FocusTarget, ItemId};
use crate::error::Result;
use crate::ids;
use crate::model::{Accordion, Transition};
use crate::navigation::NavKey;
use crate::selection::ItemState;

/// A registered accordion item.
///
/// Dropping the handle unregisters the item.
pub struct AccordionItem {
    accordion: Arc<Accordion>,
    id: ItemId,
}

impl AccordionItem {
    pub(crate) fn new(accordion: Arc<Accordion>, id: ItemId) -> Self {
        Self { accordion, id }
    }

    /// The item's stable id.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// The accordion this item belongs to.
    pub fn accordion(&self) -> &Arc<Accordion> {
        &self.accordion
    }

    /// The item's effective index.
    pub fn index(&self) -> Result<usize> {
        self.accordion.index_of(self.id)
    }

    /// Whether the item's panel is open or collapsed.
    pub fn state(&self) -> Result<ItemState> {
        Ok(self.accordion.item_state(self.index()?))
    }

    /// Whether the item's panel is open.
    pub fn is_expanded(&self) -> Result<bool> {
        Ok(self.state()?.is_open())
    }

    pub fn is_disabled(&self) -> Result<bool> {
        self.accordion.is_item_disabled(self.id)
    }

    pub fn set_disabled(&self, disabled: bool) -> Result<()> {
        self.accordion.set_item_disabled(self.id, disabled)
    }

    /// Snapshot for descendants of this item.
    pub fn context(&self) -> Result<ItemContext> {
        self.accordion.item_context(self.id)
    }

    /// Attach the element the trigger focuses.
    pub fn set_focus_target(&self, target: impl FocusTarget + 'static) -> Result<()> {
        self.accordion.set_focus_target(self.id, Arc::new(target))
    }

    /// Element id of the item.
    pub fn item_id(&self) -> Result<String> {
        Ok(ids::item_id(self.accordion.id(), self.index()?))
    }

    /// Element id of the item's trigger.
    pub fn button_id(&self) -> Result<String> {
        Ok(ids::button_id(&self.item_id()?))
    }

    /// Element id of the item's panel.
    pub fn panel_id(&self) -> Result<String> {
        Ok(ids::panel_id(&self.item_id()?))
    }

    /// Attributes of the item element.
    pub fn attributes(&self) -> Result<Attributes> {
        let state = self.state()?;
        let mut attrs = Attributes::new();
        attrs
            .flag("data-accordion-item", true)
            .set("data-state", state.data_state())
            .flag("data-disabled", self.is_disabled()?)
            .flag("data-read-only", self.accordion.is_read_only());
        Ok(attrs)
    }

    /// The item's trigger.
    pub fn button(&self) -> AccordionButton<'_> {
        AccordionButton { item: self }
    }

    /// The item's collapsible region.
    pub fn panel(&self) -> AccordionPanel<'_> {
        AccordionPanel { item: self }
    }
}

impl Drop for AccordionItem {
    fn drop(&mut self) {
        // Already gone if the owner unregistered the id directly.
        let _ = self.accordion.unregister(self.id);
    }
}

impl fmt::Debug for AccordionItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccordionItem")
            .field("accordion", &self.accordion.id())
            .field("id", &self.id)
            .field("index", &self.index().ok())
            .finish()
    }
}

/// The trigger that toggles an item's panel.
#[derive(Debug, Clone, Copy)]
pub struct AccordionButton<'a> {
    item: &'a AccordionItem,
}

impl AccordionButton<'_> {
    /// Activate the trigger.
    ///
    /// A disabled item ignores the click. Otherwise the trigger takes focus and
    /// asks the accordion to toggle its panel.
    pub fn click(&self) -> Result<Transition> {
        let item = self.item;
        if item.is_disabled()? {
            tracing::trace!(target: targets::MODEL, id = ?item.id, "click on disabled item ignored");
            return Ok(Transition::Ignored);
        }
        item.accordion.focus_item(item.id)?;
        Ok(item.accordion.select_panel(item.index()?))
    }

    /// Handle a navigation key pressed while the trigger has focus.
    ///
    /// Returns the item that received focus.
    pub fn key_down(&self, key: NavKey) -> Result<Option<ItemId>> {
        self.item.accordion.focus_next(self.item.id, key)
    }

    /// Attributes of the trigger element.
    pub fn attributes(&self) -> Result<Attributes> {
        let item = self.item;
        let disabled = item.is_disabled()?;
        let state = item.state()?;
        let mut attrs = Attributes::new();
        attrs
            .set("aria-controls", item.panel_id()?)
            .set("aria-expanded", state.is_open().to_string())
            .flag("data-accordion-button", true)
            .set("data-state", state.data_state())
            .flag("data-disabled", disabled)
            .flag("data-read-only", item.accordion.is_read_only())
            .flag("disabled", disabled)
            .set("id", item.button_id()?);
        if disabled {
            attrs.set("tabindex", "-1");
        }
        Ok(attrs)
    }
}

/// The collapsible region of an item.
#[derive(Debug, Clone, Copy)]
pub struct AccordionPanel<'a> {
    item: &'a AccordionItem,
}

impl AccordionPanel<'_> {
    /// Whether the region is hidden.
    pub fn is_hidden(&self) -> Result<bool> {
        Ok(!self.item.is_expanded()?)
    }

    /// Attributes of the region element.
    pub fn attributes(&self) -> Result<Attributes> {
        let item = self.item;
        let state = item.state()?;
        let mut attrs = Attributes::new();
        attrs
            .flag("hidden", !state.is_open())
            .set("role", "region")
            .set("aria-labelledby", item.button_id()?)
            .flag("data-accordion-panel", true)
            .set("data-state", state.data_state())
            .flag("data-disabled", item.is_disabled()?)
            .set("id", item.panel_id()?);
        Ok(attrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descendants::ItemOptions;

    fn setup() -> (Arc<Accordion>, Vec<AccordionItem>) {
        let accordion = Accordion::builder().id("acc").build();
        let items = (0..3)
            .map(|_| accordion.add_item(ItemOptions::new()))
            .collect();
        (accordion, items)
    }

    #[test]
    fn test_drop_unregisters() {
        let (accordion, mut items) = setup();
        assert_eq!(accordion.item_count(), 3);
        items.remove(0);
        assert_eq!(accordion.item_count(), 2);
        assert_eq!(items[0].index().unwrap(), 0);
    }

    #[test]
    fn test_ids() {
        let (_accordion, items) = setup();
        assert_eq!(items[2].item_id().unwrap(), "acc--2");
        assert_eq!(items[2].button_id().unwrap(), "button--acc--2");
        assert_eq!(items[2].panel_id().unwrap(), "panel--acc--2");
    }

    #[test]
    fn test_disabled_click_is_ignored() {
        let (accordion, items) = setup();
        items[1].set_disabled(true).unwrap();
        assert_eq!(items[1].button().click().unwrap(), Transition::Ignored);
        assert!(accordion.is_open(0));
    }

    #[test]
    fn test_button_and_panel_attributes() {
        let (_accordion, items) = setup();
        let button = items[0].button().attributes().unwrap();
        assert_eq!(button.get("aria-controls"), Some("panel--acc--0"));
        assert_eq!(button.get("aria-expanded"), Some("true"));
        assert_eq!(button.get("id"), Some("button--acc--0"));
        assert!(!button.has("tabindex"));

        let panel = items[1].panel().attributes().unwrap();
        assert!(panel.has("hidden"));
        assert_eq!(panel.get("role"), Some("region"));
        assert_eq!(panel.get("aria-labelledby"), Some("button--acc--1"));
        assert_eq!(panel.get("data-state"), Some("collapsed"));
    }
}
