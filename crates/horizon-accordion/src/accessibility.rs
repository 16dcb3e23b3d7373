//! AccessKit nodes for accordion parts.
//!
//! The host assigns a [`NodeId`] to each trigger and panel; these builders
//! fill in the roles, relationships and state so that screen readers announce
//! a trigger as an expandable button controlling a labelled region.

use accesskit::{Action, Node, NodeId, Role};

use crate::error::Result;
use crate::parts::AccordionItem;

impl AccordionItem {
    /// Accessibility node for the item's trigger.
    ///
    /// `panel` is the node id of the region the trigger controls.
    pub fn button_node(&self, panel: NodeId) -> Result<Node> {
        let mut node = Node::new(Role::Button);
        node.set_expanded(self.is_expanded()?);
        node.set_controls(vec![panel]);
        if self.is_disabled()? {
            node.set_disabled();
        } else {
            node.add_action(Action::Click);
            node.add_action(Action::Focus);
        }
        if self.accordion().is_read_only() {
            node.set_read_only();
        }
        Ok(node)
    }

    /// Accessibility node for the item's panel.
    ///
    /// `button` is the node id of the trigger that labels the region.
    pub fn panel_node(&self, button: NodeId) -> Result<Node> {
        let mut node = Node::new(Role::Region);
        node.set_labelled_by(vec![button]);
        if !self.is_expanded()? {
            node.set_hidden();
        }
        Ok(node)
    }
}
