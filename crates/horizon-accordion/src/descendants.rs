//! Explicit registration of accordion items.
//!
//! The presentation layer registers each item in display order. An item's
//! index is its explicit override when one was supplied, otherwise its
//! current position in the registry. Positions are recomputed after a
//! removal, so position-derived indices always stay dense and unique.

use std::fmt;
use std::sync::Arc;

use horizon_accordion_core::logging::targets;
use slotmap::{new_key_type, SlotMap};

use crate::navigation::Navigable;

new_key_type! {
    /// A stable handle for a registered accordion item.
    ///
    /// Unlike the item's index, the id never changes while the item is
    /// registered.
    pub struct ItemId;
}

/// Something the accordion can move keyboard focus to.
///
/// The accordion never inspects the target; it only calls [`focus`](Self::focus)
/// when a trigger is clicked or keyboard navigation lands on the item.
pub trait FocusTarget: Send + Sync {
    /// Move keyboard focus to this element.
    fn focus(&self);
}

impl<F> FocusTarget for F
where
    F: Fn() + Send + Sync,
{
    fn focus(&self) {
        self()
    }
}

/// Registration options for an item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemOptions {
    /// Explicit index, overriding the registration position.
    pub index: Option<usize>,
    /// Whether the item ignores user interaction.
    pub disabled: bool,
}

impl ItemOptions {
    /// Options for an enabled item indexed by position.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the item to an explicit index.
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Set whether the item is disabled.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

struct Entry {
    explicit_index: Option<usize>,
    disabled: bool,
    focus: Option<Arc<dyn FocusTarget>>,
}

/// A read-only snapshot of one registered item.
#[derive(Clone)]
pub struct Descendant {
    /// The item's stable id.
    pub id: ItemId,
    /// The item's effective index.
    pub index: usize,
    /// Whether the item is disabled.
    pub disabled: bool,
    focus: Option<Arc<dyn FocusTarget>>,
}

impl Descendant {
    /// Move focus to this item's element, if it has one.
    ///
    /// Returns `false` when no focus target is attached.
    pub fn focus(&self) -> bool {
        match &self.focus {
            Some(target) => {
                target.focus();
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for Descendant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descendant")
            .field("id", &self.id)
            .field("index", &self.index)
            .field("disabled", &self.disabled)
            .field("focusable", &self.focus.is_some())
            .finish()
    }
}

impl Navigable for Descendant {
    fn nav_index(&self) -> usize {
        self.index
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// Insertion-ordered registry of accordion items.
#[derive(Default)]
pub struct DescendantRegistry {
    entries: SlotMap<ItemId, Entry>,
    order: Vec<ItemId>,
}

impl DescendantRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an item after all existing ones.
    pub fn register(&mut self, options: ItemOptions) -> ItemId {
        self.insert(self.order.len(), options)
    }

    /// Register an item at `position` in display order.
    ///
    /// Positions past the end append.
    pub fn insert(&mut self, position: usize, options: ItemOptions) -> ItemId {
        let id = self.entries.insert(Entry {
            explicit_index: options.index,
            disabled: options.disabled,
            focus: None,
        });
        let position = position.min(self.order.len());
        self.order.insert(position, id);
        tracing::trace!(
            target: targets::DESCENDANTS,
            ?id,
            position,
            explicit_index = ?options.index,
            "registered item"
        );
        id
    }

    /// Remove an item. Returns `false` if it was not registered.
    pub fn unregister(&mut self, id: ItemId) -> bool {
        if self.entries.remove(id).is_none() {
            return false;
        }
        self.order.retain(|&other| other != id);
        tracing::trace!(target: targets::DESCENDANTS, ?id, "unregistered item");
        true
    }

    /// Whether `id` is registered.
    pub fn contains(&self, id: ItemId) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of registered items.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no items are registered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Display position of `id`.
    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.order.iter().position(|&other| other == id)
    }

    /// Effective index of `id`.
    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        let entry = self.entries.get(id)?;
        entry.explicit_index.or_else(|| self.position_of(id))
    }

    /// Whether `id` is disabled. Unknown items report `None`.
    pub fn is_disabled(&self, id: ItemId) -> Option<bool> {
        self.entries.get(id).map(|entry| entry.disabled)
    }

    /// Enable or disable an item. Returns `false` if it is not registered.
    pub fn set_disabled(&mut self, id: ItemId, disabled: bool) -> bool {
        match self.entries.get_mut(id) {
            Some(entry) => {
                entry.disabled = disabled;
                true
            }
            None => false,
        }
    }

    /// Attach the element focus moves to. Returns `false` if `id` is unknown.
    pub fn set_focus_target(&mut self, id: ItemId, target: Arc<dyn FocusTarget>) -> bool {
        match self.entries.get_mut(id) {
            Some(entry) => {
                entry.focus = Some(target);
                true
            }
            None => false,
        }
    }

    /// Snapshot of a single item.
    pub fn get(&self, id: ItemId) -> Option<Descendant> {
        let position = self.position_of(id)?;
        self.entries
            .get(id)
            .map(|entry| Self::snapshot(id, position, entry))
    }

    /// Snapshot of every item in display order.
    pub fn descendants(&self) -> Vec<Descendant> {
        self.order
            .iter()
            .enumerate()
            .filter_map(|(position, &id)| {
                self.entries
                    .get(id)
                    .map(|entry| Self::snapshot(id, position, entry))
            })
            .collect()
    }

    /// Number of items whose effective index is `index`.
    pub fn count_with_index(&self, index: usize) -> usize {
        self.descendants()
            .iter()
            .filter(|descendant| descendant.index == index)
            .count()
    }

    fn snapshot(id: ItemId, position: usize, entry: &Entry) -> Descendant {
        Descendant {
            id,
            index: entry.explicit_index.unwrap_or(position),
            disabled: entry.disabled,
            focus: entry.focus.clone(),
        }
    }
}

impl fmt::Debug for DescendantRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.descendants()).finish()
    }
}
