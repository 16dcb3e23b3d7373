//! The accordion container and its open-panel selection model.
//!
//! An [`Accordion`] owns the set of open panels, the registry of its items and
//! the signals that announce selection requests and state changes. Items,
//! buttons and panels hold an `Arc<Accordion>` handle and query it directly.
//!
//! # Controlled and uncontrolled use
//!
//! An uncontrolled accordion owns its selection and updates it whenever
//! [`Accordion::select_panel`] is called. A controlled accordion is built with
//! an explicit [`index`](AccordionBuilder::index); it never changes its own
//! selection and only proposes new values through
//! [`change_requested`](Accordion::change_requested). The owner answers by
//! calling [`Accordion::set_controlled_index`].
//!
//! # Example
//!
//! ```
//! use horizon_accordion::{Accordion, OpenPanels, Transition};
//!
//! let accordion = Accordion::builder().collapsible(true).default_index(2).build();
//! assert_eq!(accordion.open_panels(), OpenPanels::from(2));
//!
//! assert_eq!(accordion.select_panel(2), Transition::Applied(OpenPanels::NONE));
//! assert_eq!(accordion.select_panel(2), Transition::Applied(OpenPanels::from(2)));
//! ```

use std::fmt;
use std::sync::Arc;

use horizon_accordion_core::logging::targets;
use horizon_accordion_core::{DebugNode, Property, ReadOnlyProperty, Signal, TreeFormatter};
use parking_lot::RwLock;

use crate::attributes::Attributes;
use crate::config::{AccordionConfig, DefaultIndex};
use crate::context::{AccordionContext, ItemContext};
use crate::descendants::{Descendant, DescendantRegistry, FocusTarget, ItemId, ItemOptions};
use crate::diagnostics::{Diagnostic, DiagnosticLog};
use crate::error::{AccordionError, Result};
use crate::ids;
use crate::navigation::{self, NavKey, NavigationOptions};
use crate::parts::AccordionItem;
use crate::selection::{self, ItemState, OpenPanels, Toggle};

/// Payload of [`Accordion::change_requested`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelChange {
    /// The panel the user asked to toggle.
    pub index: usize,
    /// The selection that results from honouring the request.
    pub open_panels: OpenPanels,
}

/// Outcome of [`Accordion::select_panel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The accordion updated its own selection to this value.
    Applied(OpenPanels),
    /// The request was valid but left the selection as it was.
    Unchanged,
    /// The accordion is controlled; the owner decides whether to apply this value.
    Proposed(OpenPanels),
    /// The request was dropped: the accordion is read-only or the item disabled.
    Ignored,
}

type ChangeHandler = Box<dyn Fn(&PanelChange) + Send + Sync>;

/// A toggle computed against the selection at the time of the request.
struct Request {
    previous: OpenPanels,
    candidate: OpenPanels,
    refused: bool,
}

impl Request {
    fn new(current: &OpenPanels, index: usize, collapsible: bool) -> Self {
        let toggle = selection::toggle(current, index, collapsible);
        let refused = toggle == Toggle::Refused;
        Self {
            previous: current.clone(),
            candidate: toggle.resolve(current),
            refused,
        }
    }
}

/// Builder for [`Accordion`].
#[derive(Default)]
pub struct AccordionBuilder {
    config: AccordionConfig,
    index: Option<OpenPanels>,
    on_change: Option<ChangeHandler>,
    navigation: NavigationOptions,
}

impl AccordionBuilder {
    /// Start from the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: AccordionConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Set the container id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.config.id = Some(id.into());
        self
    }

    /// Allow several panels to be open at once.
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.config.multiple = multiple;
        self
    }

    /// Allow the last open panel to be closed.
    pub fn collapsible(mut self, collapsible: bool) -> Self {
        self.config.collapsible = collapsible;
        self
    }

    /// Ignore every selection request.
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.config.read_only = read_only;
        self
    }

    /// Initial selection of an uncontrolled accordion.
    pub fn default_index(mut self, default_index: impl Into<DefaultIndex>) -> Self {
        self.config.default_index = Some(default_index.into());
        self
    }

    /// Make the accordion controlled, starting from `index`.
    pub fn index(mut self, index: impl Into<OpenPanels>) -> Self {
        self.index = Some(index.into());
        self
    }

    /// Handler invoked with every selection request.
    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(&PanelChange) + Send + Sync + 'static,
    {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// Keyboard navigation behaviour between triggers.
    pub fn navigation(mut self, navigation: NavigationOptions) -> Self {
        self.navigation = navigation;
        self
    }

    /// Build the accordion, reporting any contract diagnostics.
    pub fn build(self) -> Arc<Accordion> {
        let Self {
            config,
            index,
            on_change,
            navigation,
        } = self;

        let diagnostics = DiagnosticLog::new();
        let controlled = index.is_some();
        if controlled {
            if config.collapsible {
                diagnostics.report(Diagnostic::CollapsibleWhileControlled);
            }
            if config.multiple {
                diagnostics.report(Diagnostic::MultipleWhileControlled);
            }
            if on_change.is_none() && !config.read_only {
                diagnostics.report(Diagnostic::IndexWithoutOnChange);
            }
            if config.default_index.is_some() {
                diagnostics.report(Diagnostic::IndexWithDefaultIndex);
            }
        }
        if !config.multiple && matches!(config.default_index, Some(DefaultIndex::Many(_))) {
            diagnostics.report(Diagnostic::DefaultListWithoutMultiple);
        }

        let initial = index.unwrap_or_else(|| config.initial_open_panels());
        let id = config.id.clone().unwrap_or_else(ids::auto_id);

        tracing::debug!(
            target: targets::MODEL,
            accordion = %id,
            controlled,
            multiple = config.multiple,
            collapsible = config.collapsible,
            read_only = config.read_only,
            initial = %initial,
            "created accordion"
        );

        let accordion = Accordion {
            id,
            multiple: config.multiple,
            collapsible: config.collapsible,
            read_only: config.read_only,
            controlled,
            navigation,
            state: Property::new(initial),
            descendants: RwLock::new(DescendantRegistry::new()),
            diagnostics,
            change_requested: Signal::new(),
            open_panels_changed: Signal::new(),
        };
        if let Some(handler) = on_change {
            accordion.change_requested.connect(move |change| handler(change));
        }
        Arc::new(accordion)
    }
}

/// An accordion container.
///
/// # Signals
///
/// - `change_requested(PanelChange)`: Emitted for every selection request that
///   is not ignored, in both controlled and uncontrolled mode
/// - `open_panels_changed(OpenPanels)`: Emitted after the active selection changes
pub struct Accordion {
    id: String,
    multiple: bool,
    collapsible: bool,
    read_only: bool,
    /// Fixed at construction.
    controlled: bool,
    navigation: NavigationOptions,
    /// Internal selection when uncontrolled, last supplied value when controlled.
    state: Property<OpenPanels>,
    descendants: RwLock<DescendantRegistry>,
    diagnostics: DiagnosticLog,

    /// Signal emitted when a trigger asks for a panel to be toggled.
    pub change_requested: Signal<PanelChange>,

    /// Signal emitted when the active selection changes.
    pub open_panels_changed: Signal<OpenPanels>,
}

impl Accordion {
    /// Start building an accordion.
    pub fn builder() -> AccordionBuilder {
        AccordionBuilder::new()
    }

    /// Build an uncontrolled accordion from a configuration.
    pub fn new(config: AccordionConfig) -> Arc<Self> {
        AccordionBuilder::from_config(config).build()
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// The container id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether several panels may be open at once.
    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    /// Whether the last open panel may be closed.
    pub fn is_collapsible(&self) -> bool {
        self.collapsible
    }

    /// Whether selection requests are ignored.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Whether the selection is owned by the caller.
    pub fn is_controlled(&self) -> bool {
        self.controlled
    }

    /// Diagnostics reported so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.entries()
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Request that panel `index` be toggled.
    ///
    /// The index is not validated; triggers of disabled items are expected
    /// not to call this.
    pub fn select_panel(&self, index: usize) -> Transition {
        if self.read_only {
            tracing::trace!(target: targets::MODEL, accordion = %self.id, index, "read-only, ignoring selection");
            return Transition::Ignored;
        }

        if self.controlled {
            let request = self.state.with(|current| Request::new(current, index, self.collapsible));
            self.announce(index, &request);
            return Transition::Proposed(request.candidate);
        }

        // Read and write under one lock so concurrent requests never drop each other.
        let mut request = None;
        let applied = self.state.update(|current| {
            let next = Request::new(current, index, self.collapsible);
            let candidate = next.candidate.clone();
            request = Some(next);
            candidate
        });
        if let Some(request) = &request {
            self.announce(index, request);
        }

        match applied {
            Some(open) => {
                self.open_panels_changed.emit(open.clone());
                Transition::Applied(open)
            }
            None => Transition::Unchanged,
        }
    }

    fn announce(&self, index: usize, request: &Request) {
        tracing::debug!(
            target: targets::MODEL,
            accordion = %self.id,
            index,
            from = %request.previous,
            to = %request.candidate,
            refused = request.refused,
            controlled = self.controlled,
            "panel selection requested"
        );

        self.change_requested.emit(PanelChange {
            index,
            open_panels: request.candidate.clone(),
        });
    }

    /// Supply the caller-owned selection of a controlled accordion.
    ///
    /// Passing `None` to a controlled accordion, or `Some` to an uncontrolled
    /// one, switches modes; that is reported as a diagnostic and otherwise
    /// ignored, so the accordion keeps the mode it was built with.
    pub fn set_controlled_index(&self, index: Option<OpenPanels>) {
        match (self.controlled, index) {
            (true, Some(index)) => {
                if self.state.set(index.clone()) {
                    tracing::debug!(target: targets::MODEL, accordion = %self.id, open = %index, "controlled selection updated");
                    self.open_panels_changed.emit(index);
                }
            }
            (true, None) => self.diagnostics.report(Diagnostic::ControlledToUncontrolled),
            (false, Some(_)) => self.diagnostics.report(Diagnostic::UncontrolledToControlled),
            (false, None) => {}
        }
    }

    /// The active selection.
    pub fn open_panels(&self) -> OpenPanels {
        self.state.get()
    }

    /// Read-only view of the active selection.
    pub fn open_panels_property(&self) -> ReadOnlyProperty<'_, OpenPanels> {
        ReadOnlyProperty::new(&self.state)
    }

    /// Derived state of the item at `index`.
    pub fn item_state(&self, index: usize) -> ItemState {
        self.state.with(|open| ItemState::of(open, index))
    }

    /// Whether the panel at `index` is open.
    pub fn is_open(&self, index: usize) -> bool {
        self.item_state(index).is_open()
    }

    /// Snapshot for descendants of the container.
    pub fn context(&self) -> AccordionContext {
        self.state.with(|open| AccordionContext::new(&self.id, open))
    }

    /// Attributes of the container element.
    pub fn attributes(&self) -> Attributes {
        let mut attrs = Attributes::new();
        attrs
            .set("id", self.id.clone())
            .flag("data-accordion", true)
            .flag("data-read-only", self.read_only);
        attrs
    }

    // =========================================================================
    // Item Management
    // =========================================================================

    /// Register an item after the existing ones, returning its handle part.
    pub fn add_item(self: &Arc<Self>, options: ItemOptions) -> AccordionItem {
        let id = self.register(options);
        AccordionItem::new(Arc::clone(self), id)
    }

    /// Register an item at `position` in display order.
    pub fn insert_item(self: &Arc<Self>, position: usize, options: ItemOptions) -> AccordionItem {
        let id = self.insert(position, options);
        AccordionItem::new(Arc::clone(self), id)
    }

    /// Register an item after the existing ones.
    pub fn register(&self, options: ItemOptions) -> ItemId {
        self.add_descendant(|descendants| descendants.register(options))
    }

    /// Register an item at `position` in display order.
    pub fn insert(&self, position: usize, options: ItemOptions) -> ItemId {
        self.add_descendant(|descendants| descendants.insert(position, options))
    }

    fn add_descendant<F>(&self, add: F) -> ItemId
    where
        F: FnOnce(&mut DescendantRegistry) -> ItemId,
    {
        let mut descendants = self.descendants.write();
        let id = add(&mut *descendants);
        let duplicate = descendants
            .index_of(id)
            .filter(|&index| descendants.count_with_index(index) > 1);
        drop(descendants);

        if let Some(index) = duplicate {
            self.diagnostics.report(Diagnostic::DuplicateItemIndex { index });
        }
        id
    }

    /// Remove an item.
    pub fn unregister(&self, id: ItemId) -> Result<()> {
        if self.descendants.write().unregister(id) {
            Ok(())
        } else {
            Err(AccordionError::UnknownItem(id))
        }
    }

    /// Number of registered items.
    pub fn item_count(&self) -> usize {
        self.descendants.read().len()
    }

    /// Effective index of an item.
    pub fn index_of(&self, id: ItemId) -> Result<usize> {
        self.descendants
            .read()
            .index_of(id)
            .ok_or(AccordionError::UnknownItem(id))
    }

    /// Snapshot for descendants of an item.
    pub fn item_context(&self, id: ItemId) -> Result<ItemContext> {
        let index = self.index_of(id)?;
        Ok(ItemContext::new(index, self.item_state(index)))
    }

    /// Whether an item is disabled.
    pub fn is_item_disabled(&self, id: ItemId) -> Result<bool> {
        self.descendants
            .read()
            .is_disabled(id)
            .ok_or(AccordionError::UnknownItem(id))
    }

    /// Enable or disable an item.
    pub fn set_item_disabled(&self, id: ItemId, disabled: bool) -> Result<()> {
        if self.descendants.write().set_disabled(id, disabled) {
            Ok(())
        } else {
            Err(AccordionError::UnknownItem(id))
        }
    }

    /// Attach the element an item's trigger focuses.
    pub fn set_focus_target(&self, id: ItemId, target: Arc<dyn FocusTarget>) -> Result<()> {
        if self.descendants.write().set_focus_target(id, target) {
            Ok(())
        } else {
            Err(AccordionError::UnknownItem(id))
        }
    }

    /// Snapshot of every item in display order.
    pub fn descendants(&self) -> Vec<Descendant> {
        self.descendants.read().descendants()
    }

    /// Focus the element of `id`. Returns `false` if it has no focus target.
    pub fn focus_item(&self, id: ItemId) -> Result<bool> {
        let descendant = self
            .descendants
            .read()
            .get(id)
            .ok_or(AccordionError::UnknownItem(id))?;
        Ok(descendant.focus())
    }

    /// Move focus from item `from` according to a navigation key.
    ///
    /// Returns the item that received focus, or `None` if the key does not
    /// move focus.
    pub fn focus_next(&self, from: ItemId, key: NavKey) -> Result<Option<ItemId>> {
        let current = self.index_of(from)?;
        let items = self.descendants();
        let Some(target) = navigation::next_focus(&items, current, key, &self.navigation) else {
            return Ok(None);
        };
        target.focus();
        Ok(Some(target.id))
    }

    // =========================================================================
    // Debugging
    // =========================================================================

    /// Tree describing the accordion and its items.
    pub fn debug_tree(&self) -> DebugNode {
        let mode = match (self.controlled, self.multiple) {
            (true, _) => "controlled",
            (false, true) => "multiple",
            (false, false) => "single",
        };
        let mut root = DebugNode::new(format!("Accordion {}", self.id))
            .with_detail(format!("{mode}, open {}", self.open_panels()));

        for descendant in self.descendants() {
            let mut detail = self.item_state(descendant.index).to_string();
            if descendant.disabled {
                detail.push_str(", disabled");
            }
            root.push(DebugNode::new(format!("item {}", descendant.index)).with_detail(detail));
        }
        root
    }

    /// Render [`debug_tree`](Self::debug_tree) as text.
    pub fn dump(&self) -> String {
        TreeFormatter::default().format(&self.debug_tree())
    }
}

impl fmt::Debug for Accordion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accordion")
            .field("id", &self.id)
            .field("multiple", &self.multiple)
            .field("collapsible", &self.collapsible)
            .field("read_only", &self.read_only)
            .field("controlled", &self.controlled)
            .field("open_panels", &self.open_panels())
            .field("items", &self.item_count())
            .finish()
    }
}

// Ensure Accordion is Send + Sync
static_assertions::assert_impl_all!(Accordion: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn test_default_single_mode() {
        let accordion = Accordion::new(AccordionConfig::new());
        assert_eq!(accordion.open_panels(), OpenPanels::from(0));
        assert!(accordion.is_open(0));
        assert!(!accordion.is_controlled());

        assert_eq!(accordion.select_panel(3), Transition::Applied(OpenPanels::from(3)));
        // Re-selecting the open panel of a non-collapsible accordion keeps it open
        assert_eq!(accordion.select_panel(3), Transition::Unchanged);
        assert_eq!(accordion.item_state(3), ItemState::Open);
        assert_eq!(accordion.item_state(0), ItemState::Collapsed);
    }

    #[test]
    fn test_change_requested_fires_for_refused_toggle() {
        let changes = Arc::new(Mutex::new(Vec::new()));
        let changes_clone = changes.clone();
        let accordion = Accordion::builder()
            .multiple(true)
            .on_change(move |change| changes_clone.lock().push(change.clone()))
            .build();

        assert_eq!(accordion.select_panel(0), Transition::Unchanged);
        assert_eq!(
            *changes.lock(),
            vec![PanelChange {
                index: 0,
                open_panels: OpenPanels::from(vec![0]),
            }]
        );
    }

    #[test]
    fn test_open_panels_changed_only_on_change() {
        let accordion = Accordion::builder().multiple(true).build();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        accordion
            .open_panels_changed
            .connect(move |open| seen_clone.lock().push(open.clone()));

        accordion.select_panel(2);
        accordion.select_panel(2);
        accordion.select_panel(0);

        assert_eq!(
            *seen.lock(),
            vec![OpenPanels::from(vec![0, 2]), OpenPanels::from(vec![0])]
        );
    }

    #[test]
    fn test_read_only_ignores_requests() {
        let accordion = Accordion::builder().read_only(true).default_index(1).build();
        let fired = Arc::new(Mutex::new(0));
        let fired_clone = fired.clone();
        accordion.change_requested.connect(move |_| *fired_clone.lock() += 1);

        assert_eq!(accordion.select_panel(0), Transition::Ignored);
        assert_eq!(accordion.open_panels(), OpenPanels::from(1));
        assert_eq!(*fired.lock(), 0);
    }

    #[test]
    fn test_construction_diagnostics() {
        let accordion = Accordion::builder()
            .index(1)
            .collapsible(true)
            .multiple(true)
            .default_index(0)
            .build();
        let diagnostics = accordion.diagnostics();
        assert!(diagnostics.contains(&Diagnostic::CollapsibleWhileControlled));
        assert!(diagnostics.contains(&Diagnostic::MultipleWhileControlled));
        assert!(diagnostics.contains(&Diagnostic::IndexWithoutOnChange));
        assert!(diagnostics.contains(&Diagnostic::IndexWithDefaultIndex));

        let accordion = Accordion::builder().index(1).read_only(true).build();
        assert!(accordion.diagnostics().is_empty());

        let accordion = Accordion::builder().default_index(vec![2, 3]).build();
        assert_eq!(accordion.diagnostics(), vec![Diagnostic::DefaultListWithoutMultiple]);
        assert_eq!(accordion.open_panels(), OpenPanels::from(2));
    }

    #[test]
    fn test_mode_switch_is_diagnosed_and_ignored() {
        let uncontrolled = Accordion::builder().build();
        uncontrolled.set_controlled_index(Some(OpenPanels::from(4)));
        assert_eq!(uncontrolled.open_panels(), OpenPanels::from(0));
        assert_eq!(uncontrolled.diagnostics(), vec![Diagnostic::UncontrolledToControlled]);

        let controlled = Accordion::builder().index(2).on_change(|_| {}).build();
        controlled.set_controlled_index(None);
        assert_eq!(controlled.open_panels(), OpenPanels::from(2));
        assert_eq!(controlled.diagnostics(), vec![Diagnostic::ControlledToUncontrolled]);
    }

    #[test]
    fn test_registration_and_duplicates() {
        let accordion = Accordion::builder().id("acc").build();
        let a = accordion.register(ItemOptions::new());
        let b = accordion.register(ItemOptions::new().with_index(0));

        assert_eq!(accordion.index_of(a).unwrap(), 0);
        assert_eq!(accordion.index_of(b).unwrap(), 0);
        assert_eq!(
            accordion.diagnostics(),
            vec![Diagnostic::DuplicateItemIndex { index: 0 }]
        );

        accordion.unregister(a).unwrap();
        assert!(matches!(
            accordion.unregister(a),
            Err(AccordionError::UnknownItem(id)) if id == a
        ));
        assert!(accordion.index_of(a).is_err());
        assert_eq!(accordion.item_count(), 1);
    }

    #[test]
    fn test_item_context_and_attributes() {
        let accordion = Accordion::builder().id("faq").read_only(true).build();
        let a = accordion.register(ItemOptions::new());
        let b = accordion.register(ItemOptions::new());

        assert_eq!(
            accordion.item_context(a).unwrap(),
            ItemContext { index: 0, is_expanded: true }
        );
        assert!(!accordion.item_context(b).unwrap().is_expanded);

        let attrs = accordion.attributes();
        assert_eq!(attrs.get("id"), Some("faq"));
        assert!(attrs.has("data-accordion"));
        assert!(attrs.has("data-read-only"));

        let ctx = accordion.context();
        assert_eq!(ctx.id, "faq");
        assert_eq!(ctx.open_panels, vec![0]);
    }

    #[test]
    fn test_generated_ids_differ() {
        let a = Accordion::builder().build();
        let b = Accordion::builder().build();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_dump() {
        let accordion = Accordion::builder().id("faq").multiple(true).build();
        accordion.register(ItemOptions::new());
        accordion.register(ItemOptions::new().with_disabled(true));

        let dump = accordion.dump();
        assert!(dump.starts_with("Accordion faq (multiple, open [0])"));
        assert!(dump.contains("item 0 (open)"));
        assert!(dump.contains("item 1 (collapsed, disabled)"));
    }
}
