//! Developer diagnostics for accordion misuse.
//!
//! None of these stop the accordion from working. Each one is logged at
//! `warn` level under [`targets::DIAGNOSTICS`] and recorded on the model so
//! tests and tooling can inspect it.

use horizon_accordion_core::logging::targets;
use parking_lot::Mutex;

/// A contract violation detected while configuring or driving an accordion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    #[error(
        "Accordion is changing from controlled to uncontrolled. Decide between a controlled \
         or uncontrolled accordion for the lifetime of the component."
    )]
    ControlledToUncontrolled,

    #[error(
        "Accordion is changing from uncontrolled to controlled. Decide between a controlled \
         or uncontrolled accordion for the lifetime of the component."
    )]
    UncontrolledToControlled,

    #[error("The `collapsible` flag has no effect when the accordion is controlled.")]
    CollapsibleWhileControlled,

    #[error("The `multiple` flag has no effect when the accordion is controlled.")]
    MultipleWhileControlled,

    #[error(
        "A controlled index was provided without an `on_change` handler or `read_only`. \
         The accordion will not respond to user input."
    )]
    IndexWithoutOnChange,

    #[error(
        "Both a controlled index and a default index were provided. The default index is \
         ignored."
    )]
    IndexWithDefaultIndex,

    #[error(
        "A list of default indices was provided but `multiple` is not set. Only the first \
         index is used."
    )]
    DefaultListWithoutMultiple,

    #[error("More than one item claims index {index}.")]
    DuplicateItemIndex {
        /// The contested index.
        index: usize,
    },
}

/// Collects diagnostics and forwards them to `tracing`.
#[derive(Debug, Default)]
pub struct DiagnosticLog {
    entries: Mutex<Vec<Diagnostic>>,
}

impl DiagnosticLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic and emit it as a warning.
    pub fn report(&self, diagnostic: Diagnostic) {
        tracing::warn!(target: targets::DIAGNOSTICS, "{diagnostic}");
        self.entries.lock().push(diagnostic);
    }

    /// All diagnostics reported so far, oldest first.
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.lock().clone()
    }

    /// Whether `diagnostic` has been reported.
    pub fn contains(&self, diagnostic: &Diagnostic) -> bool {
        self.entries.lock().contains(diagnostic)
    }

    /// Forget all recorded diagnostics.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}
