//! Element id generation.
//!
//! Buttons and panels reference each other through ids (`aria-controls`,
//! `aria-labelledby`), so every part derives its id from the container id and
//! the item index.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Generate a process-unique numeric id.
pub fn auto_id() -> String {
    NEXT_ID.fetch_add(1, Ordering::Relaxed).to_string()
}

/// Join the non-empty parts with `--`.
///
/// ```
/// use horizon_accordion::ids::make_id;
///
/// assert_eq!(make_id(["panel", "faq--2"]), "panel--faq--2");
/// assert_eq!(make_id(["", "faq"]), "faq");
/// ```
pub fn make_id<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts
        .into_iter()
        .map(|part| part.as_ref().to_owned())
        .filter(|part| !part.is_empty())
        .collect::<Vec<String>>()
        .join("--")
}

/// Id of the item at `index` inside accordion `accordion_id`.
pub fn item_id(accordion_id: &str, index: usize) -> String {
    make_id([accordion_id, &index.to_string()])
}

/// Id of an item's panel.
pub fn panel_id(item_id: &str) -> String {
    make_id(["panel", item_id])
}

/// Id of an item's trigger button.
pub fn button_id(item_id: &str) -> String {
    make_id(["button", item_id])
}
