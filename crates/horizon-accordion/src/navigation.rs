//! Keyboard navigation between accordion triggers.
//!
//! Given the ordered items of a container and the index of the item that
//! currently has focus, [`next_focus`] picks the item a navigation key moves
//! focus to. Disabled items are skipped. With `rotate`, moving past either end
//! wraps around.
//!
//! # Key mapping
//!
//! | Key | Orientation | Target |
//! |---|---|---|
//! | `ArrowDown` / `ArrowUp` | vertical, both | next / previous |
//! | `ArrowRight` / `ArrowLeft` | horizontal, both | next / previous (mirrored in RTL) |
//! | `Home`, `PageUp` | any | first |
//! | `End`, `PageDown` | any | last |

use horizon_accordion_core::logging::targets;

/// A navigation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,
}

/// Which arrow keys move focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
    Both,
}

/// Reading direction, used to mirror horizontal arrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Navigation behaviour of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationOptions {
    pub orientation: Orientation,
    pub direction: TextDirection,
    /// Wrap from the last item to the first and back.
    pub rotate: bool,
}

impl Default for NavigationOptions {
    /// Vertical, left-to-right, rotating: the accordion's own behaviour.
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            direction: TextDirection::Ltr,
            rotate: true,
        }
    }
}

/// An item focus can move between.
pub trait Navigable {
    /// The item's index.
    fn nav_index(&self) -> usize;
    /// Whether focus skips this item.
    fn is_disabled(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Next,
    Previous,
    First,
    Last,
}

fn step_for(key: NavKey, options: &NavigationOptions) -> Option<Step> {
    let vertical = matches!(options.orientation, Orientation::Vertical | Orientation::Both);
    let horizontal = matches!(options.orientation, Orientation::Horizontal | Orientation::Both);
    let rtl = options.direction == TextDirection::Rtl;

    match key {
        NavKey::ArrowDown if vertical => Some(Step::Next),
        NavKey::ArrowUp if vertical => Some(Step::Previous),
        NavKey::ArrowRight if horizontal => Some(if rtl { Step::Previous } else { Step::Next }),
        NavKey::ArrowLeft if horizontal => Some(if rtl { Step::Next } else { Step::Previous }),
        NavKey::Home | NavKey::PageUp => Some(Step::First),
        NavKey::End | NavKey::PageDown => Some(Step::Last),
        _ => None,
    }
}

/// Pick the item `key` moves focus to from the item at `current_index`.
///
/// Returns `None` when the key does not apply to the orientation or when no
/// item is enabled. Without `rotate`, stepping past an end keeps focus on the
/// current item. If the current item is disabled or unknown, stepping forward
/// lands on the first enabled item and stepping back on the last.
pub fn next_focus<'a, T: Navigable>(
    items: &'a [T],
    current_index: usize,
    key: NavKey,
    options: &NavigationOptions,
) -> Option<&'a T> {
    let step = step_for(key, options)?;
    let enabled: Vec<&T> = items.iter().filter(|item| !item.is_disabled()).collect();
    let first = *enabled.first()?;
    let last = *enabled.last()?;
    let current = enabled
        .iter()
        .position(|item| item.nav_index() == current_index);

    let target = match (step, current) {
        (Step::First, _) => first,
        (Step::Last, _) => last,
        (Step::Next, None) => first,
        (Step::Previous, None) => last,
        (Step::Next, Some(pos)) => match enabled.get(pos + 1) {
            Some(item) => *item,
            None if options.rotate => first,
            None => enabled[pos],
        },
        (Step::Previous, Some(pos)) => match pos.checked_sub(1) {
            Some(prev) => enabled[prev],
            None if options.rotate => last,
            None => enabled[pos],
        },
    };

    tracing::trace!(
        target: targets::NAVIGATION,
        ?key,
        from = current_index,
        to = target.nav_index(),
        "keyboard navigation"
    );
    Some(target)
}
