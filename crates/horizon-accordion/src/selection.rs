//! Open-panel selection state and the toggle algorithm.
//!
//! [`OpenPanels`] records which panels of an accordion are expanded. In
//! exclusive mode it holds at most one index; in multiple mode it holds a
//! list of indices. [`toggle`] is the pure transition function used
//! by the model whenever a trigger asks for a panel to open or close.

use std::collections::HashSet;
use std::fmt;

/// Which panels are currently open.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OpenPanels {
    /// Exclusive mode. `None` means no panel is open.
    Single(Option<usize>),
    /// Multiple mode. Kept in the order supplied; [`toggle`] re-sorts it
    /// ascending whenever it adds an index. Values built through `From` carry
    /// no duplicates.
    Multiple(Vec<usize>),
}

impl OpenPanels {
    /// The "none open" state in exclusive mode.
    pub const NONE: OpenPanels = OpenPanels::Single(None);

    /// Raw value used for "no panel open" in exclusive mode.
    pub const SENTINEL: i64 = -1;

    /// An empty multiple-mode set.
    pub fn empty_set() -> Self {
        Self::Multiple(Vec::new())
    }

    /// Build a multiple-mode set, sorted ascending with duplicates removed.
    pub fn set<I: IntoIterator<Item = usize>>(indices: I) -> Self {
        let mut indices: Vec<usize> = indices.into_iter().collect();
        indices.sort_unstable();
        indices.dedup();
        Self::Multiple(indices)
    }

    /// Whether this is a multiple-mode value.
    pub fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    /// Whether `index` is open.
    pub fn contains(&self, index: usize) -> bool {
        match self {
            Self::Single(open) => *open == Some(index),
            Self::Multiple(open) => open.contains(&index),
        }
    }

    /// Whether no panel is open.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(open) => open.is_none(),
            Self::Multiple(open) => open.is_empty(),
        }
    }

    /// Number of open panels.
    pub fn len(&self) -> usize {
        match self {
            Self::Single(open) => usize::from(open.is_some()),
            Self::Multiple(open) => open.len(),
        }
    }

    /// The exclusive-mode index as a raw integer, with `-1` for none open.
    ///
    /// Returns `None` for multiple-mode values.
    pub fn raw_single(&self) -> Option<i64> {
        match self {
            Self::Single(Some(index)) => Some(*index as i64),
            Self::Single(None) => Some(Self::SENTINEL),
            Self::Multiple(_) => None,
        }
    }

    /// Open indices as a flat list, with the "none open" sentinel dropped.
    ///
    /// Multiple-mode values are returned in stored order.
    pub fn to_vec(&self) -> Vec<usize> {
        match self {
            Self::Single(open) => open.iter().copied().collect(),
            Self::Multiple(open) => open.clone(),
        }
    }
}

impl Default for OpenPanels {
    fn default() -> Self {
        Self::Single(Some(0))
    }
}

impl From<usize> for OpenPanels {
    fn from(index: usize) -> Self {
        Self::Single(Some(index))
    }
}

impl From<Option<usize>> for OpenPanels {
    fn from(index: Option<usize>) -> Self {
        Self::Single(index)
    }
}

/// Repeated indices are dropped; the first occurrence keeps its place.
impl From<Vec<usize>> for OpenPanels {
    fn from(indices: Vec<usize>) -> Self {
        let mut seen = HashSet::with_capacity(indices.len());
        Self::Multiple(indices.into_iter().filter(|&i| seen.insert(i)).collect())
    }
}

impl<const N: usize> From<[usize; N]> for OpenPanels {
    fn from(indices: [usize; N]) -> Self {
        Self::from(indices.to_vec())
    }
}

impl fmt::Display for OpenPanels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(Some(index)) => write!(f, "{index}"),
            Self::Single(None) => write!(f, "{}", Self::SENTINEL),
            Self::Multiple(indices) => {
                let parts: Vec<String> = indices.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", parts.join(", "))
            }
        }
    }
}

/// Derived state of a single accordion item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemState {
    /// The item's panel is visible.
    Open,
    /// The item's panel is hidden.
    Collapsed,
}

impl ItemState {
    /// Derive the state of `index` from the active selection.
    pub fn of(open: &OpenPanels, index: usize) -> Self {
        if open.contains(index) {
            Self::Open
        } else {
            Self::Collapsed
        }
    }

    /// Whether this is [`ItemState::Open`].
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Value for the `data-state` attribute.
    pub fn data_state(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Collapsed => "collapsed",
        }
    }
}

impl fmt::Display for ItemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.data_state())
    }
}

/// Result of applying [`toggle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggle {
    /// The selection moves to a new value.
    Changed(OpenPanels),
    /// Closing the last open panel of a non-collapsible multiple-mode
    /// accordion was refused. The selection stays as it was.
    Refused,
}

impl Toggle {
    /// The selection after this toggle, given the selection before it.
    pub fn resolve(self, previous: &OpenPanels) -> OpenPanels {
        match self {
            Self::Changed(next) => next,
            Self::Refused => previous.clone(),
        }
    }
}

/// Apply a user request to toggle panel `index`.
///
/// The shape of `current` decides the mode:
///
/// - Exclusive: selecting the open panel closes it when `collapsible`,
///   otherwise `index` becomes the only open panel.
/// - Multiple: an open panel is removed when another panel stays open or the
///   accordion is `collapsible`; a closed panel is inserted in ascending order.
pub fn toggle(current: &OpenPanels, index: usize, collapsible: bool) -> Toggle {
    match current {
        OpenPanels::Single(open) => {
            if *open == Some(index) && collapsible {
                Toggle::Changed(OpenPanels::NONE)
            } else {
                Toggle::Changed(OpenPanels::Single(Some(index)))
            }
        }
        OpenPanels::Multiple(open) => {
            if open.contains(&index) {
                if open.iter().any(|&other| other != index) || collapsible {
                    Toggle::Changed(OpenPanels::Multiple(
                        open.iter().copied().filter(|&i| i != index).collect(),
                    ))
                } else {
                    Toggle::Refused
                }
            } else {
                let mut next = open.clone();
                next.push(index);
                next.sort_unstable();
                Toggle::Changed(OpenPanels::Multiple(next))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_non_collapsible_always_opens() {
        for prior in [OpenPanels::NONE, OpenPanels::from(0), OpenPanels::from(3)] {
            for index in 0..5 {
                let next = toggle(&prior, index, false).resolve(&prior);
                assert_eq!(next, OpenPanels::from(index));
            }
        }
    }

    #[test]
    fn test_single_collapsible_closes_and_reopens() {
        let open = OpenPanels::from(2);
        let closed = toggle(&open, 2, true).resolve(&open);
        assert_eq!(closed, OpenPanels::NONE);
        assert_eq!(closed.raw_single(), Some(-1));

        let reopened = toggle(&closed, 2, true).resolve(&closed);
        assert_eq!(reopened, OpenPanels::from(2));
    }

    #[test]
    fn test_multiple_refuses_to_empty() {
        let open = OpenPanels::from(vec![4]);
        assert_eq!(toggle(&open, 4, false), Toggle::Refused);
        assert_eq!(toggle(&open, 4, false).resolve(&open), open);
    }

    #[test]
    fn test_multiple_collapsible_may_empty() {
        let open = OpenPanels::from(vec![4]);
        assert_eq!(
            toggle(&open, 4, true),
            Toggle::Changed(OpenPanels::empty_set())
        );
    }

    #[test]
    fn test_multiple_insert_sorts_numerically() {
        let open = OpenPanels::from(vec![2, 10]);
        let next = toggle(&open, 9, false).resolve(&open);
        assert_eq!(next, OpenPanels::from(vec![2, 9, 10]));

        let next = toggle(&next, 1, false).resolve(&next);
        assert_eq!(next.to_vec(), vec![1, 2, 9, 10]);
    }

    #[test]
    fn test_repeated_index_is_one_panel() {
        let open = OpenPanels::from(vec![1, 1]);
        assert_eq!(open, OpenPanels::Multiple(vec![1]));
        assert_eq!(toggle(&open, 1, false), Toggle::Refused);

        // Duplicates built without `From` still count as a single open panel.
        let raw = OpenPanels::Multiple(vec![1, 1]);
        assert_eq!(toggle(&raw, 1, false), Toggle::Refused);

        assert_eq!(OpenPanels::from([3, 0, 3, 2]).to_vec(), vec![3, 0, 2]);
    }

    #[test]
    fn test_multiple_remove_keeps_others() {
        let open = OpenPanels::from([0, 1]);
        let next = toggle(&open, 0, false).resolve(&open);
        assert_eq!(next, OpenPanels::from(vec![1]));
    }

    #[test]
    fn test_item_state_and_helpers() {
        let single = OpenPanels::from(1);
        assert_eq!(ItemState::of(&single, 1), ItemState::Open);
        assert_eq!(ItemState::of(&single, 0), ItemState::Collapsed);
        assert_eq!(ItemState::Open.data_state(), "open");
        assert_eq!(ItemState::Collapsed.to_string(), "collapsed");

        assert_eq!(OpenPanels::NONE.to_vec(), Vec::<usize>::new());
        assert!(OpenPanels::NONE.is_empty());
        assert_eq!(OpenPanels::set([3, 1, 3]), OpenPanels::from(vec![1, 3]));
        assert_eq!(OpenPanels::set([3, 1]).len(), 2);
        assert_eq!(OpenPanels::from(vec![1, 3]).raw_single(), None);
        assert_eq!(OpenPanels::from(vec![1, 3]).to_string(), "[1, 3]");
        assert_eq!(OpenPanels::NONE.to_string(), "-1");
    }
}
