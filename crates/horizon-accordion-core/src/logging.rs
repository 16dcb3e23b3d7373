//! Logging and debugging facilities for Horizon Accordion.
//!
//! This module provides:
//! - Target names for filtering the crate's `tracing` output by subsystem
//! - A small tree formatter for dumping model state while debugging
//!
//! # Tracing Integration
//!
//! Horizon Accordion uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_accordion=debug")
//!     .init();
//! ```
//!
//! # Debug Visualization
//!
//! ```
//! use horizon_accordion_core::logging::{DebugNode, TreeFormatter, TreeStyle};
//!
//! let tree = DebugNode::new("accordion")
//!     .child(DebugNode::new("item 0").with_detail("open"))
//!     .child(DebugNode::new("item 1").with_detail("collapsed"));
//!
//! let text = TreeFormatter::new(TreeStyle::Ascii).format(&tree);
//! assert!(text.contains("item 1 (collapsed)"));
//! ```

use std::fmt::Write as FmtWrite;

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "horizon_accordion_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_accordion_core::signal";
    /// Selection model target.
    pub const MODEL: &str = "horizon_accordion::model";
    /// Descendant registration target.
    pub const DESCENDANTS: &str = "horizon_accordion::descendants";
    /// Keyboard navigation target.
    pub const NAVIGATION: &str = "horizon_accordion::navigation";
    /// Contract diagnostics target.
    pub const DIAGNOSTICS: &str = "horizon_accordion::diagnostics";
    /// Configuration loading target.
    pub const CONFIG: &str = "horizon_accordion::config";
}

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
}

/// A node in a debug tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugNode {
    label: String,
    detail: Option<String>,
    children: Vec<DebugNode>,
}

impl DebugNode {
    /// Create a leaf node.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: None,
            children: Vec::new(),
        }
    }

    /// Attach a parenthesised detail string.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Append a child node.
    pub fn child(mut self, child: DebugNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child node in place.
    pub fn push(&mut self, child: DebugNode) {
        self.children.push(child);
    }

    /// The node label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The child nodes.
    pub fn children(&self) -> &[DebugNode] {
        &self.children
    }
}

/// Renders [`DebugNode`] trees as indented text.
#[derive(Debug, Clone, Default)]
pub struct TreeFormatter {
    style: TreeStyle,
}

impl TreeFormatter {
    /// Create a formatter with the given style.
    pub fn new(style: TreeStyle) -> Self {
        Self { style }
    }

    /// Format a tree into a string, one node per line.
    pub fn format(&self, root: &DebugNode) -> String {
        let mut output = String::new();
        let mut ancestors = Vec::new();
        self.format_into(root, &mut ancestors, &mut output);
        output
    }

    /// `ancestors` holds one "is last child" flag per level below the root,
    /// ending with the flag of `node` itself.
    fn format_into(&self, node: &DebugNode, ancestors: &mut Vec<bool>, output: &mut String) {
        output.push_str(&self.build_prefix(ancestors));
        output.push_str(&node.label);
        if let Some(detail) = &node.detail {
            write!(output, " ({detail})").expect("write to String");
        }
        output.push('\n');

        let child_count = node.children.len();
        for (i, child) in node.children.iter().enumerate() {
            ancestors.push(i + 1 == child_count);
            self.format_into(child, ancestors, output);
            ancestors.pop();
        }
    }

    fn build_prefix(&self, ancestors: &[bool]) -> String {
        let Some((&is_last, outer)) = ancestors.split_last() else {
            return String::new();
        };

        let (branch, tee, corner) = match self.style {
            TreeStyle::Ascii => ("|", "+--", "`--"),
            TreeStyle::Unicode => ("\u{2502}", "\u{251c}\u{2500}\u{2500}", "\u{2514}\u{2500}\u{2500}"),
        };

        let mut prefix = String::new();
        for &ancestor_is_last in outer {
            // A finished branch leaves a gap instead of a bar.
            prefix.push_str(if ancestor_is_last { " " } else { branch });
            prefix.push_str("  ");
        }
        prefix.push_str(if is_last { corner } else { tee });
        prefix.push(' ');
        prefix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DebugNode {
        DebugNode::new("root")
            .child(
                DebugNode::new("a")
                    .with_detail("open")
                    .child(DebugNode::new("a.1")),
            )
            .child(DebugNode::new("b"))
    }

    #[test]
    fn test_ascii_tree() {
        let text = TreeFormatter::new(TreeStyle::Ascii).format(&sample());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["root", "+-- a (open)", "|  `-- a.1", "`-- b"]);
    }

    #[test]
    fn test_last_child_leaves_no_bar() {
        let tree = DebugNode::new("root")
            .child(DebugNode::new("a"))
            .child(
                DebugNode::new("b")
                    .child(DebugNode::new("b.1"))
                    .child(DebugNode::new("b.2").child(DebugNode::new("b.2.x"))),
            );
        let text = TreeFormatter::new(TreeStyle::Ascii).format(&tree);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "root",
                "+-- a",
                "`-- b",
                "   +-- b.1",
                "   `-- b.2",
                "      `-- b.2.x",
            ]
        );
    }

    #[test]
    fn test_node_accessors() {
        let mut node = DebugNode::new("x");
        node.push(DebugNode::new("y"));
        assert_eq!(node.label(), "x");
        assert_eq!(node.children().len(), 1);
    }
}
