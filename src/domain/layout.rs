//! Responsive arrangement of the page grid
//!
//! Resolves, for a given viewport width, which fragments share a visual line.
//! A responsive row puts its columns on one line at or above the breakpoint and
//! gives every column its own line below it. Fragments outside any row are
//! accessories: they float independent of the grid.

use std::fmt;

use crate::domain::{DomainError, FragmentKind, Node, Style};

/// Default breakpoint in px (medium screens).
pub const DEFAULT_BREAKPOINT: u32 = 768;

/// Widths (px) the stylesheet has responsive column classes for, ascending.
pub const BREAKPOINT_TIERS: [u32; 5] = [576, 768, 992, 1200, 1400];

/// Viewport width threshold between single and two-column arrangement.
/// Always one of [`BREAKPOINT_TIERS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Breakpoint(u32);

impl Breakpoint {
    pub fn new(px: u32) -> Result<Self, DomainError> {
        if !BREAKPOINT_TIERS.contains(&px) {
            return Err(DomainError::UnsupportedBreakpoint(px));
        }
        Ok(Self(px))
    }

    pub fn px(&self) -> u32 {
        self.0
    }

    pub fn arrangement(&self, viewport: Viewport) -> Arrangement {
        if viewport.width >= self.0 {
            Arrangement::SideBySide
        } else {
            Arrangement::Stacked
        }
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self(DEFAULT_BREAKPOINT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
}

impl Viewport {
    pub fn new(width: u32) -> Self {
        Self { width }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrangement {
    /// One column per line, in source order
    Stacked,
    /// All columns of a row on one line
    SideBySide,
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arrangement::Stacked => f.write_str("stacked"),
            Arrangement::SideBySide => f.write_str("side-by-side"),
        }
    }
}

/// Visual order of fragments at one viewport width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPlan {
    pub viewport: Viewport,
    pub arrangement: Arrangement,
    /// Grid lines top to bottom, each listing fragments left to right
    pub lines: Vec<Vec<FragmentKind>>,
    /// Fragments positioned outside the grid
    pub accessories: Vec<FragmentKind>,
}

impl LayoutPlan {
    /// Resolve the arrangement of `root` at `viewport`.
    pub fn resolve(root: &Node, breakpoint: Breakpoint, viewport: Viewport) -> Self {
        let arrangement = breakpoint.arrangement(viewport);
        let mut plan = Self {
            viewport,
            arrangement,
            lines: Vec::new(),
            accessories: Vec::new(),
        };
        plan.visit(root);
        plan
    }

    fn visit(&mut self, node: &Node) {
        match node {
            Node::Element(e) if e.has_style(Style::ResponsiveRow) => {
                let columns: Vec<Vec<FragmentKind>> = e
                    .children
                    .iter()
                    .filter(|c| matches!(c, Node::Element(col) if col.is_column()))
                    .map(top_fragments)
                    .collect();
                match self.arrangement {
                    Arrangement::SideBySide => {
                        self.lines.push(columns.into_iter().flatten().collect())
                    }
                    Arrangement::Stacked => self.lines.extend(columns),
                }
            }
            Node::Fragment(f) if !contains_row(node) => self.accessories.push(f.kind),
            _ => {
                for child in node.children() {
                    self.visit(child);
                }
            }
        }
    }
}

/// Outermost fragments below `node`, in document order.
fn top_fragments(node: &Node) -> Vec<FragmentKind> {
    let mut out = Vec::new();
    for child in node.children() {
        match child {
            Node::Fragment(f) => out.push(f.kind),
            other => out.extend(top_fragments(other)),
        }
    }
    out
}

fn contains_row(node: &Node) -> bool {
    node.contains_style(Style::ResponsiveRow)
}
