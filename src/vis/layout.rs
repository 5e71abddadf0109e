//! Named layout tree for composed views
//!
//! A [`Layout`] is either a leaf holding an optional [`Panel`] or a split
//! that arranges its children horizontally or vertically. Every node has a
//! name, so leaves can be addressed after the tree is built.

use super::panel::Panel;

/// Direction children of a split are laid out in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Children side by side
    Horizontal,
    /// Children stacked top to bottom
    Vertical,
}

/// Share of the parent a child occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutSize {
    /// Fixed number of terminal lines or columns
    Fixed(usize),
    /// Relative weight among the non-fixed siblings
    Ratio(usize),
}

impl Default for LayoutSize {
    fn default() -> Self {
        LayoutSize::Ratio(1)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutContent {
    Leaf(Option<Panel>),
    Split {
        orientation: Orientation,
        children: Vec<Layout>,
    },
}

/// A node of the layout tree
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub name: String,
    pub size: LayoutSize,
    pub content: LayoutContent,
}

impl Layout {
    /// Empty leaf
    pub fn leaf(name: impl Into<String>) -> Self {
        Layout {
            name: name.into(),
            size: LayoutSize::default(),
            content: LayoutContent::Leaf(None),
        }
    }

    pub fn with_size(mut self, size: LayoutSize) -> Self {
        self.size = size;
        self
    }

    /// Stack `children` vertically
    pub fn split_column(name: impl Into<String>, children: Vec<Layout>) -> Self {
        Self::split(name, Orientation::Vertical, children)
    }

    /// Place `children` side by side
    pub fn split_row(name: impl Into<String>, children: Vec<Layout>) -> Self {
        Self::split(name, Orientation::Horizontal, children)
    }

    fn split(name: impl Into<String>, orientation: Orientation, children: Vec<Layout>) -> Self {
        Layout {
            name: name.into(),
            size: LayoutSize::default(),
            content: LayoutContent::Split {
                orientation,
                children,
            },
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.content, LayoutContent::Leaf(_))
    }

    /// Depth-first search by name
    pub fn find(&self, name: &str) -> Option<&Layout> {
        if self.name == name {
            return Some(self);
        }
        match &self.content {
            LayoutContent::Leaf(_) => None,
            LayoutContent::Split { children, .. } => children.iter().find_map(|c| c.find(name)),
        }
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Layout> {
        if self.name == name {
            return Some(self);
        }
        match &mut self.content {
            LayoutContent::Leaf(_) => None,
            LayoutContent::Split { children, .. } => {
                children.iter_mut().find_map(|c| c.find_mut(name))
            }
        }
    }

    /// Panel of the leaf named `name`, if that leaf is populated
    pub fn panel(&self, name: &str) -> Option<&Panel> {
        match &self.find(name)?.content {
            LayoutContent::Leaf(panel) => panel.as_ref(),
            LayoutContent::Split { .. } => None,
        }
    }

    /// Put `panel` into the leaf named `name`.
    ///
    /// Returns false when no such leaf exists.
    pub fn update(&mut self, name: &str, panel: Panel) -> bool {
        match self.find_mut(name) {
            Some(Layout {
                content: LayoutContent::Leaf(slot),
                ..
            }) => {
                *slot = Some(panel);
                true
            }
            _ => false,
        }
    }

    /// All leaves in depth-first order
    pub fn leaves(&self) -> Vec<&Layout> {
        match &self.content {
            LayoutContent::Leaf(_) => vec![self],
            LayoutContent::Split { children, .. } => {
                children.iter().flat_map(|c| c.leaves()).collect()
            }
        }
    }
}
