//! Tab item descriptors.

use crate::html::Attributes;

/// A single tab, or a dropdown grouping nested tabs.
///
/// An item with `items` (even an empty list) is a dropdown: its header opens
/// a menu and its `content` is ignored. Every other item is a leaf and must
/// carry `content`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct TabItem {
    /// Header label (HTML). Required.
    pub header: Option<String>,
    /// Attributes of the header `<li>`.
    pub header_options: Attributes,
    /// Pane body (HTML). Required for leaves.
    pub content: Option<String>,
    /// Attributes of the pane `<div>`. An `id` here replaces the generated one.
    pub options: Attributes,
    /// Nested tabs shown in a dropdown menu.
    pub items: Option<Vec<TabItem>>,
}

impl TabItem {
    /// Create a leaf tab.
    #[must_use]
    pub fn new(header: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            header: Some(header.into()),
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Create a dropdown holding `items`.
    #[must_use]
    pub fn dropdown(header: impl Into<String>, items: Vec<TabItem>) -> Self {
        Self {
            header: Some(header.into()),
            items: Some(items),
            ..Self::default()
        }
    }

    /// Set the pane id, overriding the generated one.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.options.set("id", id.into());
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: Attributes) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_header_options(mut self, header_options: Attributes) -> Self {
        self.header_options = header_options;
        self
    }

    /// Number of leaves in this item's subtree (itself, if a leaf).
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match &self.items {
            Some(items) => items.iter().map(TabItem::leaf_count).sum(),
            None => 1,
        }
    }
}
