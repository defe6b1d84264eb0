//! Tabs widget entry point.

use std::fmt;

use serde_json::{Map, Value};

use crate::error::TabsError;
use crate::html::{Attributes, tag};
use crate::registrar::{AssetRegistrar, DROPDOWN_BUNDLE, TAB_BUNDLE};

use super::{TabItem, TabRenderer};

/// Client-side event handler bound to the widget root.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct ClientEvent {
    /// Event name, e.g. `shown`.
    pub event: String,
    /// JavaScript expression evaluating to the handler function.
    pub handler: String,
}

/// Tabs widget configuration.
///
/// # Example
///
/// ```
/// use navtabs_renderer::{NullRegistrar, TabItem, TabsWidget};
///
/// let widget = TabsWidget::new("profile").with_items(vec![
///     TabItem::new("One", "First"),
///     TabItem::new("Two", "Second"),
/// ]);
///
/// let rendered = widget.render(&mut NullRegistrar).unwrap();
/// assert!(rendered.headers.contains(r##"href="#profile-tab1""##));
/// ```
#[derive(Clone, Debug)]
pub struct TabsWidget {
    /// Root element id, used as the prefix of generated tab ids.
    ///
    /// An `id` in [`options`](Self::options) takes precedence. One of the two
    /// must be non-blank.
    pub id: String,
    /// Attributes of the header `<ul>`.
    pub options: Attributes,
    pub items: Vec<TabItem>,
    /// Escape header labels instead of inserting them as HTML.
    pub encode_labels: bool,
    /// Options passed to the client plugin. `None` skips the init script.
    pub client_options: Option<Map<String, Value>>,
    pub client_events: Vec<ClientEvent>,
}

/// The two fragments of a rendered widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedTabs {
    /// Navigation `<ul>`.
    pub headers: String,
    /// Pane container `<div class="tab-content">`.
    pub contents: String,
}

impl RenderedTabs {
    /// Both fragments as one block of markup.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RenderedTabs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.headers)?;
        writeln!(f, "{}", self.contents)
    }
}

impl TabsWidget {
    /// Create an empty widget with the given root id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            options: Attributes::new(),
            items: Vec::new(),
            encode_labels: false,
            client_options: Some(Map::new()),
            client_events: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_items(mut self, items: Vec<TabItem>) -> Self {
        self.items = items;
        self
    }

    #[must_use]
    pub fn with_item(mut self, item: TabItem) -> Self {
        self.items.push(item);
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: Attributes) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_encoded_labels(mut self) -> Self {
        self.encode_labels = true;
        self
    }

    #[must_use]
    pub fn with_client_options(mut self, options: Map<String, Value>) -> Self {
        self.client_options = Some(options);
        self
    }

    /// Register only the bundle, without the init script.
    #[must_use]
    pub fn without_client_script(mut self) -> Self {
        self.client_options = None;
        self
    }

    #[must_use]
    pub fn with_client_event(
        mut self,
        event: impl Into<String>,
        handler: impl Into<String>,
    ) -> Self {
        self.client_events.push(ClientEvent {
            event: event.into(),
            handler: handler.into(),
        });
        self
    }

    /// Render the header strip and the pane container.
    ///
    /// Assets are registered only when rendering succeeds: the dropdown
    /// bundle once per dropdown, then the tab bundle and its scripts.
    ///
    /// # Errors
    ///
    /// Returns [`TabsError`] if the root id is blank, any item lacks a
    /// header, or a leaf lacks content.
    pub fn render<R: AssetRegistrar + ?Sized>(
        &self,
        registrar: &mut R,
    ) -> Result<RenderedTabs, TabsError> {
        let mut options = self.options.clone();
        let root_id = options.id().map(str::to_owned).unwrap_or_else(|| {
            options.set("id", self.id.clone());
            self.id.clone()
        });
        if root_id.trim().is_empty() {
            return Err(TabsError::MissingId);
        }
        options.add_css_class("nav");

        let mut renderer = TabRenderer::new(&root_id).with_encoded_labels(self.encode_labels);

        let headers = renderer.render_headers(&self.items, &options, &mut 0)?;
        let panes = renderer.render_contents(&self.items, &mut 0)?;
        let contents = tag(
            "div",
            &format!("\n{panes}\n"),
            &Attributes::new().with("class", "tab-content"),
        );

        for _ in 0..renderer.dropdowns() {
            registrar.register_bundle(DROPDOWN_BUNDLE);
        }
        self.register_plugin(&root_id, registrar);

        tracing::debug!(
            id = %root_id,
            items = self.items.len(),
            leaves = self.items.iter().map(TabItem::leaf_count).sum::<usize>(),
            dropdowns = renderer.dropdowns(),
            "Rendered tabs widget"
        );

        Ok(RenderedTabs { headers, contents })
    }

    fn register_plugin<R: AssetRegistrar + ?Sized>(&self, id: &str, registrar: &mut R) {
        registrar.register_bundle(TAB_BUNDLE);

        if let Some(options) = &self.client_options {
            let args = if options.is_empty() {
                String::new()
            } else {
                Value::Object(options.clone()).to_string()
            };
            registrar.register_script(format!("jQuery('#{id}').tab({args});"));
        }

        for ClientEvent { event, handler } in &self.client_events {
            registrar.register_script(format!("jQuery('#{id}').on('{event}', {handler});"));
        }
    }
}
