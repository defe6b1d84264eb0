//! Header strip and pane rendering.
//!
//! Both passes walk the item tree in document order with a shared running
//! index. Only leaves consume an index, so the `k`-th leaf gets
//! `<root>-tab<k>` in both the header link and the pane id.

use std::borrow::Cow;

use crate::error::{TabsError, item_path};
use crate::html::{Attributes, anchor, escape_html, tag};

use super::TabItem;

/// Renders the two coupled fragments of a tabs widget.
pub struct TabRenderer<'a> {
    root_id: &'a str,
    encode_labels: bool,
    dropdowns: usize,
}

impl<'a> TabRenderer<'a> {
    /// Create a renderer generating ids from `root_id`.
    #[must_use]
    pub fn new(root_id: &'a str) -> Self {
        Self {
            root_id,
            encode_labels: false,
            dropdowns: 0,
        }
    }

    /// Escape header labels instead of inserting them as HTML.
    #[must_use]
    pub fn with_encoded_labels(mut self, encode_labels: bool) -> Self {
        self.encode_labels = encode_labels;
        self
    }

    /// Number of dropdowns seen by [`render_headers`](Self::render_headers).
    #[must_use]
    pub fn dropdowns(&self) -> usize {
        self.dropdowns
    }

    /// Render the `<ul>` header strip.
    ///
    /// `options` are the attributes of the `<ul>`. `index` is the running
    /// leaf index, advanced once per leaf.
    ///
    /// # Errors
    ///
    /// Returns [`TabsError::MissingHeader`] for the first item without a header.
    pub fn render_headers(
        &mut self,
        items: &[TabItem],
        options: &Attributes,
        index: &mut usize,
    ) -> Result<String, TabsError> {
        self.headers_at(items, options, index, &[])
    }

    /// Render the pane `<div>`s, joined by newlines and not wrapped.
    ///
    /// # Errors
    ///
    /// Returns [`TabsError::MissingContent`] for the first leaf without content.
    pub fn render_contents(
        &self,
        items: &[TabItem],
        index: &mut usize,
    ) -> Result<String, TabsError> {
        self.contents_at(items, index, &[])
    }

    fn headers_at(
        &mut self,
        items: &[TabItem],
        options: &Attributes,
        index: &mut usize,
        parent: &[usize],
    ) -> Result<String, TabsError> {
        let mut headers = Vec::with_capacity(items.len());

        for (pos, item) in items.iter().enumerate() {
            let Some(header) = item.header.as_deref() else {
                return Err(TabsError::MissingHeader {
                    path: item_path(parent, pos),
                });
            };
            let label = self.label(header);

            let mut header_options = item.header_options.clone();
            if *index == 0 {
                header_options.add_css_class("active");
            }

            if let Some(children) = &item.items {
                self.dropdowns += 1;
                header_options.add_css_class("dropdown");

                let toggle = anchor(
                    &format!(r#"{label} <b class="caret"></b>"#),
                    "#",
                    &Attributes::new()
                        .with("class", "dropdown-toggle")
                        .with("data-toggle", "dropdown"),
                );
                let menu_options = Attributes::new().with("class", "dropdown-menu");
                let mut path = parent.to_vec();
                path.push(pos);
                let menu = self.headers_at(children, &menu_options, index, &path)?;

                headers.push(tag("li", &format!("{toggle}{menu}"), &header_options));
            } else {
                let id = self.pane_id(&item.options, index);
                let link = anchor(
                    &label,
                    &format!("#{id}"),
                    &Attributes::new().with("data-toggle", "tab"),
                );
                headers.push(tag("li", &link, &header_options));
            }
        }

        Ok(tag("ul", &headers.join("\n"), options))
    }

    fn contents_at(
        &self,
        items: &[TabItem],
        index: &mut usize,
        parent: &[usize],
    ) -> Result<String, TabsError> {
        let mut contents = Vec::with_capacity(items.len());

        for (pos, item) in items.iter().enumerate() {
            if let Some(children) = &item.items {
                let mut path = parent.to_vec();
                path.push(pos);
                let nested = self.contents_at(children, index, &path)?;
                if !nested.is_empty() {
                    contents.push(nested);
                }
                continue;
            }

            let Some(content) = item.content.as_deref() else {
                return Err(TabsError::MissingContent {
                    path: item_path(parent, pos),
                });
            };

            let mut options = item.options.clone();
            options.add_css_class("tab-pane");
            if *index == 0 {
                options.add_css_class("active");
            }
            let id = self.pane_id(&item.options, index);
            options.set("id", id);
            contents.push(tag("div", content, &options));
        }

        Ok(contents.join("\n"))
    }

    /// Resolve a leaf's id and advance the running index.
    ///
    /// The index advances even when the id is explicit, keeping generated ids
    /// aligned between headers and panes.
    fn pane_id(&self, options: &Attributes, index: &mut usize) -> String {
        let id = options
            .id()
            .map_or_else(|| format!("{}-tab{index}", self.root_id), str::to_owned);
        *index += 1;
        id
    }

    fn label<'h>(&self, header: &'h str) -> Cow<'h, str> {
        if self.encode_labels {
            Cow::Owned(escape_html(header))
        } else {
            Cow::Borrowed(header)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn two_tabs() -> Vec<TabItem> {
        vec![TabItem::new("One", "A"), TabItem::new("Two", "B")]
    }

    #[test]
    fn test_headers_flat() {
        let mut renderer = TabRenderer::new("t");
        let mut index = 0;
        let html = renderer
            .render_headers(&two_tabs(), &Attributes::new(), &mut index)
            .unwrap();

        assert_eq!(
            html,
            "<ul><li class=\"active\"><a href=\"#t-tab0\" data-toggle=\"tab\">One</a></li>\n\
             <li><a href=\"#t-tab1\" data-toggle=\"tab\">Two</a></li></ul>"
        );
        assert_eq!(index, 2);
    }

    #[test]
    fn test_contents_flat() {
        let renderer = TabRenderer::new("t");
        let mut index = 0;
        let html = renderer.render_contents(&two_tabs(), &mut index).unwrap();

        assert_eq!(
            html,
            "<div id=\"t-tab0\" class=\"tab-pane active\">A</div>\n\
             <div id=\"t-tab1\" class=\"tab-pane\">B</div>"
        );
        assert_eq!(index, 2);
    }

    #[test]
    fn test_headers_use_ul_options() {
        let mut renderer = TabRenderer::new("t");
        let options = Attributes::new().with("id", "t").with("class", "nav");
        let html = renderer.render_headers(&[], &options, &mut 0).unwrap();
        assert_eq!(html, r#"<ul id="t" class="nav"></ul>"#);
    }

    #[test]
    fn test_dropdown_header() {
        let items = vec![
            TabItem::new("One", "A"),
            TabItem::dropdown("Menu", vec![TabItem::new("Sub", "S")]),
        ];
        let mut renderer = TabRenderer::new("t");
        let html = renderer
            .render_headers(&items, &Attributes::new(), &mut 0)
            .unwrap();

        assert_eq!(
            html,
            "<ul><li class=\"active\"><a href=\"#t-tab0\" data-toggle=\"tab\">One</a></li>\n\
             <li class=\"dropdown\"><a class=\"dropdown-toggle\" href=\"#\" data-toggle=\"dropdown\">Menu <b class=\"caret\"></b></a>\
             <ul class=\"dropdown-menu\"><li><a href=\"#t-tab1\" data-toggle=\"tab\">Sub</a></li></ul></li></ul>"
        );
        assert_eq!(renderer.dropdowns(), 1);
    }

    #[test]
    fn test_dropdown_contributes_no_pane() {
        let items = vec![TabItem::dropdown(
            "Menu",
            vec![TabItem::new("X", "Y")],
        )];
        let renderer = TabRenderer::new("t");
        let html = renderer.render_contents(&items, &mut 0).unwrap();

        assert_eq!(html, r#"<div id="t-tab0" class="tab-pane active">Y</div>"#);
    }

    #[test]
    fn test_leading_dropdown_marks_first_child_active() {
        let items = vec![
            TabItem::dropdown("Menu", vec![TabItem::new("X", "x"), TabItem::new("Y", "y")]),
            TabItem::new("Z", "z"),
        ];
        let mut renderer = TabRenderer::new("t");
        let headers = renderer
            .render_headers(&items, &Attributes::new(), &mut 0)
            .unwrap();

        assert!(headers.contains(r#"<li class="active dropdown">"#));
        assert!(headers.contains(r##"<li class="active"><a href="#t-tab0" data-toggle="tab">X</a></li>"##));
        assert!(headers.contains(r##"<li><a href="#t-tab1" data-toggle="tab">Y</a></li>"##));
        assert!(headers.contains(r##"<li><a href="#t-tab2" data-toggle="tab">Z</a></li>"##));

        let contents = renderer.render_contents(&items, &mut 0).unwrap();
        assert_eq!(contents.matches("active").count(), 1);
        assert!(contents.contains(r#"<div id="t-tab0" class="tab-pane active">x</div>"#));
        assert!(contents.contains(r#"<div id="t-tab2" class="tab-pane">z</div>"#));
    }

    #[test]
    fn test_explicit_id_overrides_generated() {
        let items = vec![
            TabItem::new("One", "A").with_id("custom"),
            TabItem::new("Two", "B"),
        ];
        let mut renderer = TabRenderer::new("t");
        let headers = renderer
            .render_headers(&items, &Attributes::new(), &mut 0)
            .unwrap();
        let contents = renderer.render_contents(&items, &mut 0).unwrap();

        assert!(headers.contains(r##"href="#custom""##));
        assert!(contents.contains(r#"<div id="custom" class="tab-pane active">A</div>"#));
        // The explicit id still consumes index 0.
        assert!(headers.contains(r##"href="#t-tab1""##));
        assert!(contents.contains(r#"id="t-tab1""#));
    }

    #[test]
    fn test_pane_keeps_item_options() {
        let items = vec![TabItem::new("One", "A").with_options(
            Attributes::new()
                .with("class", "fade")
                .with("data-x", "1"),
        )];
        let renderer = TabRenderer::new("t");
        let html = renderer.render_contents(&items, &mut 0).unwrap();
        assert_eq!(
            html,
            r#"<div id="t-tab0" class="fade tab-pane active" data-x="1">A</div>"#
        );
    }

    #[test]
    fn test_header_options_applied() {
        let items = vec![
            TabItem::new("One", "A"),
            TabItem::new("Two", "B").with_header_options(Attributes::new().with("class", "pull-right")),
        ];
        let mut renderer = TabRenderer::new("t");
        let html = renderer
            .render_headers(&items, &Attributes::new(), &mut 0)
            .unwrap();
        assert!(html.contains(r##"<li class="pull-right"><a href="#t-tab1""##));
    }

    #[test]
    fn test_missing_header() {
        let items = vec![
            TabItem::new("One", "A"),
            TabItem {
                content: Some("B".to_owned()),
                ..TabItem::default()
            },
        ];
        let mut renderer = TabRenderer::new("t");
        let err = renderer
            .render_headers(&items, &Attributes::new(), &mut 0)
            .unwrap_err();
        assert_eq!(err, TabsError::MissingHeader { path: "1".to_owned() });
    }

    #[test]
    fn test_missing_header_nested_path() {
        let items = vec![TabItem::dropdown(
            "Menu",
            vec![TabItem::new("X", "x"), TabItem::default()],
        )];
        let mut renderer = TabRenderer::new("t");
        let err = renderer
            .render_headers(&items, &Attributes::new(), &mut 0)
            .unwrap_err();
        assert_eq!(
            err,
            TabsError::MissingHeader {
                path: "0.1".to_owned()
            }
        );
    }

    #[test]
    fn test_missing_content() {
        let items = vec![TabItem {
            header: Some("One".to_owned()),
            ..TabItem::default()
        }];
        let renderer = TabRenderer::new("t");
        let err = renderer.render_contents(&items, &mut 0).unwrap_err();
        assert_eq!(err, TabsError::MissingContent { path: "0".to_owned() });
    }

    #[test]
    fn test_dropdown_content_ignored() {
        let mut item = TabItem::dropdown("Menu", vec![TabItem::new("X", "x")]);
        item.content = Some("ignored".to_owned());
        let renderer = TabRenderer::new("t");
        let html = renderer.render_contents(&[item], &mut 0).unwrap();
        assert!(!html.contains("ignored"));
    }

    #[test]
    fn test_empty_dropdown_adds_no_blank_line() {
        let items = vec![
            TabItem::new("One", "A"),
            TabItem::dropdown("Empty", vec![]),
            TabItem::new("Two", "B"),
        ];
        let renderer = TabRenderer::new("t");
        let html = renderer.render_contents(&items, &mut 0).unwrap();
        assert_eq!(html.lines().count(), 2);
    }

    #[test]
    fn test_labels_raw_by_default() {
        let items = vec![TabItem::new("<i>One</i>", "A")];
        let mut renderer = TabRenderer::new("t");
        let html = renderer
            .render_headers(&items, &Attributes::new(), &mut 0)
            .unwrap();
        assert!(html.contains("><i>One</i></a>"));
    }

    #[test]
    fn test_encoded_labels() {
        let items = vec![
            TabItem::new("<i>One</i>", "A"),
            TabItem::dropdown("<b>", vec![TabItem::new("X", "x")]),
        ];
        let mut renderer = TabRenderer::new("t").with_encoded_labels(true);
        let html = renderer
            .render_headers(&items, &Attributes::new(), &mut 0)
            .unwrap();
        assert!(html.contains(">&lt;i&gt;One&lt;/i&gt;</a>"));
        assert!(html.contains(r#">&lt;b&gt; <b class="caret"></b></a>"#));
    }

    #[test]
    fn test_content_not_escaped() {
        let items = vec![TabItem::new("One", "<p>Body</p>")];
        let renderer = TabRenderer::new("t");
        let html = renderer.render_contents(&items, &mut 0).unwrap();
        assert!(html.contains("><p>Body</p></div>"));
    }
}
