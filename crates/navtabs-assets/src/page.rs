//! Per-page asset collection.

use navtabs_renderer::{AssetRegistrar, Attributes, tag};

use crate::bundle::{self, Bundle};
use crate::{AssetKind, kind_for};

/// Prefix of generated widget ids.
const WIDGET_ID_PREFIX: &str = "w";

/// Assets registered while rendering one page.
///
/// Bundles are deduplicated and kept in first-registration order; scripts are
/// kept as registered.
#[derive(Debug, Default)]
pub struct PageAssets {
    base_url: String,
    bundles: Vec<String>,
    scripts: Vec<String>,
    next_widget: usize,
}

impl PageAssets {
    /// Create an empty collection serving files relative to the page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix every file path with `base_url`.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Next auto-generated widget id on this page (`w0`, `w1`, ...).
    pub fn next_widget_id(&mut self) -> String {
        let id = format!("{WIDGET_ID_PREFIX}{}", self.next_widget);
        self.next_widget += 1;
        id
    }

    /// Registered bundle names.
    #[must_use]
    pub fn bundles(&self) -> &[String] {
        &self.bundles
    }

    /// Registered inline scripts.
    #[must_use]
    pub fn scripts(&self) -> &[String] {
        &self.scripts
    }

    /// Registered bundles with their dependencies, dependencies first.
    #[must_use]
    pub fn resolve(&self) -> Vec<&'static Bundle> {
        bundle::resolve(self.bundles.iter().map(String::as_str))
    }

    /// URLs of all files of a given kind, in inclusion order.
    #[must_use]
    pub fn urls(&self, kind: AssetKind) -> Vec<String> {
        self.resolve()
            .into_iter()
            .flat_map(|b| b.files.iter())
            .filter(|file| kind_for(file) == kind)
            .map(|file| self.url(file))
            .collect()
    }

    /// `<link>` tags for the document head.
    #[must_use]
    pub fn render_head(&self) -> String {
        self.urls(AssetKind::Stylesheet)
            .iter()
            .map(|href| {
                let attrs = Attributes::new()
                    .with("rel", "stylesheet")
                    .with("href", href.as_str());
                tag("link", "", &attrs)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `<script>` tags for the end of the body.
    ///
    /// Inline scripts run once the document is ready, in registration order.
    #[must_use]
    pub fn render_body(&self) -> String {
        let mut lines: Vec<String> = self
            .urls(AssetKind::Script)
            .iter()
            .map(|src| tag("script", "", &Attributes::new().with("src", src.as_str())))
            .collect();

        if !self.scripts.is_empty() {
            let body = format!(
                "jQuery(document).ready(function () {{\n{}\n}});",
                self.scripts.join("\n")
            );
            lines.push(tag("script", &body, &Attributes::new()));
        }

        lines.join("\n")
    }

    fn url(&self, file: &str) -> String {
        if self.base_url.is_empty() {
            file.to_owned()
        } else {
            format!("{}/{file}", self.base_url)
        }
    }
}

impl AssetRegistrar for PageAssets {
    fn register_bundle(&mut self, name: &str) {
        if self.bundles.iter().any(|b| b == name) {
            return;
        }
        if bundle::bundle(name).is_none() {
            tracing::warn!(bundle = %name, "Unknown asset bundle registered");
        }
        self.bundles.push(name.to_owned());
    }

    fn register_script(&mut self, script: String) {
        self.scripts.push(script);
    }
}
