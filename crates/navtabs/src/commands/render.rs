//! `navtabs render` command implementation.

use std::path::PathBuf;

use clap::Args;
use console::Term;
use navtabs_assets::PageAssets;
use navtabs_config::Config;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Path to configuration file (default: auto-discover tabs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print only the widget markup, without the page around it.
    #[arg(long)]
    fragment: bool,

    /// Enable verbose output (debug logs on stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or the widget
    /// is misconfigured.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref())?;
        if let Some(path) = &config.config_path {
            output.info(&format!("Using {}", path.display()));
        }

        let mut assets = match config.base_url() {
            Some(base_url) => PageAssets::new().with_base_url(base_url),
            None => PageAssets::new(),
        };
        let widget = config.into_widget(|| assets.next_widget_id());
        let rendered = widget.render(&mut assets)?;

        tracing::debug!(
            bundles = ?assets.bundles(),
            scripts = assets.scripts().len(),
            "Collected page assets"
        );

        let html = if self.fragment {
            rendered.to_html()
        } else {
            render_page(&rendered.to_html(), &assets)
        };

        Term::stdout().write_str(&html)?;
        output.success(&format!("Rendered {} tab item(s)", widget.items.len()));
        Ok(())
    }
}

/// Wrap widget markup in a minimal HTML document.
fn render_page(widget_html: &str, assets: &PageAssets) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n{}\n</head>\n<body>\n{widget_html}{}\n</body>\n</html>\n",
        assets.render_head(),
        assets.render_body()
    )
}

#[cfg(test)]
mod tests {
    use navtabs_renderer::{TabItem, TabsWidget};

    use super::*;

    #[test]
    fn test_render_page_places_assets() {
        let mut assets = PageAssets::new();
        let rendered = TabsWidget::new("w0")
            .with_item(TabItem::new("One", "A"))
            .render(&mut assets)
            .unwrap();

        let page = render_page(&rendered.to_html(), &assets);

        let head_end = page.find("</head>").unwrap();
        let stylesheet = page.find("css/bootstrap.css").unwrap();
        let widget = page.find(r#"<ul id="w0""#).unwrap();
        let script = page.find("js/bootstrap-tab.js").unwrap();
        assert!(stylesheet < head_end);
        assert!(head_end < widget);
        assert!(widget < script);
        assert!(page.ends_with("</html>\n"));
    }
}
