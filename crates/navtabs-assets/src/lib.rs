//! Client asset registration for navtabs widgets.
//!
//! Widgets report the bundles and inline scripts they need through
//! [`AssetRegistrar`](navtabs_renderer::AssetRegistrar). [`PageAssets`]
//! collects them for one page and renders the matching tags:
//!
//! - stylesheets as `<link>` tags for the document head
//! - scripts as `<script src>` tags, plus one inline block, for the body
//!
//! Bundles come from a static catalogue (see [`bundle()`]) and are emitted
//! dependencies first.

mod bundle;
mod page;

pub use bundle::{BUNDLES, Bundle, bundle};
pub use page::PageAssets;

/// How an asset file is included in a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    Stylesheet,
    Script,
    /// Anything else; not linked from the page.
    Other,
}

/// Classify an asset file by its MIME type.
pub fn kind_for(path: &str) -> AssetKind {
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    match mime.essence_str() {
        "text/css" => AssetKind::Stylesheet,
        "text/javascript" | "application/javascript" => AssetKind::Script,
        _ => AssetKind::Other,
    }
}
