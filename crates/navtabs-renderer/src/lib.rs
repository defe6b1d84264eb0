//! Server-side renderer for tabbed navigation widgets.
//!
//! This crate renders a [`TabsWidget`] into a header strip and a pane
//! container whose ids are linked, so the client-side tab plugin can switch
//! panes.
//!
//! # Architecture
//!
//! - [`html`]: tag builder with escaped, ordered [`Attributes`]
//! - [`TabRenderer`]: recursive header and pane rendering
//! - [`AssetRegistrar`]: receives the bundles and scripts a widget needs.
//!   A per-page implementation lives in the `navtabs-assets` crate.

mod error;
pub mod html;
mod registrar;
pub(crate) mod tabs;

pub use error::TabsError;
pub use html::{AttrValue, Attributes, anchor, escape_html, tag};
pub use registrar::{AssetRegistrar, DROPDOWN_BUNDLE, NullRegistrar, TAB_BUNDLE};
pub use tabs::{ClientEvent, RenderedTabs, TabItem, TabRenderer, TabsWidget};
