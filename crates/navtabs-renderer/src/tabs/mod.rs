//! Bootstrap-style tabs.
//!
//! A widget renders two coupled fragments: a `<ul class="nav">` header strip
//! and a `<div class="tab-content">` holding one pane per leaf tab. Items
//! with nested `items` render as dropdown menus in the header strip and
//! contribute only their leaves' panes.
//!
//! ```
//! use navtabs_renderer::{NullRegistrar, TabItem, TabsWidget};
//!
//! let widget = TabsWidget::new("t").with_items(vec![
//!     TabItem::new("One", "A"),
//!     TabItem::dropdown("More", vec![TabItem::new("Two", "B")]),
//! ]);
//!
//! let rendered = widget.render(&mut NullRegistrar).unwrap();
//! assert!(rendered.headers.contains(r#"<ul class="dropdown-menu">"#));
//! assert!(rendered.contents.contains(r#"<div id="t-tab1" class="tab-pane">B</div>"#));
//! ```

mod item;
mod renderer;
mod widget;

pub use item::TabItem;
pub use renderer::TabRenderer;
pub use widget::{ClientEvent, RenderedTabs, TabsWidget};
