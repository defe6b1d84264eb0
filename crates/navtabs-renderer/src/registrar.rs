//! Client-side asset registration.

/// Bundle carrying the tab-switching plugin.
pub const TAB_BUNDLE: &str = "tab";

/// Bundle carrying the dropdown plugin used by nested tabs.
pub const DROPDOWN_BUNDLE: &str = "dropdown";

/// Receives the client-side assets a rendered widget needs.
///
/// Implemented per page by `navtabs-assets`. Registration may be repeated;
/// implementations decide whether to deduplicate.
pub trait AssetRegistrar {
    /// Register a named asset bundle.
    fn register_bundle(&mut self, name: &str);

    /// Register an inline script to run once the page is ready.
    fn register_script(&mut self, script: String);
}

/// Registrar that discards everything, for callers that manage assets
/// themselves.
pub struct NullRegistrar;

impl AssetRegistrar for NullRegistrar {
    fn register_bundle(&mut self, _name: &str) {}

    fn register_script(&mut self, _script: String) {}
}
