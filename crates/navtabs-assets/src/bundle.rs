//! Static bundle catalogue.

use navtabs_renderer::{DROPDOWN_BUNDLE, TAB_BUNDLE};

/// A named group of client files with dependencies.
#[derive(Debug, PartialEq, Eq)]
pub struct Bundle {
    pub name: &'static str,
    /// Paths relative to the asset base URL.
    pub files: &'static [&'static str],
    /// Bundles that must be included before this one.
    pub depends: &'static [&'static str],
}

/// Every bundle a page can register.
pub const BUNDLES: &[Bundle] = &[
    Bundle {
        name: "jquery",
        files: &["js/jquery.js"],
        depends: &[],
    },
    Bundle {
        name: "bootstrap",
        files: &["css/bootstrap.css"],
        depends: &[],
    },
    Bundle {
        name: TAB_BUNDLE,
        files: &["js/bootstrap-tab.js"],
        depends: &["jquery", "bootstrap"],
    },
    Bundle {
        name: DROPDOWN_BUNDLE,
        files: &["js/bootstrap-dropdown.js"],
        depends: &["jquery", "bootstrap"],
    },
];

/// Look up a bundle by name.
pub fn bundle(name: &str) -> Option<&'static Bundle> {
    BUNDLES.iter().find(|b| b.name == name)
}

/// Expand `names` into bundles, dependencies first, each bundle once.
///
/// Unknown names are skipped.
pub(crate) fn resolve<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<&'static Bundle> {
    let mut seen = Vec::new();
    let mut out = Vec::new();
    for name in names {
        visit(name, &mut seen, &mut out);
    }
    out
}

fn visit<'a>(name: &'a str, seen: &mut Vec<&'a str>, out: &mut Vec<&'static Bundle>) {
    if seen.contains(&name) {
        return;
    }
    seen.push(name);

    let Some(entry) = bundle(name) else {
        return;
    };
    for dep in entry.depends {
        visit(*dep, seen, out);
    }
    out.push(entry);
}
