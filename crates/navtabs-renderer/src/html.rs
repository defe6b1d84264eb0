//! HTML tag builder.
//!
//! Produces tags with escaped, consistently ordered attributes. Inner HTML is
//! inserted verbatim: callers decide what to escape.

use std::fmt::Write;

/// Attributes rendered before all others, in this order.
const ATTRIBUTE_ORDER: &[&str] = &[
    "type", "id", "class", "name", "value", "href", "src", "action", "method", "selected",
    "checked", "readonly", "disabled", "multiple", "size", "maxlength", "width", "height", "rows",
    "cols", "alt", "title", "rel", "media",
];

/// Elements that have no closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "meta", "param", "source", "track", "wbr",
];

/// Value of a single HTML attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttrValue {
    /// Rendered as `name="value"` with the value escaped.
    Text(String),
    /// Boolean attribute: `true` renders the bare name, `false` omits it.
    Flag(bool),
}

impl AttrValue {
    /// Text value, if this is not a flag.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Flag(_) => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Insertion-ordered map of HTML attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, AttrValue)>,
}

impl Attributes {
    /// Create an empty attribute map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Set an attribute, replacing an existing value in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    /// The `id` attribute, if set to a text value.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.get("id").and_then(AttrValue::as_text)
    }

    /// Whether the `class` attribute contains `class` as a whole word.
    #[must_use]
    pub fn has_css_class(&self, class: &str) -> bool {
        self.get("class")
            .and_then(AttrValue::as_text)
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Append a CSS class unless it is already present.
    pub fn add_css_class(&mut self, class: &str) {
        if self.has_css_class(class) {
            return;
        }
        match self.get("class").and_then(AttrValue::as_text) {
            Some(existing) if !existing.trim().is_empty() => {
                let joined = format!("{existing} {class}");
                self.set("class", joined);
            }
            _ => self.set("class", class),
        }
    }

    /// Render attributes as a string with a leading space per attribute.
    ///
    /// Well-known attributes come first in a fixed order, the rest follow in
    /// insertion order.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for name in ATTRIBUTE_ORDER {
            if let Some(value) = self.get(name) {
                write_attribute(&mut out, name, value);
            }
        }
        for (name, value) in &self.entries {
            if !ATTRIBUTE_ORDER.contains(&name.as_str()) {
                write_attribute(&mut out, name, value);
            }
        }
        out
    }
}

fn write_attribute(out: &mut String, name: &str, value: &AttrValue) {
    match value {
        AttrValue::Text(text) => {
            let _ = write!(out, r#" {name}="{}""#, escape_html(text));
        }
        AttrValue::Flag(true) => {
            let _ = write!(out, " {name}");
        }
        AttrValue::Flag(false) => {}
    }
}

/// Render a complete HTML element.
///
/// `inner_html` is not escaped. Void elements such as `<link>` ignore it and
/// render without a closing tag.
#[must_use]
pub fn tag(name: &str, inner_html: &str, attrs: &Attributes) -> String {
    let attrs = attrs.render();
    if VOID_ELEMENTS.contains(&name) {
        format!("<{name}{attrs}>")
    } else {
        format!("<{name}{attrs}>{inner_html}</{name}>")
    }
}

/// Render an `<a>` element linking to `href`.
#[must_use]
pub fn anchor(text: &str, href: &str, attrs: &Attributes) -> String {
    let attrs = attrs.clone().with("href", href);
    tag("a", text, &attrs)
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(feature = "serde")]
mod de {
    use std::fmt;

    use serde::de::{self, MapAccess, Visitor};
    use serde::{Deserialize, Deserializer};

    use super::{AttrValue, Attributes};

    impl<'de> Deserialize<'de> for AttrValue {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            struct AttrValueVisitor;

            impl Visitor<'_> for AttrValueVisitor {
                type Value = AttrValue;

                fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    f.write_str("a string, number or boolean attribute value")
                }

                fn visit_bool<E: de::Error>(self, v: bool) -> Result<AttrValue, E> {
                    Ok(AttrValue::Flag(v))
                }

                fn visit_i64<E: de::Error>(self, v: i64) -> Result<AttrValue, E> {
                    Ok(AttrValue::Text(v.to_string()))
                }

                fn visit_u64<E: de::Error>(self, v: u64) -> Result<AttrValue, E> {
                    Ok(AttrValue::Text(v.to_string()))
                }

                fn visit_f64<E: de::Error>(self, v: f64) -> Result<AttrValue, E> {
                    Ok(AttrValue::Text(v.to_string()))
                }

                fn visit_str<E: de::Error>(self, v: &str) -> Result<AttrValue, E> {
                    Ok(AttrValue::Text(v.to_owned()))
                }

                fn visit_string<E: de::Error>(self, v: String) -> Result<AttrValue, E> {
                    Ok(AttrValue::Text(v))
                }
            }

            deserializer.deserialize_any(AttrValueVisitor)
        }
    }

    impl<'de> Deserialize<'de> for Attributes {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            struct AttributesVisitor;

            impl<'de> Visitor<'de> for AttributesVisitor {
                type Value = Attributes;

                fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    f.write_str("a map of HTML attributes")
                }

                fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Attributes, A::Error> {
                    let mut attrs = Attributes::new();
                    while let Some((name, value)) = map.next_entry::<String, AttrValue>()? {
                        attrs.set(name, value);
                    }
                    Ok(attrs)
                }
            }

            deserializer.deserialize_map(AttributesVisitor)
        }
    }
}
