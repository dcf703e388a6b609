//! Views: named, typed references to content Flexivis can render.
//!
//! See <https://flexivis.infrastruktur.link/#view-types> for the view types
//! the service understands.

use std::fmt;

use crate::error::{Error, Result};
use crate::layout::LayoutNode;
use crate::url::Layout;

/// Marker the service uses for content embedded directly in the URL.
pub const INLINE_PREFIX: &str = "inline:";

/// URL schemes accepted for raw (iframe) content.
const IFRAME_SCHEMES: [&str; 3] = ["https:", "http:", "file:"];

/// Name of a view.
///
/// Doubles as the view's atom in the layout text and as its URL parameter
/// key. Names are not encoded, so they should be URL-safe, and they must be
/// unique within one layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewName(String);

impl ViewName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A single view name is a valid layout on its own.
    pub fn as_layout(&self) -> Layout {
        Layout::new(self.0.clone())
    }
}

impl From<&str> for ViewName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ViewName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for ViewName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Renderer selected for a view.
///
/// The tag is written in front of the resource as `<tag>:`. Raw content has
/// no tag and is shown in an iframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewType {
    /// Regular web content in an iframe.
    Raw,
    /// Interactive formatted JSON with collapsible nodes.
    Json,
    /// Interactive map from GeoJSON.
    Map,
    /// Rendered markdown.
    Markdown,
    /// Rendered Mermaid diagram.
    Mermaid,
    /// Plain text.
    Text,
    /// Rendered Vega or Vega-Lite chart.
    Vega,
}

impl ViewType {
    /// Prefix tag for this type, `None` for raw content.
    pub fn tag(self) -> Option<&'static str> {
        match self {
            Self::Raw => None,
            Self::Json => Some("json"),
            Self::Map => Some("map"),
            Self::Markdown => Some("md"),
            Self::Mermaid => Some("mermaid"),
            Self::Text => Some("text"),
            Self::Vega => Some("vega"),
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag().unwrap_or(""))
    }
}

/// Content a view displays: a URL, or inline content prefixed with
/// [`INLINE_PREFIX`].
///
/// No validation happens here; escaping is applied uniformly when the URL
/// is assembled.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Resource(String);

impl Resource {
    /// Reference content by URL (any scheme).
    pub fn url(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Embed `contents` directly in the URL.
    pub fn inline(contents: impl AsRef<str>) -> Self {
        Self(format!("{INLINE_PREFIX}{}", contents.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_inline(&self) -> bool {
        self.0.starts_with(INLINE_PREFIX)
    }
}

impl From<&str> for Resource {
    fn from(url: &str) -> Self {
        Self::url(url)
    }
}

impl From<String> for Resource {
    fn from(url: String) -> Self {
        Self::url(url)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named view of a resource, rendered in one region of the layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct View {
    pub name: ViewName,
    pub view_type: ViewType,
    pub resource: Resource,
}

impl View {
    /// Build a view of any type without validation.
    ///
    /// Prefer the typed constructors; raw content should go through
    /// [`View::iframe`] so its scheme is checked.
    pub fn new(
        name: impl Into<ViewName>,
        view_type: ViewType,
        resource: impl Into<Resource>,
    ) -> Self {
        Self {
            name: name.into(),
            view_type,
            resource: resource.into(),
        }
    }

    /// Regular content in an iframe.
    ///
    /// Flexivis can only embed `https`, `http` and `file` URLs.
    pub fn iframe(name: impl Into<ViewName>, url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        if !IFRAME_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
            return Err(Error::UnsupportedScheme { url });
        }
        Ok(Self::new(name, ViewType::Raw, Resource::url(url)))
    }

    /// Interactive formatted JSON viewer.
    pub fn json(name: impl Into<ViewName>, json: impl Into<Resource>) -> Self {
        Self::new(name, ViewType::Json, json)
    }

    /// Interactive map from GeoJSON.
    pub fn map(name: impl Into<ViewName>, geo_json: impl Into<Resource>) -> Self {
        Self::new(name, ViewType::Map, geo_json)
    }

    /// Rendered markdown.
    pub fn markdown(name: impl Into<ViewName>, markdown: impl Into<Resource>) -> Self {
        Self::new(name, ViewType::Markdown, markdown)
    }

    /// Rendered Mermaid diagram.
    pub fn mermaid(name: impl Into<ViewName>, diagram: impl Into<Resource>) -> Self {
        Self::new(name, ViewType::Mermaid, diagram)
    }

    /// Plain text.
    pub fn text(name: impl Into<ViewName>, text: impl Into<Resource>) -> Self {
        Self::new(name, ViewType::Text, text)
    }

    /// Rendered Vega or Vega-Lite chart.
    pub fn vega(name: impl Into<ViewName>, spec: impl Into<Resource>) -> Self {
        Self::new(name, ViewType::Vega, spec)
    }

    /// Give this view `percentage` of the space available in its parent join.
    pub fn occupying_percentage(self, percentage: u8) -> LayoutNode {
        LayoutNode::from(self).occupying_percentage(percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iframe_accepts_web_and_file_urls() {
        for url in ["https://wikipedia.org", "http://example.com", "file://results.html"] {
            let view = View::iframe("a", url).unwrap();
            assert_eq!(view.view_type, ViewType::Raw);
            assert_eq!(view.resource.as_str(), url);
        }
    }

    #[test]
    fn iframe_rejects_other_schemes() {
        for url in ["ftp://example.com", "inline:<h1>hi</h1>", "example.com", "HTTPS://x"] {
            let err = View::iframe("a", url).unwrap_err();
            assert_eq!(
                err,
                Error::UnsupportedScheme {
                    url: url.to_string()
                }
            );
        }
    }

    #[test]
    fn unsupported_scheme_message_names_the_url() {
        let err = View::iframe("a", "ftp://x").unwrap_err();
        assert!(err.to_string().contains("ftp://x"));
    }

    #[test]
    fn typed_constructors_set_tags() {
        let cases = [
            (View::json("a", "r"), Some("json")),
            (View::map("a", "r"), Some("map")),
            (View::markdown("a", "r"), Some("md")),
            (View::mermaid("a", "r"), Some("mermaid")),
            (View::text("a", "r"), Some("text")),
            (View::vega("a", "r"), Some("vega")),
        ];
        for (view, tag) in cases {
            assert_eq!(view.view_type.tag(), tag);
            assert_eq!(view.name.as_str(), "a");
            assert_eq!(view.resource.as_str(), "r");
        }
        assert_eq!(ViewType::Raw.tag(), None);
    }

    #[test]
    fn inline_resource_is_prefixed_without_escaping() {
        let resource = Resource::inline("# Title & more");
        assert_eq!(resource.as_str(), "inline:# Title & more");
        assert!(resource.is_inline());
        assert!(!Resource::url("https://x").is_inline());
    }

    #[test]
    fn view_name_as_layout() {
        assert_eq!(ViewName::from("map").as_layout().as_str(), "map");
    }
}
