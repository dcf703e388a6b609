//! Assembling Flexivis URLs.
//!
//! Parameters live in the URL fragment:
//!
//! ```text
//! https://flexivis.infrastruktur.link#layout=<layout>&<name>=[<type>:]<resource>&...
//! ```
//!
//! View names and type tags are written verbatim; resources go through
//! [`escape_parameter_value`].

use std::fmt;

use tracing::debug;

use crate::encode::escape_parameter_value;
use crate::layout::LayoutNode;
use crate::view::View;

/// Base URL of the public Flexivis deployment.
pub const FLEXIVIS_BASE_URL: &str = "https://flexivis.infrastruktur.link";

/// Layout text the service reads as "the single view named `url` fills the
/// viewport". A layout equal to it is left out of the URL.
pub const SINGLE_VIEW_LAYOUT: &str = "url";

/// Layout text as documented at <https://flexivis.infrastruktur.link/#layout>.
///
/// Usually produced by compiling a [`LayoutNode`], but it can also be
/// written by hand and combined with an explicit view list via
/// [`Layout::to_url`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Layout(String);

impl Layout {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Build a Flexivis URL from this layout and `views`.
    ///
    /// An empty layout emits no `layout=` parameter. Use
    /// [`UrlBuilder::build_with_layout`] to link to another deployment.
    pub fn to_url<'a>(&self, views: impl IntoIterator<Item = &'a View>) -> String {
        UrlBuilder::default().build_with_layout(self, views)
    }
}

impl From<&str> for Layout {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Layout {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds URLs from structured layouts.
///
/// Defaults to the public deployment and to the layout text compiled from
/// the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    /// Service base URL. Default: [`FLEXIVIS_BASE_URL`].
    pub base_url: String,
    /// Layout text used instead of the compiled one. Default: `None`.
    pub layout_override: Option<Layout>,
}

impl Default for UrlBuilder {
    fn default() -> Self {
        Self {
            base_url: FLEXIVIS_BASE_URL.to_string(),
            layout_override: None,
        }
    }
}

impl UrlBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point at a different Flexivis deployment.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Use `layout` as the layout text instead of the compiled one.
    pub fn with_layout(mut self, layout: impl Into<Layout>) -> Self {
        self.layout_override = Some(layout.into());
        self
    }

    /// Compile `root` and build its URL.
    pub fn build(&self, root: &LayoutNode) -> String {
        let compiled = root.compile();
        let text = match &self.layout_override {
            Some(layout) => layout.as_str(),
            None => compiled.text.as_str(),
        };
        let layout = (text != SINGLE_VIEW_LAYOUT).then_some(text);
        debug!(
            layout = text,
            views = compiled.views.len(),
            overridden = self.layout_override.is_some(),
            "building Flexivis URL"
        );
        write_url(&self.base_url, layout, compiled.views)
    }

    /// Build a URL from a hand-written `layout` and an explicit view list.
    ///
    /// `layout` takes the place of any configured override. An empty layout
    /// emits no `layout=` parameter.
    pub fn build_with_layout<'a>(
        &self,
        layout: &Layout,
        views: impl IntoIterator<Item = &'a View>,
    ) -> String {
        let text = (!layout.is_empty()).then_some(layout.as_str());
        write_url(&self.base_url, text, views)
    }
}

/// Build a Flexivis URL for `root` with the default [`UrlBuilder`].
pub fn url(root: &LayoutNode) -> String {
    UrlBuilder::default().build(root)
}

fn write_url<'a>(
    base_url: &str,
    layout: Option<&str>,
    views: impl IntoIterator<Item = &'a View>,
) -> String {
    let mut url = String::from(base_url);
    url.push('#');
    let mut has_param = false;
    if let Some(layout) = layout {
        url.push_str("layout=");
        url.push_str(layout);
        has_param = true;
    }
    for view in views {
        if has_param {
            url.push('&');
        }
        has_param = true;
        url.push_str(view.name.as_str());
        url.push('=');
        if let Some(tag) = view.view_type.tag() {
            url.push_str(tag);
            url.push(':');
        }
        url.push_str(&escape_parameter_value(view.resource.as_str()));
    }
    url
}
