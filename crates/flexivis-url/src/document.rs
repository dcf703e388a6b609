//! JSON layout documents.
//!
//! A [`LayoutDocument`] describes a layout tree in JSON so layouts can be
//! kept in files and turned into URLs without writing Rust:
//!
//! ```json
//! {
//!   "root": {
//!     "side_by_side": [
//!       { "view": { "name": "a", "type": "md", "resource": "https://example.com/a.md" } },
//!       { "view": { "name": "b", "type": "text", "resource": { "inline": "hello" } } }
//!     ]
//!   }
//! }
//! ```
//!
//! Documents are plain data. Converting one into a [`LayoutNode`] runs the
//! same checks as the Rust constructors, plus a check for empty view names.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::layout::LayoutNode;
use crate::url::UrlBuilder;
use crate::view::{Resource, View, ViewName, ViewType};

/// A layout tree plus optional URL settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct LayoutDocument {
    /// Layout text to use instead of the one compiled from `root`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    /// Flexivis deployment to link to. Defaults to the public one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Root of the layout tree.
    pub root: NodeSpec,
}

/// One node of a layout tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NodeSpec {
    /// A view, embedded in the URL.
    View(ViewSpec),
    /// A view referenced by name only.
    Name(String),
    /// Children rendered side by side (at least one).
    SideBySide(Vec<NodeSpec>),
    /// Children stacked vertically (at least one).
    VerticalStack(Vec<NodeSpec>),
    /// A sublayout occupying a percentage of its parent's space.
    Scaled(ScaledSpec),
}

/// A view description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ViewSpec {
    /// View name; layout atom and URL parameter key.
    pub name: String,
    /// Renderer. Omit for raw content shown in an iframe.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub view_type: Option<ViewTypeSpec>,
    /// Content to display.
    pub resource: ResourceSpec,
}

/// Renderer tags accepted in documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ViewTypeSpec {
    Raw,
    Json,
    Map,
    #[serde(rename = "md")]
    Markdown,
    Mermaid,
    Text,
    Vega,
}

/// Either a URL or inline content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ResourceSpec {
    Url(String),
    Inline(InlineSpec),
}

/// Content embedded in the URL: `{ "inline": "<content>" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct InlineSpec {
    pub inline: String,
}

/// A scaled sublayout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ScaledSpec {
    /// Share of the parent's space, 0-100.
    pub percentage: u8,
    pub layout: Box<NodeSpec>,
}

impl From<ViewTypeSpec> for ViewType {
    fn from(spec: ViewTypeSpec) -> Self {
        match spec {
            ViewTypeSpec::Raw => Self::Raw,
            ViewTypeSpec::Json => Self::Json,
            ViewTypeSpec::Map => Self::Map,
            ViewTypeSpec::Markdown => Self::Markdown,
            ViewTypeSpec::Mermaid => Self::Mermaid,
            ViewTypeSpec::Text => Self::Text,
            ViewTypeSpec::Vega => Self::Vega,
        }
    }
}

impl From<ResourceSpec> for Resource {
    fn from(spec: ResourceSpec) -> Self {
        match spec {
            ResourceSpec::Url(url) => Resource::url(url),
            ResourceSpec::Inline(InlineSpec { inline }) => Resource::inline(inline),
        }
    }
}

fn view_name(name: String) -> Result<ViewName> {
    if name.is_empty() {
        return Err(Error::EmptyViewName);
    }
    Ok(ViewName::from(name))
}

impl TryFrom<ViewSpec> for View {
    type Error = Error;

    fn try_from(spec: ViewSpec) -> Result<Self> {
        let name = view_name(spec.name)?;
        let view_type = spec.view_type.map_or(ViewType::Raw, ViewType::from);
        let resource = Resource::from(spec.resource);
        match view_type {
            ViewType::Raw => View::iframe(name, resource.as_str()),
            _ => Ok(View::new(name, view_type, resource)),
        }
    }
}

impl TryFrom<NodeSpec> for LayoutNode {
    type Error = Error;

    fn try_from(spec: NodeSpec) -> Result<Self> {
        match spec {
            NodeSpec::View(view) => Ok(LayoutNode::View(View::try_from(view)?)),
            NodeSpec::Name(name) => Ok(LayoutNode::Name(view_name(name)?)),
            NodeSpec::SideBySide(children) => LayoutNode::side_by_side(convert_all(children)?),
            NodeSpec::VerticalStack(children) => {
                LayoutNode::vertical_stack(convert_all(children)?)
            }
            NodeSpec::Scaled(scaled) => {
                let inner = LayoutNode::try_from(*scaled.layout)?;
                Ok(inner.occupying_percentage(scaled.percentage))
            }
        }
    }
}

fn convert_all(children: Vec<NodeSpec>) -> Result<Vec<LayoutNode>> {
    children.into_iter().map(LayoutNode::try_from).collect()
}

impl LayoutDocument {
    /// Parse a document from JSON text.
    pub fn from_json(json: &str) -> std::result::Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("failed to parse layout document: {e}"))
    }

    /// Load a document from a JSON file.
    pub fn load(path: &Path) -> std::result::Result<Self, String> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read layout document '{}': {e}", path.display()))?;
        let document = Self::from_json(&data)?;
        debug!("Loaded layout document from {}", path.display());
        Ok(document)
    }

    /// Save the document as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> std::result::Result<(), String> {
        let data = serde_json::to_string_pretty(self)
            .map_err(|e| format!("failed to serialize layout document: {e}"))?;
        std::fs::write(path, data)
            .map_err(|e| format!("failed to write layout document '{}': {e}", path.display()))
    }

    /// Validate and convert the tree.
    pub fn to_layout_node(&self) -> Result<LayoutNode> {
        LayoutNode::try_from(self.root.clone())
    }

    /// URL settings carried by the document, on top of the defaults.
    pub fn url_builder(&self) -> UrlBuilder {
        let mut builder = UrlBuilder::default();
        if let Some(base_url) = &self.base_url {
            builder = builder.with_base_url(base_url.as_str());
        }
        if let Some(layout) = &self.layout {
            builder = builder.with_layout(layout.as_str());
        }
        builder
    }

    /// Validate the tree and build its URL.
    pub fn to_url(&self) -> Result<String> {
        Ok(self.url_builder().build(&self.to_layout_node()?))
    }

    /// JSON schema describing the document format.
    pub fn json_schema() -> serde_json::Value {
        let schema = schemars::schema_for!(LayoutDocument);
        serde_json::to_value(schema).unwrap_or_else(|_| serde_json::json!({"type": "object"}))
    }
}
