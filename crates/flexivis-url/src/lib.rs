//! Programmatically build [Flexivis](https://flexivis.infrastruktur.link/) links.
//!
//! Flexivis renders a set of named views (markdown, JSON, maps, Mermaid and
//! Vega diagrams, plain text, or any web page) arranged by a small layout
//! language, all described in the URL fragment. This crate lets you describe
//! that arrangement as a tree of [`LayoutNode`]s and turns it into a single
//! URL with the layout text and every view parameter correctly encoded.
//!
//! # Getting started
//!
//! ```
//! use flexivis_url::{LayoutNode, View, url};
//!
//! let base = "https://raw.githubusercontent.com/programmiersportgruppe/flexivis/master/docs/samples";
//! let root = LayoutNode::side_by_side([
//!     LayoutNode::vertical_stack([
//!         View::markdown("explanation", format!("{base}/berlin-walk.md")).occupying_percentage(30),
//!         View::map("map", format!("{base}/berlin-walk.json")).into(),
//!     ])?,
//!     View::json("source", format!("{base}/berlin-walk.json")).into(),
//! ])?;
//!
//! let link = url(&root);
//! assert!(link.starts_with("https://flexivis.infrastruktur.link#layout=(explanation30-map)/source&"));
//! # Ok::<(), flexivis_url::Error>(())
//! ```
//!
//! # Modules
//!
//! - [`layout`] — layout trees and their compilation to layout text
//! - [`view`] — views, view types and resources
//! - [`encode`] — the parameter value encoding
//! - [`url`] — URL assembly and the [`UrlBuilder`]
//! - [`document`] — JSON layout documents and their schema

pub mod document;
pub mod encode;
pub mod error;
pub mod layout;
pub mod url;
pub mod view;

pub use document::LayoutDocument;
pub use encode::escape_parameter_value;
pub use error::{Error, Result};
pub use layout::{Children, CompiledLayout, JoinKind, LayoutNode};
pub use url::{FLEXIVIS_BASE_URL, Layout, SINGLE_VIEW_LAYOUT, UrlBuilder, url};
pub use view::{INLINE_PREFIX, Resource, View, ViewName, ViewType};
