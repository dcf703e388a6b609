//! Command-line settings layered over layout documents.
//!
//! Precedence, highest first: command-line flags, settings stored in the
//! layout document, library defaults.

use flexivis_url::{LayoutDocument, UrlBuilder};
use tracing::Level;

/// Settings for one `flexivis` invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Flexivis deployment to link to. Default: the document's, else the
    /// public deployment.
    pub base_url: Option<String>,
    /// Layout text override. Default: the document's, else the compiled one.
    pub layout: Option<String>,
    /// Number of `-v` flags. Default: `0` (warnings only).
    pub verbosity: u8,
}

impl CliConfig {
    /// Build the [`UrlBuilder`] for `document` with these overrides applied.
    pub fn build_url_builder(&self, document: &LayoutDocument) -> UrlBuilder {
        let mut builder = document.url_builder();
        if let Some(base_url) = &self.base_url {
            builder = builder.with_base_url(base_url.as_str());
        }
        if let Some(layout) = &self.layout {
            builder = builder.with_layout(layout.as_str());
        }
        builder
    }

    /// Maximum log level for the configured verbosity.
    pub fn log_level(&self) -> Level {
        match self.verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// Validate `document` and build its URL.
    pub fn render(&self, document: &LayoutDocument) -> Result<String, String> {
        let root = document
            .to_layout_node()
            .map_err(|e| format!("invalid layout: {e}"))?;
        Ok(self.build_url_builder(document).build(&root))
    }
}
