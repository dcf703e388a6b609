//! Command-line front end for `flexivis-url`.
//!
//! Turns JSON layout documents (see [`flexivis_url::document`]) into
//! Flexivis links.
//!
//! # Binary
//!
//! ```sh
//! # Print the URL for a layout file
//! flexivis layout.json
//!
//! # Read the document from stdin and override the layout text
//! cat layout.json | flexivis --stdin --layout "(a-b)/c"
//!
//! # Print the JSON schema of layout documents
//! flexivis --schema
//! ```

pub mod config;
pub mod input;

pub use config::CliConfig;
pub use input::DocumentSource;
