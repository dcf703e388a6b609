//! Where layout documents come from.

use std::io::{self, Read};
use std::path::PathBuf;

use flexivis_url::LayoutDocument;

/// Source of a layout document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Stdin,
    File(PathBuf),
}

impl DocumentSource {
    /// Resolve the positional file argument and the `--stdin` flag.
    ///
    /// A file argument of `-` means stdin.
    pub fn from_args(file: Option<PathBuf>, stdin: bool) -> Result<Self, String> {
        match (file, stdin) {
            (Some(path), false) if path.as_os_str() == "-" => Ok(Self::Stdin),
            (Some(path), false) => Ok(Self::File(path)),
            (None, true) => Ok(Self::Stdin),
            (Some(_), true) => Err("provide a layout file or --stdin, not both".to_string()),
            (None, false) => Err("provide a layout file or --stdin".to_string()),
        }
    }

    /// Read and parse the document.
    pub fn read(&self) -> Result<LayoutDocument, String> {
        match self {
            Self::Stdin => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .map_err(|e| format!("failed to read stdin: {e}"))?;
                LayoutDocument::from_json(&buf)
            }
            Self::File(path) => LayoutDocument::load(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_sources() {
        assert_eq!(
            DocumentSource::from_args(Some("layout.json".into()), false).unwrap(),
            DocumentSource::File("layout.json".into())
        );
        assert_eq!(
            DocumentSource::from_args(Some("-".into()), false).unwrap(),
            DocumentSource::Stdin
        );
        assert_eq!(
            DocumentSource::from_args(None, true).unwrap(),
            DocumentSource::Stdin
        );
        assert!(DocumentSource::from_args(None, false).is_err());
        assert!(DocumentSource::from_args(Some("a.json".into()), true).is_err());
    }

    #[test]
    fn reads_documents_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        std::fs::write(
            &path,
            r##"{ "root": { "view": { "name": "url", "type": "md", "resource": { "inline": "# Hi" } } } }"##,
        )
        .unwrap();

        let document = DocumentSource::File(path).read().unwrap();
        assert_eq!(
            document.to_url().unwrap(),
            "https://flexivis.infrastruktur.link#url=md:inline:%23+Hi"
        );
    }

    #[test]
    fn reports_malformed_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = DocumentSource::File(path).read().unwrap_err();
        assert!(err.contains("failed to parse layout document"));
    }
}
