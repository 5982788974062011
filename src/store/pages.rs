//! Error page lookup with fallback.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;

use crate::code::ErrorCode;
use crate::negotiation::Representation;
use crate::store::source::{FileSource, FsSource};

/// Body served when no page file matches.
pub const DEFAULT_BODY: &str = "Unknown error";

/// A file-name scheme tried against the page root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// `{code}{ext}`, e.g. `404.html`.
    Exact,
    /// `{digit}xx{ext}`, e.g. `4xx.html`.
    Class,
}

impl Lookup {
    /// Lookup order. The literal default follows the last entry.
    pub const ORDER: [Lookup; 2] = [Lookup::Exact, Lookup::Class];

    pub fn file_name(self, code: ErrorCode, extension: &str) -> String {
        match self {
            Lookup::Exact => format!("{code}{extension}"),
            Lookup::Class => format!("{}xx{extension}", code.class_digit()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Lookup::Exact => "exact",
            Lookup::Class => "class",
        }
    }
}

/// Where a resolved body came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodySource {
    File { lookup: Lookup, path: PathBuf },
    Default,
}

impl BodySource {
    pub fn label(&self) -> &'static str {
        match self {
            BodySource::File { lookup, .. } => lookup.as_str(),
            BodySource::Default => "default",
        }
    }
}

/// A body and its provenance.
#[derive(Debug, Clone)]
pub struct ResolvedBody {
    pub bytes: Bytes,
    pub source: BodySource,
}

/// Pre-authored error pages under a root directory.
#[derive(Debug, Clone)]
pub struct ErrorPages {
    root: PathBuf,
    default_body: Bytes,
    source: Arc<dyn FileSource>,
}

impl ErrorPages {
    /// Pages read from the local filesystem under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_source(root, Arc::new(FsSource))
    }

    pub fn with_source(root: impl Into<PathBuf>, source: Arc<dyn FileSource>) -> Self {
        Self {
            root: root.into(),
            default_body: Bytes::from_static(DEFAULT_BODY.as_bytes()),
            source,
        }
    }

    /// Replace the literal fallback body.
    pub fn with_default_body(mut self, body: impl Into<Bytes>) -> Self {
        self.default_body = body.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn default_body(&self) -> Bytes {
        self.default_body.clone()
    }

    /// Resolve the body for `code` in the given representation. Always
    /// produces bytes: exact file, then class file, then the literal default.
    pub fn load(&self, representation: &Representation, code: ErrorCode) -> ResolvedBody {
        for lookup in Lookup::ORDER {
            let path = self
                .root
                .join(lookup.file_name(code, representation.extension()));

            match self.source.read(&path) {
                Ok(bytes) => {
                    tracing::info!(
                        code = %code,
                        format = %representation.content_type(),
                        path = %path.display(),
                        "Serving custom error response"
                    );
                    return ResolvedBody {
                        bytes: Bytes::from(bytes),
                        source: BodySource::File { lookup, path },
                    };
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        lookup = lookup.as_str(),
                        error = %e,
                        "Error opening error page"
                    );
                }
            }
        }

        tracing::warn!(
            code = %code,
            format = %representation.content_type(),
            "No error page found, serving default body"
        );
        ResolvedBody {
            bytes: self.default_body.clone(),
            source: BodySource::Default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io;
    use std::sync::Mutex;

    /// In-memory files that records every path read.
    #[derive(Debug, Default)]
    struct MemorySource {
        files: HashMap<PathBuf, Vec<u8>>,
        reads: Mutex<Vec<PathBuf>>,
    }

    impl MemorySource {
        fn with(files: &[(&str, &str)]) -> Self {
            Self {
                files: files
                    .iter()
                    .map(|(p, b)| (PathBuf::from(p), b.as_bytes().to_vec()))
                    .collect(),
                reads: Mutex::new(Vec::new()),
            }
        }

        fn reads(&self) -> Vec<PathBuf> {
            self.reads.lock().unwrap().clone()
        }
    }

    impl FileSource for MemorySource {
        fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
            self.reads.lock().unwrap().push(path.to_path_buf());
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
        }
    }

    fn code(c: u32) -> ErrorCode {
        ErrorCode::new(c)
    }

    #[test]
    fn test_file_names() {
        assert_eq!(Lookup::Exact.file_name(code(404), ".html"), "404.html");
        assert_eq!(Lookup::Class.file_name(code(503), ".json"), "5xx.json");
        assert_eq!(Lookup::Exact.file_name(code(1000), ".html"), "1000.html");
        assert_eq!(Lookup::Class.file_name(code(1000), ".html"), "1xx.html");
    }

    #[test]
    fn test_raw_code_outside_status_range_drives_lookup() {
        let source = Arc::new(MemorySource::with(&[("/www/1xx.html", "out of range")]));
        let pages = ErrorPages::with_source("/www", source.clone());

        let body = pages.load(&Representation::html(), code(1000));
        assert_eq!(body.bytes, Bytes::from_static(b"out of range"));
        assert_eq!(body.source.label(), "class");
        assert_eq!(
            source.reads(),
            vec![
                PathBuf::from("/www/1000.html"),
                PathBuf::from("/www/1xx.html")
            ]
        );
    }

    #[test]
    fn test_exact_file_wins_without_class_lookup() {
        let source = Arc::new(MemorySource::with(&[
            ("/www/404.html", "<h1>not found</h1>"),
            ("/www/4xx.html", "<h1>client error</h1>"),
        ]));
        let pages = ErrorPages::with_source("/www", source.clone());

        let body = pages.load(&Representation::html(), code(404));
        assert_eq!(body.bytes, Bytes::from_static(b"<h1>not found</h1>"));
        assert_eq!(body.source.label(), "exact");
        assert_eq!(source.reads(), vec![PathBuf::from("/www/404.html")]);
    }

    #[test]
    fn test_class_file_fallback() {
        let source = Arc::new(MemorySource::with(&[("/www/5xx.json", "{\"error\":true}")]));
        let pages = ErrorPages::with_source("/www", source.clone());

        let body = pages.load(&Representation::new(".json", "application/json"), code(503));
        assert_eq!(body.bytes, Bytes::from_static(b"{\"error\":true}"));
        assert_eq!(
            body.source,
            BodySource::File {
                lookup: Lookup::Class,
                path: PathBuf::from("/www/5xx.json"),
            }
        );
        assert_eq!(
            source.reads(),
            vec![
                PathBuf::from("/www/503.json"),
                PathBuf::from("/www/5xx.json")
            ]
        );
    }

    #[test]
    fn test_literal_default_when_nothing_matches() {
        let pages = ErrorPages::with_source("/www", Arc::new(MemorySource::default()));

        let body = pages.load(&Representation::html(), code(418));
        assert_eq!(body.bytes, Bytes::from_static(b"Unknown error"));
        assert_eq!(body.source, BodySource::Default);
    }

    #[test]
    fn test_extension_must_match() {
        let source = Arc::new(MemorySource::with(&[("/www/404.html", "html")]));
        let pages = ErrorPages::with_source("/www", source);

        let body = pages.load(&Representation::new(".json", "application/json"), code(404));
        assert_eq!(body.source, BodySource::Default);
    }

    #[test]
    fn test_custom_default_body() {
        let pages = ErrorPages::with_source("/www", Arc::new(MemorySource::default()))
            .with_default_body("oops");
        assert_eq!(
            pages.load(&Representation::html(), code(500)).bytes,
            Bytes::from_static(b"oops")
        );
    }

    #[test]
    fn test_reads_real_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("4xx.html"), "client error").unwrap();
        let pages = ErrorPages::new(dir.path());

        let body = pages.load(&Representation::html(), code(410));
        assert_eq!(body.bytes, Bytes::from_static(b"client error"));
        assert_eq!(body.source.label(), "class");
    }
}
