//! Media type → file extension tables.
//!
//! # Responsibilities
//! - Answer "which extensions belong to this media type?"
//! - Distinguish "unknown media type" (`None`) from an answer
//!
//! # Design Decisions
//! - Tables are consulted in order; the first one that knows a type wins
//! - The built-in table covers the common web formats so well-known types
//!   resolve the same way regardless of the registry crate's contents
//! - Extensions are stored without the leading dot

/// A lookup strategy from media type essence (`type/subtype`, lowercase,
/// no parameters) to candidate extensions.
pub trait ExtensionTable: Send + Sync + std::fmt::Debug {
    /// Candidate extensions for `essence`, or `None` if the type is unknown.
    fn extensions(&self, essence: &str) -> Option<Vec<&'static str>>;
}

type Entry = (&'static str, &'static [&'static str]);

const BUILTIN: &[Entry] = &[
    ("application/javascript", &["js", "mjs"]),
    ("application/json", &["json"]),
    ("application/pdf", &["pdf"]),
    ("application/wasm", &["wasm"]),
    ("application/xml", &["xml"]),
    ("image/avif", &["avif"]),
    ("image/gif", &["gif"]),
    ("image/jpeg", &["jpeg", "jpg"]),
    ("image/png", &["png"]),
    ("image/svg+xml", &["svg"]),
    ("image/webp", &["webp"]),
    ("text/css", &["css"]),
    ("text/html", &["htm", "html"]),
    ("text/javascript", &["js", "mjs"]),
    ("text/plain", &["txt"]),
    ("text/xml", &["xml"]),
];

/// A fixed in-memory table.
#[derive(Debug, Clone, Copy)]
pub struct StaticTable {
    entries: &'static [Entry],
}

impl StaticTable {
    pub const fn new(entries: &'static [(&'static str, &'static [&'static str])]) -> Self {
        Self { entries }
    }

    /// The common web formats.
    pub const fn builtin() -> Self {
        Self::new(BUILTIN)
    }
}

impl ExtensionTable for StaticTable {
    fn extensions(&self, essence: &str) -> Option<Vec<&'static str>> {
        self.entries
            .iter()
            .find(|(media_type, _)| media_type.eq_ignore_ascii_case(essence))
            .map(|(_, exts)| exts.to_vec())
    }
}

/// The general-purpose registry shipped with `mime_guess`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistryTable;

impl ExtensionTable for RegistryTable {
    fn extensions(&self, essence: &str) -> Option<Vec<&'static str>> {
        // The registry expands `type/*` into every extension of the type.
        if essence.contains('*') {
            return None;
        }
        mime_guess::get_mime_extensions_str(essence).map(|exts| exts.to_vec())
    }
}

/// Pick the longest candidate; ties go to the first maximal one.
pub fn longest<'a>(candidates: &[&'a str]) -> Option<&'a str> {
    candidates.iter().copied().fold(None, |best, candidate| match best {
        Some(current) if current.len() >= candidate.len() => Some(current),
        _ => Some(candidate),
    })
}
