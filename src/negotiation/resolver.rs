//! Requested format → representation.

use mime_guess::mime::{self, Mime};

use crate::negotiation::media_types::{longest, ExtensionTable, RegistryTable, StaticTable};

/// Content type used whenever the requested one cannot be honored.
pub const DEFAULT_CONTENT_TYPE: &str = "text/html";

/// Extension paired with [`DEFAULT_CONTENT_TYPE`].
pub const DEFAULT_EXTENSION: &str = ".html";

/// The resolved wire format of a response: which file extension to look up
/// and which `Content-Type` to send.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Representation {
    extension: String,
    content_type: String,
}

impl Representation {
    /// Build a representation; a missing leading dot is added to `extension`.
    pub fn new(extension: &str, content_type: impl Into<String>) -> Self {
        let extension = if extension.starts_with('.') {
            extension.to_string()
        } else {
            format!(".{extension}")
        };
        Self {
            extension,
            content_type: content_type.into(),
        }
    }

    /// `text/html` / `.html`.
    pub fn html() -> Self {
        Self::new(DEFAULT_EXTENSION, DEFAULT_CONTENT_TYPE)
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }
}

/// Maps the value of a format-request header to a [`Representation`].
///
/// Extension tables are tried in order; the first table that recognizes the
/// media type supplies the candidates and the longest candidate is used.
/// Resolution never fails: anything unusable becomes [`Representation::html`].
#[derive(Debug)]
pub struct FormatResolver {
    tables: Vec<Box<dyn ExtensionTable>>,
}

impl Default for FormatResolver {
    fn default() -> Self {
        Self::with_tables(vec![
            Box::new(StaticTable::builtin()),
            Box::new(RegistryTable),
        ])
    }
}

impl FormatResolver {
    pub fn with_tables(tables: Vec<Box<dyn ExtensionTable>>) -> Self {
        Self { tables }
    }

    /// Resolve a raw format header value (a media type or an Accept-style
    /// list, of which only the first entry counts).
    pub fn resolve(&self, requested: &str) -> Representation {
        let first = requested.split(',').next().unwrap_or_default().trim();

        let content_type = if first.is_empty() {
            tracing::debug!(
                content_type = DEFAULT_CONTENT_TYPE,
                "Format not specified, using default"
            );
            DEFAULT_CONTENT_TYPE
        } else {
            first
        };

        let mime: Mime = match content_type.parse() {
            Ok(mime) => mime,
            Err(e) => {
                tracing::debug!(
                    format = %content_type,
                    error = %e,
                    "Unparsable media type, using default"
                );
                return Representation::html();
            }
        };

        if mime.type_() == mime::STAR || mime.subtype() == mime::STAR {
            tracing::debug!(
                format = %content_type,
                "Wildcard media range, using default"
            );
            return Representation::html();
        }

        let candidates = self
            .tables
            .iter()
            .find_map(|table| table.extensions(mime.essence_str()))
            .unwrap_or_default();

        match longest(&candidates) {
            Some(extension) => Representation::new(extension, content_type),
            None => {
                tracing::info!(
                    format = %content_type,
                    "No extension known for media type, using default"
                );
                Representation::html()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_representation_adds_dot() {
        let rep = Representation::new("json", "application/json");
        assert_eq!(rep.extension(), ".json");
        let rep = Representation::new(".json", "application/json");
        assert_eq!(rep.extension(), ".json");
    }

    #[test]
    fn test_resolve_html() {
        let rep = FormatResolver::default().resolve("text/html");
        assert_eq!(rep, Representation::new(".html", "text/html"));
    }

    #[test]
    fn test_resolve_json() {
        let rep = FormatResolver::default().resolve("application/json");
        assert_eq!(rep.extension(), ".json");
        assert_eq!(rep.content_type(), "application/json");
    }

    #[test]
    fn test_parameters_ignored_for_lookup_but_echoed() {
        let rep = FormatResolver::default().resolve("application/json; charset=utf-8");
        assert_eq!(rep.extension(), ".json");
        assert_eq!(rep.content_type(), "application/json; charset=utf-8");
    }

    #[test]
    fn test_only_first_list_entry_counts() {
        let rep = FormatResolver::default().resolve(" application/json , text/html;q=0.9");
        assert_eq!(rep, Representation::new(".json", "application/json"));
    }

    #[test]
    fn test_empty_falls_back_to_html() {
        assert_eq!(FormatResolver::default().resolve(""), Representation::html());
        assert_eq!(FormatResolver::default().resolve("   "), Representation::html());
    }

    #[test]
    fn test_unparsable_falls_back_to_html() {
        assert_eq!(
            FormatResolver::default().resolve("not a media type"),
            Representation::html()
        );
    }

    #[test]
    fn test_unknown_falls_back_to_html() {
        let resolver = FormatResolver::default();
        assert_eq!(resolver.resolve("application/weird"), Representation::html());
        assert_eq!(resolver.resolve("*/*"), Representation::html());
    }

    #[test]
    fn test_wildcard_ranges_fall_back_to_html() {
        let resolver = FormatResolver::default();
        assert_eq!(resolver.resolve("text/*"), Representation::html());
        assert_eq!(resolver.resolve("image/*"), Representation::html());
        assert_eq!(resolver.resolve("*/*;q=0.8"), Representation::html());
        assert_eq!(resolver.resolve("*/*, application/json"), Representation::html());
    }

    #[test]
    fn test_registry_consulted_after_builtin() {
        let rep = FormatResolver::default().resolve("text/csv");
        assert_eq!(rep.extension(), ".csv");
        assert_eq!(rep.content_type(), "text/csv");
    }

    #[test]
    fn test_first_table_that_knows_type_wins() {
        const SHORT: &[(&str, &[&str])] = &[("text/html", &["htm"])];
        let resolver = FormatResolver::with_tables(vec![
            Box::new(StaticTable::new(SHORT)),
            Box::new(StaticTable::builtin()),
        ]);
        assert_eq!(resolver.resolve("text/html").extension(), ".htm");
    }

    #[test]
    fn test_empty_candidate_set_falls_back() {
        const EMPTY: &[(&str, &[&str])] = &[("application/x-empty", &[])];
        let resolver = FormatResolver::with_tables(vec![Box::new(StaticTable::new(EMPTY))]);
        assert_eq!(resolver.resolve("application/x-empty"), Representation::html());
    }

    #[test]
    fn test_longest_candidate_selected() {
        const TIED: &[(&str, &[&str])] = &[("application/x-tied", &["ab", "abc", "xyz", "a"])];
        let resolver = FormatResolver::with_tables(vec![Box::new(StaticTable::new(TIED))]);
        assert_eq!(resolver.resolve("application/x-tied").extension(), ".abc");
    }
}
