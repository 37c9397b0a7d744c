use search_syntax::{ParseError, Term, parse_query};
use tracing::debug;

/// Search request as submitted by a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    /// Raw path filter, e.g. `London|2790/07`.
    pub path: String,
    /// Free text query, may carry a `path:"…"` clause.
    pub query: String,
    /// Collapse the files of one photo into a single row.
    pub merged: bool,
    /// Terms of `query` other than `path:`, left for the outer layers.
    pub terms: Vec<Term>,
}

impl SearchForm {
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            merged: true,
            ..Self::default()
        }
    }

    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            merged: true,
            ..Self::default()
        }
    }

    /// Parses `query`. A `path:` clause replaces the path field, so both
    /// entry points reach the compiler with the same string.
    pub fn parse_query_string(&mut self) -> Result<(), ParseError> {
        let query = parse_query(&self.query)?;
        if let Some(path) = query.path_clause() {
            debug!(path, previous = %self.path, "path clause overrides path field");
            self.path = path.to_string();
        }
        self.terms = query.without_path();
        Ok(())
    }
}
