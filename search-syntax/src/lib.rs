//! # Free-text search grammar
//!
//! `search-syntax` tokenizes the free-text search box into words, quoted
//! phrases and `name:argument` filters. The path compiler only cares about the
//! `path:` filter; every other filter is kept verbatim for the layers that
//! understand it.
//!
//! ## Example
//! ```
//! use search_syntax::{extract_path_clause, parse_query, FilterKind, Term};
//!
//! let query = parse_query("holiday path:\"2000/02\" camera:canon").unwrap();
//! assert!(matches!(&query.terms[0], Term::Word(word) if word == "holiday"));
//! assert!(matches!(&query.terms[1], Term::Filter(filter) if filter.kind == FilterKind::Path));
//! assert_eq!(query.path_clause(), Some("2000/02"));
//!
//! // Quotes that are not followed by whitespace belong to the value.
//! assert_eq!(
//!     extract_path_clause("path:\"20\"00/0\"2\"").unwrap().as_deref(),
//!     Some("20\"00/0\"2")
//! );
//! ```

use std::fmt;

/// Parses a free-text query string into its terms.
pub fn parse_query(input: &str) -> Result<Query, ParseError> {
    Parser::new(input).parse()
}

/// Returns the argument of the last `path:` filter in `query`, if any.
///
/// A `path:` filter without an argument is treated as absent.
pub fn extract_path_clause(query: &str) -> Result<Option<String>, ParseError> {
    Ok(parse_query(query)?.path_clause().map(str::to_string))
}

/// Whitespace separated terms in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub terms: Vec<Term>,
}

impl Query {
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Argument of the last `path:` filter carrying one.
    pub fn path_clause(&self) -> Option<&str> {
        self.terms.iter().rev().find_map(|term| match term {
            Term::Filter(Filter {
                kind: FilterKind::Path,
                argument: Some(argument),
            }) => Some(argument.raw.as_str()),
            _ => None,
        })
    }

    /// Everything except `path:` filters, for the layers evaluating other
    /// keywords.
    pub fn without_path(self) -> Vec<Term> {
        self.terms
            .into_iter()
            .filter(|term| !matches!(term, Term::Filter(filter) if filter.kind == FilterKind::Path))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// A bare token such as `holiday` or `2790*`.
    ///
    /// ```
    /// use search_syntax::{parse_query, Term};
    /// let query = parse_query("2790*").unwrap();
    /// assert!(matches!(&query.terms[0], Term::Word(word) if word == "2790*"));
    /// ```
    Word(String),
    /// Quoted phrase such as `"summer holiday"`.
    ///
    /// ```
    /// use search_syntax::{parse_query, Term};
    /// let query = parse_query("\"summer holiday\"").unwrap();
    /// assert!(matches!(&query.terms[0], Term::Phrase(phrase) if phrase == "summer holiday"));
    /// ```
    Phrase(String),
    /// `name:argument` filter.
    Filter(Filter),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub kind: FilterKind,
    pub argument: Option<FilterArgument>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterKind {
    /// Folder path filter (`path:`).
    Path,
    /// Any other filter name, lowercased.
    Custom(String),
}

impl FilterKind {
    fn from_name(name: &str) -> Self {
        let lower = name.to_ascii_lowercase();
        match lower.as_str() {
            "path" => FilterKind::Path,
            _ => FilterKind::Custom(lower),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterArgument {
    pub raw: String,
    pub kind: ArgumentKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentKind {
    /// Runs up to the next whitespace: `path:2790/07`.
    Bare,
    /// Double quoted: `path:"2000 /02 "`.
    Phrase,
}

/// The query cannot be tokenized at all, e.g. an unterminated quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub position: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at byte {})", self.message, self.position)
    }
}

impl std::error::Error for ParseError {}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn parse(mut self) -> Result<Query, ParseError> {
        let mut terms = Vec::new();
        loop {
            self.skip_ws();
            if self.eof() {
                break;
            }
            if let Some(term) = self.parse_term()? {
                terms.push(term);
            }
        }
        Ok(Query { terms })
    }

    // An empty phrase (`""`) produces no term.
    fn parse_term(&mut self) -> Result<Option<Term>, ParseError> {
        if self.peek_char() == Some('"') {
            let text = self.parse_phrase_string()?;
            return Ok((!text.is_empty()).then_some(Term::Phrase(text)));
        }
        self.parse_word_like().map(Some)
    }

    // Stops at the first `:` preceded by a valid filter name so the argument
    // can be parsed on its own.
    fn parse_word_like(&mut self) -> Result<Term, ParseError> {
        let start = self.pos;
        while let Some(ch) = self.peek_char() {
            if ch == ':' && self.pos > start {
                let name = &self.input[start..self.pos];
                if is_valid_filter_name(name) {
                    self.advance_char();
                    return self.parse_filter_term(name);
                }
            }
            if ch.is_whitespace() {
                break;
            }
            self.advance_char();
        }

        if start == self.pos {
            return Err(self.error("expected term"));
        }
        Ok(Term::Word(self.input[start..self.pos].to_string()))
    }

    fn parse_filter_term(&mut self, name: &str) -> Result<Term, ParseError> {
        let kind = FilterKind::from_name(name);
        let argument = self.parse_filter_argument()?;
        Ok(Term::Filter(Filter { kind, argument }))
    }

    // The argument has to follow the colon directly; `path: x` is an empty
    // filter followed by the word `x`.
    fn parse_filter_argument(&mut self) -> Result<Option<FilterArgument>, ParseError> {
        match self.peek_char() {
            None => Ok(None),
            Some(ch) if ch.is_whitespace() => Ok(None),
            Some('"') => {
                let raw = self.parse_phrase_string()?;
                Ok(Some(FilterArgument {
                    raw,
                    kind: ArgumentKind::Phrase,
                }))
            }
            Some(_) => {
                let start = self.pos;
                while let Some(ch) = self.peek_char() {
                    if ch.is_whitespace() {
                        break;
                    }
                    self.advance_char();
                }
                Ok(Some(FilterArgument {
                    raw: self.input[start..self.pos].to_string(),
                    kind: ArgumentKind::Bare,
                }))
            }
        }
    }

    // No escape syntax inside quotes. A `"` only closes the phrase when it is
    // followed by whitespace or the end of input, so values may carry quotes
    // of their own: `"20"00/0"2"` reads as `20"00/0"2`.
    fn parse_phrase_string(&mut self) -> Result<String, ParseError> {
        let quote_pos = self.pos;
        self.advance_char(); // opening quote
        let body_start = self.pos;
        while let Some(ch) = self.peek_char() {
            if ch == '"' && self.closes_phrase() {
                let text = self.input[body_start..self.pos].to_string();
                self.advance_char();
                return Ok(text);
            }
            self.advance_char();
        }

        Err(ParseError {
            message: "missing closing quote".into(),
            position: quote_pos,
        })
    }

    fn closes_phrase(&self) -> bool {
        self.remaining()[1..]
            .chars()
            .next()
            .is_none_or(char::is_whitespace)
    }

    fn skip_ws(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch.is_whitespace() {
                self.advance_char();
            } else {
                break;
            }
        }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn advance_char(&mut self) {
        if let Some(ch) = self.peek_char() {
            self.pos += ch.len_utf8();
        }
    }

    fn eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError {
            message: message.into(),
            position: self.pos,
        }
    }
}

fn is_valid_filter_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'))
}
