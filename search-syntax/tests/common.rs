#![allow(dead_code)]
//! Shared helpers for `search-syntax` integration tests.

use search_syntax::*;

pub fn parse_ok(input: &str) -> Vec<Term> {
    parse_query(input).unwrap().terms
}

pub fn parse_err(input: &str) -> ParseError {
    parse_query(input).unwrap_err()
}

pub fn path_clause(input: &str) -> Option<String> {
    extract_path_clause(input).unwrap()
}

pub fn word_is(term: &Term, expected: &str) {
    match term {
        Term::Word(w) => assert_eq!(w, expected),
        other => panic!("expected Word, got: {other:?}"),
    }
}

pub fn phrase_is(term: &Term, expected: &str) {
    match term {
        Term::Phrase(p) => assert_eq!(p, expected),
        other => panic!("expected Phrase, got: {other:?}"),
    }
}

pub fn filter_is(term: &Term, kind: &FilterKind, raw: Option<&str>) {
    match term {
        Term::Filter(filter) => {
            assert_eq!(&filter.kind, kind);
            assert_eq!(filter.argument.as_ref().map(|arg| arg.raw.as_str()), raw);
        }
        other => panic!("expected Filter, got: {other:?}"),
    }
}

/// Wraps `value` the way the search box does: `path:"<value>"`.
pub fn quoted_path(value: &str) -> String {
    format!("path:\"{value}\"")
}
