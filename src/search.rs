use crate::{MergeOptions, PathLookup, SearchForm, merge_alternatives};
use anyhow::Result;
use path_index::SearchOptions;
use path_segmentation::compile_path_query;
use search_cancel::CancellationToken;
use serde::Serialize;
use std::time::Instant;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome<R> {
    pub rows: Vec<R>,
    pub total: usize,
}

impl<R> SearchOutcome<R> {
    fn new(rows: Vec<R>) -> Self {
        let total = rows.len();
        Self { rows, total }
    }
}

/// Runs the path filter of `form` against `lookup`.
///
/// Call [`SearchForm::parse_query_string`] first so a `path:` clause in the
/// free text query has been applied. An empty path field means no path filter
/// was requested and yields no rows without touching `lookup`.
pub fn search_paths<L>(
    form: &SearchForm,
    lookup: &L,
    options: SearchOptions,
    limit: Option<usize>,
    token: CancellationToken,
) -> Result<Option<SearchOutcome<L::Row>>>
where
    L: PathLookup + ?Sized,
{
    if form.path.is_empty() {
        return Ok(Some(SearchOutcome::new(Vec::new())));
    }
    let search_time = Instant::now();
    let alternatives = compile_path_query(&form.path);
    let merge = MergeOptions {
        merged: form.merged,
        limit,
    };
    let rows = merge_alternatives(&alternatives, lookup, options, merge, token)?;
    info!(
        path = %form.path,
        rows = ?rows.as_ref().map(Vec::len),
        "Path search time: {:?}",
        search_time.elapsed()
    );
    Ok(rows.map(SearchOutcome::new))
}
