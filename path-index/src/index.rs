use crate::{AlternativeMatcher, PathRecord, SearchOptions};
use anyhow::{Context, Result, anyhow};
use path_segmentation::CompiledAlternative;
use rayon::prelude::*;
use search_cancel::{CANCEL_CHECK_INTERVAL, CancellationToken};
use std::{io::Read, time::Instant};
use tracing::debug;

/// In-memory table of path records, answering one compiled alternative at a
/// time. Stands in for the relational store in tests and in `pathq`.
#[derive(Debug, Default, Clone)]
pub struct PathIndex {
    records: Vec<PathRecord>,
}

impl PathIndex {
    pub fn new(records: Vec<PathRecord>) -> Self {
        Self { records }
    }

    /// Reads a JSON array of records.
    pub fn from_json_reader(reader: impl Read) -> Result<Self> {
        let records: Vec<PathRecord> =
            serde_json::from_reader(reader).context("Failed to decode path records")?;
        Ok(Self::new(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[PathRecord] {
        &self.records
    }

    /// Records matching every segment of `alternative`, in insertion order.
    ///
    /// Returns `Ok(None)` once `token` is cancelled.
    pub fn lookup(
        &self,
        alternative: &CompiledAlternative,
        options: SearchOptions,
        token: CancellationToken,
    ) -> Result<Option<Vec<PathRecord>>> {
        if alternative.never_matches() {
            return Ok(Some(Vec::new()));
        }
        let lookup_time = Instant::now();
        let matcher = AlternativeMatcher::new(alternative, options)
            .map_err(|err| anyhow!("Invalid path pattern {:?}: {err}", alternative.source))?;

        let matched: Vec<PathRecord> = self
            .records
            .par_iter()
            .enumerate()
            .filter_map(|(i, record)| {
                if i % CANCEL_CHECK_INTERVAL == 0 && token.is_cancelled() {
                    return None;
                }
                matcher.matches(record).then(|| record.clone())
            })
            .collect();

        debug!(
            alternative = %alternative.source,
            matched = matched.len(),
            "lookup time: {:?}",
            lookup_time.elapsed()
        );
        Ok((!token.is_cancelled()).then_some(matched))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use path_segmentation::compile_alternative;

    fn index() -> PathIndex {
        PathIndex::new(vec![
            PathRecord::new("p1", "f1", "2790/07"),
            PathRecord::new("p2", "f2", "London"),
            PathRecord::new("p3", "f3", "2000/02"),
            PathRecord::new("p4", "f4", "2000/02"),
        ])
    }

    fn lookup(index: &PathIndex, alternative: &str) -> Vec<String> {
        index
            .lookup(
                &compile_alternative(alternative),
                SearchOptions::default(),
                CancellationToken::noop(),
            )
            .expect("lookup should succeed")
            .expect("noop cancellation token should not cancel")
            .into_iter()
            .map(|record| record.file_uid)
            .collect()
    }

    #[test]
    fn keeps_insertion_order() {
        assert_eq!(lookup(&index(), "2000/02"), vec!["f3", "f4"]);
        assert_eq!(lookup(&index(), "*"), vec!["f1", "f2", "f3", "f4"]);
    }

    #[test]
    fn empty_alternative_returns_nothing() {
        assert!(lookup(&index(), "").is_empty());
    }

    #[test]
    fn cancelled_token_returns_none() {
        let token = CancellationToken::new(u64::MAX - 1);
        let _newer = CancellationToken::new(u64::MAX);
        let result = index()
            .lookup(
                &compile_alternative("*"),
                SearchOptions::default(),
                token,
            )
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn reads_json_records() {
        let json = r#"[
            {"photo_uid": "p1", "file_uid": "f1", "path": "2790/07"},
            {"photo_uid": "p1", "file_uid": "f2", "path": "2790/07"}
        ]"#;
        let index = PathIndex::from_json_reader(json.as_bytes()).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.records()[1].file_uid, "f2");
    }

    #[test]
    fn rejects_malformed_json() {
        let err = PathIndex::from_json_reader("{".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Failed to decode path records"));
    }
}
