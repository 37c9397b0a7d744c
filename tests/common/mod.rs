#![allow(dead_code)]
//! Photo path fixtures shared by the path search suites.

use path_query::{
    CancellationToken, PathIndex, PathLookup, PathRecord, SearchForm, SearchOptions, search_paths,
};

/// `(photo_uid, file_uid, path)`
pub const FIXTURES: &[(&str, &str, &str)] = &[
    ("pt01", "fl01", "2790/07"),
    ("pt02", "fl02", "London"),
    ("pt03", "fl03", "%abc/%folderx"),
    ("pt04", "fl04", "ab%c/fol%de"),
    ("pt05", "fl05", "abc%/folde%"),
    ("pt06", "fl06", "&abc/&folde"),
    ("pt07", "fl07", "tes&r/lo&c"),
    ("pt08", "fl08", "2020&/vacation&"),
    ("pt09", "fl09", "'2020/'vacation"),
    ("pt10", "fl10", "20'20/vacat'ion"),
    ("pt11", "fl11", "2020'/vacation'"),
    ("pt12", "fl12", "2020/vacation"),
    ("pt13", "fl13", "Berlin 2020/summer vacation"),
    ("pt14", "fl14", "1990-2020/winter vacation"),
    ("pt15", "fl15", "2023/vacation"),
    ("pt16", "fl16", "2000/holiday"),
    ("pt17", "fl17", "2000/02"),
    ("pt18", "fl18", "2000/02"),
    ("pt19", "fl19", "\"2000/\"02"),
    ("pt20", "fl20", "20\"00/0\"2"),
    ("pt21", "fl21", "2000\"/02\""),
    ("pt22", "fl22", " 2000/ 02"),
    ("pt23", "fl23", "20 00/ 0 2"),
    ("pt24", "fl24", "2000 /02 "),
    // Two files of the same photo.
    ("pt25", "fl25", "1990/04"),
    ("pt25", "fl26", "1990/04"),
    // Would match if `%`, `_` or `&` acted as wildcards.
    ("pt26", "fl27", "xabc/yfolderx"),
    ("pt27", "fl28", "abxc/folxde"),
    ("pt28", "fl29", "abcd/folder"),
    ("pt29", "fl30", "tesr/loc"),
    ("pt30", "fl31", "a_c/x"),
    // A second photo in the root-level London folder.
    ("pt31", "fl32", "London"),
    // Only ASCII letters fold when matching case-insensitively.
    ("pt32", "fl33", "Émile/x"),
];

pub fn fixture_records() -> Vec<PathRecord> {
    FIXTURES
        .iter()
        .map(|&(photo, file, path)| PathRecord::new(photo, file, path))
        .collect()
}

pub fn fixture_index() -> PathIndex {
    PathIndex::new(fixture_records())
}

pub fn run<L: PathLookup<Row = PathRecord>>(form: &SearchForm, lookup: &L) -> Vec<PathRecord> {
    search_paths(
        form,
        lookup,
        SearchOptions::default(),
        None,
        CancellationToken::noop(),
    )
    .expect("search should succeed")
    .expect("noop cancellation token should not cancel")
    .rows
}

/// Input A: the raw path field.
pub fn search_path(path: &str) -> Vec<PathRecord> {
    let mut form = SearchForm::with_path(path);
    form.parse_query_string().expect("query should parse");
    run(&form, &fixture_index())
}

/// Input B: a free text query.
pub fn search_query(query: &str) -> Vec<PathRecord> {
    let mut form = SearchForm::with_query(query);
    form.parse_query_string().expect("query should parse");
    run(&form, &fixture_index())
}

pub fn paths(rows: &[PathRecord]) -> Vec<&str> {
    rows.iter().map(|row| row.path.as_str()).collect()
}

/// Every path value exercised against the fixtures with its expected count of
/// merged rows.
pub const SCENARIOS: &[(&str, usize)] = &[
    ("2790/07", 1),
    ("2790*", 1),
    ("London", 2),
    ("London|2790/07", 3),
    ("%abc/%folderx", 1),
    ("ab%c/fol%de", 1),
    ("abc%/folde%", 1),
    ("&abc/&folde", 1),
    ("tes&r/lo&c", 1),
    ("2020&/vacation&", 1),
    ("'2020/'vacation", 1),
    ("20'20/vacat'ion", 1),
    ("2020'/vacation'", 1),
    ("*2020/*vacation", 4),
    ("202*3/vac*ation", 1),
    ("2023*/vacatio*", 1),
    ("|202/|vacation", 0),
    ("20|22/vacat|ion", 0),
    ("2022|/vacation|", 0),
    ("2000/holiday", 1),
    ("2000/02", 2),
    ("\"2000/\"02", 1),
    ("20\"00/0\"2", 1),
    ("2000\"/02\"", 1),
    (" 2000/ 02", 1),
    ("20 00/ 0 2", 1),
    ("2000 /02 ", 1),
    ("%abc/%folderx|20'20/vacat'ion", 2),
    ("202*3/vac*ation|20'20/vacat'ion", 2),
    ("20'20/vacat'ion|&abc/&folde", 2),
    ("London|1990/04", 3),
];
