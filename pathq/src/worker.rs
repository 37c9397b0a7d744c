use anyhow::{Context, Result};
use crossbeam_channel::{Receiver, Sender};
use path_index::{PathIndex, PathRecord, SearchOptions};
use path_query::{SearchForm, SearchOutcome, search_paths};
use path_segmentation::{PathColumns, SqlPredicate, compile_path_query};
use search_cancel::CancellationToken;

pub struct Settings {
    pub options: SearchOptions,
    pub merged: bool,
    pub limit: Option<usize>,
    pub explain: bool,
    pub json: bool,
}

pub struct SearchRequest {
    pub query: String,
    pub token: CancellationToken,
}

pub struct SearchReply {
    pub query: String,
    /// `Ok(None)` when a newer request superseded this one.
    pub result: Result<Option<SearchOutcome<PathRecord>>>,
}

pub fn run_search(
    index: &PathIndex,
    mut form: SearchForm,
    settings: &Settings,
    token: CancellationToken,
) -> Result<Option<SearchOutcome<PathRecord>>> {
    form.parse_query_string().context("Invalid search query")?;
    if settings.explain {
        explain(&form.path)?;
    }
    search_paths(&form, index, settings.options, settings.limit, token)
}

fn explain(path: &str) -> Result<()> {
    let alternatives = compile_path_query(path);
    println!("{}", serde_json::to_string_pretty(&alternatives)?);
    println!(
        "WHERE {}",
        SqlPredicate::inline(&alternatives, &PathColumns::sqlite("photo_path"))
    );
    Ok(())
}

/// Answers requests in arrival order until `finish` delivers a handshake
/// sender or the request channel closes.
pub fn serve(
    index: &PathIndex,
    settings: &Settings,
    requests: Receiver<SearchRequest>,
    replies: Sender<SearchReply>,
    finish: Receiver<Sender<()>>,
) {
    loop {
        crossbeam_channel::select! {
            recv(finish) -> tx => {
                if let Ok(tx) = tx {
                    let _ = tx.send(());
                }
                break;
            }
            recv(requests) -> request => {
                let Ok(SearchRequest { query, token }) = request else { break };
                let form = SearchForm {
                    query: query.clone(),
                    merged: settings.merged,
                    ..SearchForm::default()
                };
                let result = run_search(index, form, settings, token);
                if replies.send(SearchReply { query, result }).is_err() {
                    break;
                }
            }
        }
    }
}
