mod cli;
mod worker;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use crossbeam_channel::{Sender, bounded, unbounded};
use path_index::{PathIndex, PathRecord, SearchOptions};
use path_query::{SearchForm, SearchOutcome};
use search_cancel::CancellationToken;
use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use worker::{SearchReply, SearchRequest, Settings, run_search, serve};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let file = File::open(&cli.index)
        .with_context(|| format!("Failed to open index {}", cli.index.display()))?;
    let index = PathIndex::from_json_reader(BufReader::new(file))
        .with_context(|| format!("Failed to load index {}", cli.index.display()))?;
    let settings = Settings {
        options: SearchOptions {
            case_insensitive: cli.case_insensitive,
        },
        merged: cli.merged,
        limit: cli.limit,
        explain: cli.explain,
        json: cli.json,
    };

    if cli.path.is_empty() && cli.query.is_empty() {
        return repl(index, settings);
    }
    let form = SearchForm {
        path: cli.path,
        query: cli.query,
        merged: settings.merged,
        terms: Vec::new(),
    };
    let outcome = run_search(&index, form, &settings, CancellationToken::noop())?;
    if let Some(outcome) = outcome {
        print_outcome(&outcome, settings.json)?;
    }
    Ok(())
}

fn print_outcome(outcome: &SearchOutcome<PathRecord>, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        return Ok(());
    }
    for (i, record) in outcome.rows.iter().enumerate() {
        println!(
            "[{i}] {} ({}/{})",
            record.path, record.photo_uid, record.file_uid
        );
    }
    println!("{} row(s)", outcome.total);
    Ok(())
}

fn prompt() -> Result<()> {
    let mut stdout = std::io::stdout();
    print!("> ");
    stdout.flush()?;
    Ok(())
}

/// Reads one free text query per line, so `path:"2790/07"` and plain words
/// both work. Stdin is read on its own thread and searches run on a worker,
/// so a line typed while a search is running supersedes it.
fn repl(index: PathIndex, settings: Settings) -> Result<()> {
    let (line_tx, line_rx) = unbounded::<String>();
    let (search_tx, search_rx) = unbounded::<SearchRequest>();
    let (reply_tx, reply_rx) = unbounded::<SearchReply>();
    let (finish_tx, finish_rx) = bounded::<Sender<()>>(1);
    let json = settings.json;

    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });
    std::thread::spawn(move || serve(&index, &settings, search_rx, reply_tx, finish_rx));

    let mut version = 0u64;
    prompt()?;
    loop {
        crossbeam_channel::select! {
            recv(line_rx) -> line => {
                // Closed stdin ends the session like `/bye`.
                let Ok(line) = line else { break };
                let line = line.trim();
                if line.is_empty() {
                    prompt()?;
                    continue;
                } else if line == "/bye" {
                    break;
                }
                version += 1;
                search_tx
                    .send(SearchRequest {
                        query: line.to_string(),
                        token: CancellationToken::new(version),
                    })
                    .context("search_tx is closed")?;
            }
            recv(reply_rx) -> reply => {
                let reply = reply.context("reply_rx is closed")?;
                match reply.result {
                    Ok(Some(outcome)) => {
                        print_outcome(&outcome, json)?;
                        prompt()?;
                    }
                    // The newer search prints its own results.
                    Ok(None) => debug!(query = %reply.query, "search superseded"),
                    Err(e) => {
                        eprintln!("Failed to search: {e:?}");
                        prompt()?;
                    }
                }
            }
        }
    }

    // Stop whatever is still running, then wait for the worker.
    CancellationToken::new(version + 1);
    let (done_tx, done_rx) = bounded::<()>(1);
    finish_tx.send(done_tx).context("finish_tx is closed")?;
    done_rx.recv().context("worker exited early")?;
    Ok(())
}
