use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;

use movie_search::config::Config;
use movie_search::logging::init_tracing;
use movie_search::movies::OmdbClient;
use movie_search::ui::console::{render_effect, render_state};
use movie_search::ui::movies::{Executors, MovieEvent, MovieStore};

#[derive(Debug, Parser)]
#[command(name = "movie-search", about = "Search OMDb for movies from the terminal")]
struct Cli {
    /// Config file (default: ~/.config/movie-search/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// OMDb API key, overrides the config file and OMDB_API_KEY
    #[arg(long)]
    api_key: Option<String>,

    /// Log filter, overrides the config file (RUST_LOG still wins)
    #[arg(long)]
    log_filter: Option<String>,
}

#[derive(Debug, PartialEq)]
enum Command {
    Search(String),
    Add,
    Restore(usize),
    Quit,
    Help,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word {
        "search" | "s" if !rest.is_empty() => Some(Command::Search(rest.to_string())),
        "add" | "a" => Some(Command::Add),
        "restore" | "r" => rest
            .parse::<usize>()
            .ok()
            .filter(|index| *index > 0)
            .map(Command::Restore),
        "quit" | "q" | "exit" => Some(Command::Quit),
        "help" | "h" | "?" => Some(Command::Help),
        _ => None,
    }
}

const HELP: &str = "commands: search <title> | add | restore <n> | quit";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    if let Some(key) = cli.api_key {
        config.omdb.api_key = Some(key);
    }
    let filter = cli.log_filter.unwrap_or_else(|| config.logging.filter.clone());
    init_tracing(&filter);

    let client = OmdbClient::new(&config.omdb).context("building OMDb client")?;
    let store = MovieStore::new(Arc::new(client), Executors::current());

    let mut states = store.view_state();
    let render_task = tokio::spawn(async move {
        while states.changed().await.is_ok() {
            let state = states.borrow_and_update().clone();
            println!("{}", render_state(&state));
        }
    });

    let mut effects = store.view_effects();
    let effect_task = tokio::spawn(async move {
        loop {
            match effects.recv().await {
                Ok(effect) => println!("* {}", render_effect(effect)),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "Effect subscriber lagged");
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    store.on_event(MovieEvent::ScreenLoad);
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line.context("reading stdin")?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(line) = line else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Some(Command::Search(query)) => store.on_event(MovieEvent::SearchMovie { query }),
            Some(Command::Add) => store.on_event(MovieEvent::AddToHistory),
            Some(Command::Restore(index)) => {
                let movie = store.view_state().borrow().history.get(index - 1).cloned();
                match movie {
                    Some(movie) => store.on_event(MovieEvent::RestoreFromHistory { movie }),
                    None => println!("no history entry {}", index),
                }
            }
            Some(Command::Quit) => break,
            Some(Command::Help) | None => println!("{}", HELP),
        }
    }

    store.shutdown().await;
    let _ = render_task.await;
    let _ = effect_task.await;
    Ok(())
}
