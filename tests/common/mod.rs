//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_omdb;

use async_trait::async_trait;
use movie_search::movies::{Movie, MovieSearch, Rating};
use movie_search::ui::movies::MovieViewState;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::net::TcpListener;
use std::time::Duration;
use tokio::sync::{oneshot, watch};

pub const BLADE_RUNNER_2049_POSTER: &str =
    "https://m.media-amazon.com/images/M/MV5BNzA1Njg4NzYxOV5BMl5BanBnXkFtZTgwODk5NjU3MzI@._V1_SX300.jpg";

pub const BLADE_POSTER: &str =
    "https://m.media-amazon.com/images/M/MV5BMTQ4MzkzNjcxNV5BMl5BanBnXkFtZTcwNzk4NTU0Mg@@._V1_SX300.jpg";

pub fn blade_runner_2049() -> Movie {
    Movie {
        found: true,
        error_message: None,
        title: "Blade Runner 2049".to_string(),
        poster_url: BLADE_RUNNER_2049_POSTER.to_string(),
        ratings: vec![
            Rating::new("Internet Movie Database", "8.1/10"),
            Rating::new("Rotten Tomatoes", "87%"),
        ],
    }
}

pub fn blade() -> Movie {
    Movie {
        found: true,
        error_message: None,
        title: "Blade".to_string(),
        poster_url: BLADE_POSTER.to_string(),
        ratings: vec![
            Rating::new("Internet Movie Database", "7.1/10"),
            Rating::new("Rotten Tomatoes", "54%"),
        ],
    }
}

/// Find an available port with nothing listening on it.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Wait until the published state satisfies `predicate`.
pub async fn wait_for_state<F>(rx: &mut watch::Receiver<MovieViewState>, predicate: F) -> MovieViewState
where
    F: FnMut(&MovieViewState) -> bool,
{
    tokio::time::timeout(Duration::from_secs(2), rx.wait_for(predicate))
        .await
        .expect("timed out waiting for view state")
        .expect("view state channel closed")
        .clone()
}

struct Script {
    movie: Movie,
    delay: Duration,
    gate: Option<oneshot::Receiver<()>>,
}

/// `MovieSearch` fake with canned answers per query.
///
/// Unknown queries return "Movie not found!". A gated query waits until the
/// matching sender fires (or is dropped) before answering.
#[derive(Default)]
pub struct ScriptedSearch {
    scripts: Mutex<HashMap<String, Script>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_movie(self, query: &str, movie: Movie) -> Self {
        self.with_delayed_movie(query, movie, Duration::ZERO)
    }

    pub fn with_delayed_movie(self, query: &str, movie: Movie, delay: Duration) -> Self {
        self.scripts.lock().insert(
            query.to_string(),
            Script {
                movie,
                delay,
                gate: None,
            },
        );
        self
    }

    /// Hold the answer for `query` until the returned sender fires.
    pub fn gate(&self, query: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        if let Some(script) = self.scripts.lock().get_mut(query) {
            script.gate = Some(rx);
        }
        tx
    }

    /// Queries received so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl MovieSearch for ScriptedSearch {
    async fn search(&self, title: &str) -> Movie {
        self.calls.lock().push(title.to_string());

        let (movie, delay, gate) = match self.scripts.lock().get_mut(title) {
            Some(script) => (script.movie.clone(), script.delay, script.gate.take()),
            None => return Movie::error("Movie not found!"),
        };

        if let Some(gate) = gate {
            let _ = gate.await;
        }
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        movie
    }
}
