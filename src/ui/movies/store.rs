//! State container for the movie search screen.
//!
//! `MovieStore` is a handle; the state lives in a main-loop task that owns
//! it exclusively and performs every reduction in order. Searches run as
//! separate tasks on the worker context and post their result back to the
//! main loop, which drops anything that is no longer the latest search.
//!
//! ```text
//! on_event ──→ [main loop] ──reduce──→ watch<MovieViewState>
//!                 │    ↑      └──────→ broadcast<MovieViewEffect>
//!           spawn │    │ SearchCompletion { ticket, movie }
//!                 ↓    │
//!             [worker: MovieSearch::search]
//! ```

use std::sync::Arc;

use thiserror::Error;
use tokio::runtime::Handle;
use tokio::sync::{broadcast, mpsc, oneshot, watch};
use tokio::task::JoinHandle;

use crate::movies::{Movie, MovieSearch};
use crate::ui::mvi::{JobScope, JobTicket, Lce, Reducer};

use super::effect::MovieViewEffect;
use super::event::MovieEvent;
use super::reducer::MovieReducer;
use super::result::MovieResult;
use super::state::MovieViewState;

const EFFECT_CHANNEL_SIZE: usize = 16;

/// Errors returned by [`MovieStore`] queries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("movie store main loop has stopped")]
    Closed,
}

/// Execution contexts the store runs on.
///
/// `main` hosts the loop that owns the view state; `worker` runs searches.
/// Tests pass the same current-thread handle for both.
#[derive(Debug, Clone)]
pub struct Executors {
    pub main: Handle,
    pub worker: Handle,
}

impl Executors {
    pub fn new(main: Handle, worker: Handle) -> Self {
        Self { main, worker }
    }

    /// Both contexts on the runtime of the calling task.
    ///
    /// Panics outside a tokio runtime, like `Handle::current`.
    pub fn current() -> Self {
        let handle = Handle::current();
        Self::new(handle.clone(), handle)
    }
}

enum StoreCommand {
    Event(MovieEvent),
    Snapshot {
        respond_to: oneshot::Sender<MovieViewState>,
    },
}

struct SearchCompletion {
    ticket: JobTicket,
    movie: Movie,
}

/// Handle to the movie screen's state container.
pub struct MovieStore {
    commands: mpsc::UnboundedSender<StoreCommand>,
    view_state: watch::Receiver<MovieViewState>,
    view_effects: broadcast::Sender<MovieViewEffect>,
    main_loop: Option<JoinHandle<()>>,
}

impl MovieStore {
    pub fn new(search: Arc<dyn MovieSearch>, executors: Executors) -> Self {
        let (commands, command_rx) = mpsc::unbounded_channel();
        let (completions, completion_rx) = mpsc::unbounded_channel();
        let (state_tx, view_state) = watch::channel(MovieViewState::default());
        let (view_effects, _) = broadcast::channel(EFFECT_CHANNEL_SIZE);

        let main_loop = StoreLoop {
            state: MovieViewState::default(),
            search,
            worker: executors.worker,
            scope: JobScope::new(),
            state_tx,
            effects_tx: view_effects.clone(),
            completions,
        };
        let handle = executors.main.spawn(main_loop.run(command_rx, completion_rx));

        Self {
            commands,
            view_state,
            view_effects,
            main_loop: Some(handle),
        }
    }

    /// Dispatch a user event. Never blocks; results arrive via the streams.
    pub fn on_event(&self, event: MovieEvent) {
        let name = event.name();
        if self.commands.send(StoreCommand::Event(event)).is_err() {
            tracing::warn!(event = name, "Movie store stopped, dropping event");
        }
    }

    /// Latest-value stream of view states. The current state is readable
    /// immediately through `borrow()`.
    pub fn view_state(&self) -> watch::Receiver<MovieViewState> {
        self.view_state.clone()
    }

    /// Effects emitted after this call. Nothing is replayed.
    pub fn view_effects(&self) -> broadcast::Receiver<MovieViewEffect> {
        self.view_effects.subscribe()
    }

    /// The state after every event dispatched so far has been handled.
    ///
    /// Searches still in flight are not waited for.
    pub async fn current_state(&self) -> Result<MovieViewState, StoreError> {
        let (respond_to, receiver) = oneshot::channel();
        self.commands
            .send(StoreCommand::Snapshot { respond_to })
            .map_err(|_| StoreError::Closed)?;
        receiver.await.map_err(|_| StoreError::Closed)
    }

    /// Tear the container down: stop the main loop and cancel any search.
    ///
    /// A panic in the main loop (a reducer contract violation) is resumed
    /// on the caller.
    pub async fn shutdown(mut self) {
        let Some(handle) = self.stop() else {
            return;
        };
        match handle.await {
            Ok(()) => {}
            Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
            Err(err) => tracing::debug!("Movie store main loop cancelled: {}", err),
        }
    }

    fn stop(&mut self) -> Option<JoinHandle<()>> {
        // Closing the command channel ends the main loop, which closes its scope.
        let (closed, _) = mpsc::unbounded_channel();
        drop(std::mem::replace(&mut self.commands, closed));
        self.main_loop.take()
    }
}

impl Drop for MovieStore {
    fn drop(&mut self) {
        if let Some(handle) = self.stop() {
            handle.abort();
        }
    }
}

struct StoreLoop {
    state: MovieViewState,
    search: Arc<dyn MovieSearch>,
    worker: Handle,
    scope: JobScope,
    state_tx: watch::Sender<MovieViewState>,
    effects_tx: broadcast::Sender<MovieViewEffect>,
    completions: mpsc::UnboundedSender<SearchCompletion>,
}

impl StoreLoop {
    async fn run(
        mut self,
        mut commands: mpsc::UnboundedReceiver<StoreCommand>,
        mut completions: mpsc::UnboundedReceiver<SearchCompletion>,
    ) {
        loop {
            tokio::select! {
                biased;
                command = commands.recv() => match command {
                    Some(command) => self.handle_command(command),
                    None => break,
                },
                Some(completion) = completions.recv() => self.on_search_completed(completion),
            }
        }

        self.scope.close();
        tracing::debug!("Movie store stopped");
    }

    fn handle_command(&mut self, command: StoreCommand) {
        match command {
            StoreCommand::Event(event) => self.on_event(event),
            StoreCommand::Snapshot { respond_to } => {
                if respond_to.send(self.state.clone()).is_err() {
                    tracing::trace!("Snapshot response dropped (receiver gone)");
                }
            }
        }
    }

    fn on_event(&mut self, event: MovieEvent) {
        tracing::debug!(event = event.name(), "Movie event");

        match event {
            MovieEvent::ScreenLoad => self.apply(Lce::Content(MovieResult::ScreenLoad)),
            MovieEvent::SearchMovie { query } => self.on_search_movie(query),
            MovieEvent::AddToHistory => self.on_add_to_history(),
            MovieEvent::RestoreFromHistory { movie } => {
                self.apply(Lce::Content(MovieResult::SearchMovie { movie }))
            }
        }
    }

    fn on_search_movie(&mut self, query: String) {
        if self.scope.is_active() {
            tracing::debug!("Superseding in-flight search");
        }
        self.apply(Lce::Loading);

        let Some(ticket) = self.scope.next_ticket() else {
            return;
        };

        let search = Arc::clone(&self.search);
        let completions = self.completions.clone();
        let handle = self.worker.spawn(async move {
            let movie = search.search(&query).await;
            if completions.send(SearchCompletion { ticket, movie }).is_err() {
                tracing::trace!("Search result dropped (store stopped)");
            }
        });
        self.scope.attach(ticket, handle);
    }

    fn on_search_completed(&mut self, completion: SearchCompletion) {
        let SearchCompletion { ticket, movie } = completion;
        if !self.scope.complete(ticket) {
            tracing::trace!(title = %movie.title, "Dropping superseded search result");
            return;
        }

        let result = MovieResult::SearchMovie { movie };
        if result_has_error(&result) {
            self.apply(Lce::Error(result));
        } else {
            self.apply(Lce::Content(result));
        }
    }

    fn on_add_to_history(&mut self) {
        let Some(movie) = self.state.last_searched_movie.clone() else {
            tracing::warn!("No searched movie to add to history");
            return;
        };

        let movie = if self.state.history_contains(&movie) {
            None
        } else {
            Some(movie)
        };
        self.apply(Lce::Content(MovieResult::SearchHistory { movie }));
    }

    fn apply(&mut self, result: Lce<MovieResult>) {
        tracing::trace!(
            loading = result.is_loading(),
            error = result.is_error(),
            payload = ?result.payload(),
            "Reducing movie result"
        );

        let effect = MovieReducer::effect(&result);
        self.state = MovieReducer::reduce(std::mem::take(&mut self.state), result);
        self.state_tx.send_replace(self.state.clone());

        if let Some(effect) = effect {
            if self.effects_tx.send(effect).is_err() {
                tracing::trace!(?effect, "Effect dropped (no subscribers)");
            }
        }
    }
}

fn result_has_error(result: &MovieResult) -> bool {
    matches!(result, MovieResult::SearchMovie { movie } if movie.has_error())
}
