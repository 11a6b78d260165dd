//! Events emitted by the movie search screen.

use crate::movies::Movie;
use crate::ui::mvi::Intent;

/// User actions dispatched to the [`MovieStore`](super::MovieStore).
#[derive(Debug, Clone, PartialEq)]
pub enum MovieEvent {
    /// Screen was opened.
    ScreenLoad,

    /// Search button pressed with the typed title.
    SearchMovie { query: String },

    /// Poster tapped: remember the displayed movie.
    AddToHistory,

    /// A history entry was tapped. No network call is made.
    RestoreFromHistory { movie: Movie },
}

impl Intent for MovieEvent {}

impl MovieEvent {
    /// Short name for logs; payloads can be large.
    pub fn name(&self) -> &'static str {
        match self {
            MovieEvent::ScreenLoad => "ScreenLoad",
            MovieEvent::SearchMovie { .. } => "SearchMovie",
            MovieEvent::AddToHistory => "AddToHistory",
            MovieEvent::RestoreFromHistory { .. } => "RestoreFromHistory",
        }
    }
}
