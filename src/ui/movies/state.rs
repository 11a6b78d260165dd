//! View state for the movie search screen.

use crate::movies::Movie;
use crate::ui::mvi::UiState;

/// Everything the screen renders.
///
/// Replaced wholesale on every transition; never mutated in place by
/// observers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MovieViewState {
    /// `None` leaves the user's typed text alone; `Some("")` clears the box.
    pub search_box_text: Option<String>,
    pub title: String,
    pub rating_summary: String,
    pub poster_url: String,
    /// Previously added movies, oldest first, without duplicates.
    pub history: Vec<Movie>,
    /// Last successfully displayed movie; what AddToHistory stores.
    pub last_searched_movie: Option<Movie>,
}

impl UiState for MovieViewState {}

impl MovieViewState {
    /// Structural membership check used for history deduplication.
    pub fn history_contains(&self, movie: &Movie) -> bool {
        self.history.iter().any(|entry| entry == movie)
    }
}
