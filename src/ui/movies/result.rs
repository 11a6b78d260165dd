//! Results folded into the movie view state.

use crate::movies::Movie;

/// Outcome of handling an event or finishing a search.
///
/// Always travels inside an [`Lce`](crate::ui::mvi::Lce) envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum MovieResult {
    ScreenLoad,

    SearchMovie { movie: Movie },

    /// `None` when the movie was already in the history. The toast still
    /// fires for it.
    SearchHistory { movie: Option<Movie> },
}
