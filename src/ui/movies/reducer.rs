//! Reducer for the movie search screen.

use crate::movies::Movie;
use crate::ui::mvi::{Lce, Reducer};

use super::effect::MovieViewEffect;
use super::result::MovieResult;
use super::state::MovieViewState;

/// Title shown while a search is in flight.
pub const SEARCHING_TITLE: &str = "Searching Movie...";

/// Title shown for an error envelope no event can produce.
pub const ERROR_UNREACHABLE: &str = "Unknown Error. Please contact support.";

/// Folds `Lce<MovieResult>` into [`MovieViewState`].
///
/// Pure: the store performs I/O and publishes the outcome. An `Error`
/// envelope without a usable message is a broken collaborator contract and
/// panics.
pub struct MovieReducer;

impl Reducer for MovieReducer {
    type State = MovieViewState;
    type Intent = Lce<MovieResult>;
    type Effect = MovieViewEffect;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            Lce::Content(result) => match result {
                MovieResult::ScreenLoad => MovieViewState {
                    search_box_text: Some(String::new()),
                    ..state
                },
                MovieResult::SearchMovie { movie } => MovieViewState {
                    title: movie.title.clone(),
                    rating_summary: movie.rating_summary(),
                    poster_url: movie.poster_url.clone(),
                    last_searched_movie: Some(movie),
                    ..state
                },
                MovieResult::SearchHistory { movie: Some(movie) } => {
                    let mut history = state.history;
                    history.push(movie);
                    MovieViewState { history, ..state }
                }
                MovieResult::SearchHistory { movie: None } => state,
            },

            Lce::Loading => MovieViewState {
                search_box_text: None,
                title: SEARCHING_TITLE.to_string(),
                rating_summary: String::new(),
                poster_url: String::new(),
                last_searched_movie: None,
                ..state
            },

            Lce::Error(result) => {
                let title = match result {
                    MovieResult::SearchMovie { movie } => error_title(&movie),
                    MovieResult::SearchHistory { movie: Some(movie) } => error_title(&movie),
                    MovieResult::SearchHistory { movie: None } => {
                        panic!("history error result without a movie")
                    }
                    MovieResult::ScreenLoad => ERROR_UNREACHABLE.to_string(),
                };
                MovieViewState { title, ..state }
            }
        }
    }

    fn effect(intent: &Self::Intent) -> Option<Self::Effect> {
        match intent {
            Lce::Content(MovieResult::SearchHistory { .. }) => {
                Some(MovieViewEffect::AddedToHistoryToast)
            }
            _ => None,
        }
    }
}

fn error_title(movie: &Movie) -> String {
    match movie.error_text() {
        Some(message) => message.to_string(),
        None => panic!(
            "error result for '{}' carries no error message",
            movie.title
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str) -> Movie {
        Movie {
            found: true,
            title: title.to_string(),
            ..Movie::default()
        }
    }

    #[test]
    fn toast_for_new_history_entry() {
        let intent = Lce::Content(MovieResult::SearchHistory {
            movie: Some(movie("Blade")),
        });
        assert_eq!(
            MovieReducer::effect(&intent),
            Some(MovieViewEffect::AddedToHistoryToast)
        );
    }

    #[test]
    fn toast_for_rejected_duplicate() {
        let intent = Lce::Content(MovieResult::SearchHistory { movie: None });
        assert_eq!(
            MovieReducer::effect(&intent),
            Some(MovieViewEffect::AddedToHistoryToast)
        );
    }

    #[test]
    fn no_toast_for_other_results() {
        assert_eq!(MovieReducer::effect(&Lce::Loading), None);
        assert_eq!(
            MovieReducer::effect(&Lce::Content(MovieResult::ScreenLoad)),
            None
        );
        assert_eq!(
            MovieReducer::effect(&Lce::Content(MovieResult::SearchMovie {
                movie: movie("Blade")
            })),
            None
        );
        assert_eq!(
            MovieReducer::effect(&Lce::Error(MovieResult::SearchMovie {
                movie: Movie::error("Movie not found!")
            })),
            None
        );
    }
}
