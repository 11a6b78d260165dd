//! Plain-text rendering of the movie screen for the console front-end.

use std::fmt::Write;

use crate::ui::movies::{MovieViewEffect, MovieViewState};

/// Render a view state as the lines the console prints.
pub fn render_state(state: &MovieViewState) -> String {
    let mut out = String::new();

    if let Some(text) = &state.search_box_text {
        let _ = writeln!(out, "search: [{}]", text);
    }
    let _ = writeln!(out, "title:  {}", state.title);
    for line in state.rating_summary.lines().filter(|line| !line.is_empty()) {
        let _ = writeln!(out, "        {}", line);
    }
    if state.poster_url.trim().is_empty() {
        let _ = writeln!(out, "poster: -");
    } else {
        let _ = writeln!(out, "poster: {}", state.poster_url);
    }

    if !state.history.is_empty() {
        let _ = writeln!(out, "history:");
        for (index, movie) in state.history.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", index + 1, movie.title);
        }
    }

    out
}

pub fn render_effect(effect: MovieViewEffect) -> &'static str {
    match effect {
        MovieViewEffect::AddedToHistoryToast => "added to history",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movies::{Movie, Rating};

    #[test]
    fn renders_movie_and_history() {
        let movie = Movie {
            found: true,
            error_message: None,
            title: "Blade".to_string(),
            poster_url: "https://example.com/blade.jpg".to_string(),
            ratings: vec![Rating::new("Internet Movie Database", "7.1/10")],
        };
        let state = MovieViewState {
            search_box_text: None,
            title: movie.title.clone(),
            rating_summary: movie.rating_summary(),
            poster_url: movie.poster_url.clone(),
            history: vec![movie.clone()],
            last_searched_movie: Some(movie),
        };

        let rendered = render_state(&state);
        assert!(!rendered.contains("search:"));
        assert!(rendered.contains("title:  Blade\n"));
        assert!(rendered.contains("7.1/10 (IMDB)"));
        assert!(rendered.contains("poster: https://example.com/blade.jpg"));
        assert!(rendered.contains("  1. Blade"));
    }

    #[test]
    fn renders_cleared_search_box_and_missing_poster() {
        let state = MovieViewState {
            search_box_text: Some(String::new()),
            ..MovieViewState::default()
        };

        let rendered = render_state(&state);
        assert!(rendered.starts_with("search: []\n"));
        assert!(rendered.contains("poster: -"));
        assert!(!rendered.contains("history:"));
    }

    #[test]
    fn toast_text() {
        assert_eq!(
            render_effect(MovieViewEffect::AddedToHistoryToast),
            "added to history"
        );
    }
}
