use crate::ui::mvi::UiEffect;

/// One-shot effects for the movie search screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieViewEffect {
    /// Poster tap was registered, whether or not the entry was new.
    AddedToHistoryToast,
}

impl UiEffect for MovieViewEffect {}
