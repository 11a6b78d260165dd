//! Loading/Content/Error envelope for async outcomes.

use super::intent::Intent;

/// Wraps a result so the reducer can tell in-flight, successful and failed
/// outcomes apart with one match.
///
/// `Error` carries the same payload type as `Content`: failures are data,
/// the payload describes what went wrong.
#[derive(Debug, Clone, PartialEq)]
pub enum Lce<T> {
    Loading,
    Content(T),
    Error(T),
}

impl<T> Lce<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Borrow the payload of `Content` or `Error`.
    pub fn payload(&self) -> Option<&T> {
        match self {
            Self::Loading => None,
            Self::Content(payload) | Self::Error(payload) => Some(payload),
        }
    }
}

impl<T: Send + 'static> Intent for Lce<T> {}
