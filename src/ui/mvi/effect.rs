//! Base trait for one-shot view effects.

/// Marker trait for effect objects.
///
/// Effects are delivered once to the observers subscribed at the time they
/// fire. They are never stored in state and never replayed.
pub trait UiEffect: Clone + std::fmt::Debug + Send + 'static {}
