//! Movie search screen feature module.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `event.rs` - User actions (ScreenLoad, SearchMovie, AddToHistory, RestoreFromHistory)
//! - `result.rs` - Outcomes the reducer understands, wrapped in `Lce`
//! - `state.rs` - Immutable view state snapshot
//! - `effect.rs` - One-shot view effects (toasts)
//! - `reducer.rs` - State transitions and effect derivation (pure, no side effects)
//! - `store.rs` - State container: dispatches events, runs and cancels searches

mod effect;
mod event;
mod reducer;
mod result;
mod state;
mod store;

pub use effect::MovieViewEffect;
pub use event::MovieEvent;
pub use reducer::{MovieReducer, ERROR_UNREACHABLE, SEARCHING_TITLE};
pub use result::MovieResult;
pub use state::MovieViewState;
pub use store::{Executors, MovieStore, StoreError};
