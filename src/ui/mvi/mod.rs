//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow in the UI layer.
//!
//! # Architecture
//!
//! ```text
//! Event ──→ Container ──→ Lce<Result> ──→ Reducer ──→ State ──→ View
//!   ↑            │                           │                   │
//!   │            └── async work (cancellable)└──→ Effect ──→ View│
//!   └────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: Inputs the reducer understands
//! - **Effect**: One-shot signals that are never part of state
//! - **Reducer**: Pure function that transforms state based on intents
//! - **Lce**: Loading/Content/Error envelope for async outcomes
//! - **JobScope**: Owned cancellation scope for a container's async work

mod effect;
mod intent;
mod lce;
mod reducer;
mod scope;
mod state;

pub use effect::UiEffect;
pub use intent::Intent;
pub use lce::Lce;
pub use reducer::Reducer;
pub use scope::{JobScope, JobTicket};
pub use state::UiState;
