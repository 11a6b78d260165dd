//! Movie search screen backed by a unidirectional state container.
//!
//! - `ui::mvi` - MVI primitives: intents, reducers, `Lce`, cancellation scope
//! - `ui::movies` - The movie screen: events, reducer and `MovieStore`
//! - `movies` - `Movie` values and the OMDb search collaborator
//! - `config` / `logging` - Ambient setup for the binary

pub mod config;
pub mod logging;
pub mod movies;
pub mod ui;
