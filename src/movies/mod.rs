//! Movie domain: value objects and the search collaborator.
//!
//! - `model.rs` - `Movie` and `Rating` as returned by OMDb
//! - `search.rs` - The `MovieSearch` boundary consumed by the state container
//! - `omdb.rs` - `reqwest` implementation of `MovieSearch` against OMDb

mod model;
mod omdb;
mod search;

pub use model::{Movie, Rating};
pub use omdb::{OmdbClient, OmdbError, SEARCH_ERROR};
pub use search::MovieSearch;
