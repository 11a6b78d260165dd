pub mod console;
pub mod movies;
pub mod mvi;
