//! Stateless, controlled presentational components shared by every page.
//! They hold no business logic; all state lives in the page that renders them.

pub mod components;

pub use components::*;
