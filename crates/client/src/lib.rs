//! HTTP access to the remote admin API and the page workflows built on it.
//!
//! Every workflow is a plain async function over an [`api::Api`]
//! implementation that returns the UI transition to apply, so pages stay thin
//! and the workflows can be driven without a renderer.

pub mod add_job;
pub mod add_user;
pub mod api;
pub mod config;
pub mod home;
pub mod login;
pub mod outcome;
pub mod session;


pub use api::{Api, ApiResult, HttpApi};
pub use outcome::{FormPhase, SubmitOutcome};
pub use session::{GateOutcome, SessionGate};
