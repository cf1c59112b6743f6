// Library root
// -----------
// Client and workflow for the MakeUGC video generation API. The binary
// (`main.rs`) parses arguments and calls `cli::run`.
//
// Module responsibilities:
// - `config`: credential and endpoint/timing settings from the environment.
// - `api`: blocking HTTP client behind the `VideoApi` trait.
// - `extract` / `types`: tolerant lookups over the service's JSON and the
//   request/response shapes built from them.
// - `workflow`: avatar listing and job submission.
// - `poller`: fixed-interval status polling with a wait ceiling.
// - `ui`: all user-facing output.
// - `cli`: argument parsing and dispatch.
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod poller;
pub mod types;
pub mod ui;
pub mod workflow;

pub use error::{Result, UgcError};
