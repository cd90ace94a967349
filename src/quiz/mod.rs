// src/quiz/mod.rs

//! The test-taking flow: answer tracking, the countdown, scoring,
//! best-effort result reporting and the session registry that ties them together.

pub mod admin;
pub mod registry;
pub mod reporter;
pub mod scorer;
pub mod session;
pub mod timer;
pub mod tracker;

pub use registry::{RegistryError, SessionRegistry};
pub use reporter::ResultReporter;
