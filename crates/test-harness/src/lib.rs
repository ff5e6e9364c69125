//! Scenario harness for the reactor pipeline.
//!
//! Builds the canonical ball reactor as a pure function of a small
//! config, so integration tests can exercise dependency resolution,
//! manifest export, and STEP export against a fully populated assembly.
//!
//! # Key Components
//!
//! - [`helpers`]: scenario configs and assembly builders
//! - [`assertions`]: assertion helpers with diagnostic detail

pub mod assertions;
pub mod helpers;

pub use helpers::{ball_reactor, built_ball_reactor, BallReactorConfig, HarnessError};
