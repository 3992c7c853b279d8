//! modweave: toolchain checks, module compilation and test orchestration for
//! Chapel-to-Python builds.
//!
//! ## Layers
//! - `cli` — argument surface and the [`cli::Directive`] enum.
//! - `config` — `modweave.toml` discovery and parsing.
//! - `commands/*` — one handler per directive, returning the exit code.
//! - `services/*` — probes, validators, build/test adapters, listings.
//! - `domain/*` — report structs and constants.

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;

pub use cli::{Cli, Directive};
pub use config::{Config, ConfigSearch, ConfigState};
pub use domain::models::*;
pub use error::{CompileError, ConfigError};
