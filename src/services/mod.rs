//! Service layer containing the orchestration logic and its side effects.
//!
//! ## Service map
//! - `probe.rs` — executable availability probes + required/recommended split.
//! - `validate.rs` — template dir, object-store write and library validators.
//! - `check.rs` — `--check` report assembly.
//! - `build.rs` — build collaborator seam and the `compile` adapter.
//! - `testing.rs` — test runner seam and per-path aggregation.
//! - `introspect.rs` — templates/sfiles/bfiles/object-store listings.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Services take `&Config`; only `build::compile` sees the absent state.
//! - External processes sit behind `ModuleBuilder`/`TestRunner` or a probe
//!   closure so tests can substitute them.

pub mod build;
pub mod check;
pub mod introspect;
pub mod output;
pub mod probe;
pub mod testing;
pub mod validate;
