//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — probe/finding/compile/test/introspection report structs.
//! - `constants.rs` — default executable lists, library names, file names.
//!
//! Domain types are data-only: no filesystem or process side effects.
//! Changes here affect `--json` output and `docs/contracts/*`.

pub mod constants;
pub mod models;
