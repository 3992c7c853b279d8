//! Command handler layer.
//!
//! ## Files
//! - `toolchain.rs` — check/compile/testing.
//! - `inspect.rs` — templates/sfiles/bfiles/object-store/version.
//!
//! Handlers return the process exit code; business logic lives in
//! `services/*`.

pub mod inspect;
pub mod toolchain;

use crate::cli::{Cli, Directive};
use crate::config::ConfigState;

/// Run one directive and return the exit code. Configuration is loaded only
/// for directives that need it; `--compile` checks for it itself.
pub fn dispatch(
    cli: &Cli,
    directive: &Directive,
    load: impl FnOnce() -> anyhow::Result<ConfigState>,
) -> anyhow::Result<i32> {
    tracing::debug!(directive = directive.name(), "dispatching");
    if !directive.requires_config() {
        return inspect::handle_version(cli);
    }
    let state = load()?;
    match directive {
        Directive::Compile(source) => toolchain::handle_compile(cli, &state, source),
        Directive::Check => toolchain::handle_check(cli, state.require()?),
        Directive::Testing => toolchain::handle_testing(cli, state.require()?),
        Directive::Sfiles => inspect::handle_sfiles(cli, state.require()?),
        Directive::Bfiles => inspect::handle_bfiles(cli, state.require()?),
        Directive::Templates => inspect::handle_templates(cli, state.require()?),
        Directive::ObjectStore => inspect::handle_object_store(cli, state.require()?),
        Directive::Version => inspect::handle_version(cli),
    }
}
