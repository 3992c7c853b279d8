use crate::config::{Config, ConfigState};
use crate::domain::models::CompileOutcome;
use crate::error::CompileError;
use std::path::Path;
use std::process::{Command, Stdio};

/// Turns one source module into a host-callable artifact.
pub trait ModuleBuilder {
    fn moduralize(&self, config: &Config, source: &Path) -> Result<CompileOutcome, CompileError>;
}

/// Runs `[build].command [build].args... <source>` and reads a JSON
/// `{"source", "output", "wrapper"}` object from its stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExternalBuilder;

impl ModuleBuilder for ExternalBuilder {
    fn moduralize(&self, config: &Config, source: &Path) -> Result<CompileOutcome, CompileError> {
        let command = config.build_command().to_string();
        tracing::info!(%command, source = %source.display(), "invoking build command");
        let output = Command::new(&command)
            .args(&config.build.args)
            .arg(source)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| CompileError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(CompileError::Failed {
                command,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        serde_json::from_slice(&output.stdout)
            .map_err(|source| CompileError::BadReport { command, source })
    }
}

/// Compile one source file. Runs the builder at most once and never when
/// configuration is absent or the source does not exist.
pub fn compile(
    state: &ConfigState,
    builder: &dyn ModuleBuilder,
    source: &Path,
) -> Result<CompileOutcome, CompileError> {
    let config = state.require()?;
    if !source.is_file() {
        return Err(CompileError::SourceMissing(source.to_path_buf()));
    }
    let outcome = builder.moduralize(config, source)?;
    tracing::debug!(
        output = %outcome.output_path.display(),
        wrapper = %outcome.wrapper_path.display(),
        "module compiled"
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use std::cell::Cell;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[derive(Default)]
    struct CountingBuilder {
        calls: Cell<usize>,
        fail: bool,
    }

    impl ModuleBuilder for CountingBuilder {
        fn moduralize(&self, _config: &Config, source: &Path) -> Result<CompileOutcome, CompileError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err(CompileError::Failed {
                    command: "fake".to_string(),
                    status: "exit status: 2".to_string(),
                    stderr: "syntax error".to_string(),
                });
            }
            Ok(CompileOutcome {
                source_path: source.to_path_buf(),
                output_path: source.with_extension("so"),
                wrapper_path: source.with_extension("py"),
            })
        }
    }

    fn loaded() -> ConfigState {
        ConfigState::Loaded(Config::default())
    }

    #[test]
    fn absent_config_never_invokes_builder() {
        let builder = CountingBuilder::default();
        let state = ConfigState::Absent { searched: vec![] };
        let err = compile(&state, &builder, Path::new("mod.chpl")).unwrap_err();
        assert!(matches!(err, CompileError::Config(ConfigError::Missing { .. })));
        assert_eq!(builder.calls.get(), 0);
    }

    #[test]
    fn relays_builder_paths_verbatim() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("vec.chpl");
        std::fs::write(&src, "proc f() {}").unwrap();
        let builder = CountingBuilder::default();

        let outcome = compile(&loaded(), &builder, &src).unwrap();
        assert_eq!(builder.calls.get(), 1);
        assert_eq!(outcome.source_path, src);
        assert_eq!(outcome.output_path, tmp.path().join("vec.so"));
        assert_eq!(outcome.wrapper_path, tmp.path().join("vec.py"));
    }

    #[test]
    fn builder_failure_is_not_retried() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("bad.chpl");
        std::fs::write(&src, "proc (").unwrap();
        let builder = CountingBuilder {
            fail: true,
            ..Default::default()
        };
        let err = compile(&loaded(), &builder, &src).unwrap_err();
        assert!(err.to_string().contains("syntax error"));
        assert_eq!(builder.calls.get(), 1);
    }

    #[test]
    fn missing_source_is_rejected_up_front() {
        let builder = CountingBuilder::default();
        let err = compile(&loaded(), &builder, &PathBuf::from("/nope/x.chpl")).unwrap_err();
        assert!(matches!(err, CompileError::SourceMissing(_)));
        assert_eq!(builder.calls.get(), 0);
    }

    #[test]
    fn unstartable_build_command_is_spawn_error() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("m.chpl");
        std::fs::write(&src, "").unwrap();
        let mut cfg = Config::default();
        cfg.build.command = Some("modweave-no-such-builder-91c2".to_string());
        let err = compile(&ConfigState::Loaded(cfg), &ExternalBuilder, &src).unwrap_err();
        assert!(matches!(err, CompileError::Spawn { .. }));
    }
}
