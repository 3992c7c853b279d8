/// Executables whose absence fails `--check`.
pub const REQUIRED_EXECUTABLES: &[&str] = &["chpl", "cc", "python3"];

/// Executables whose absence only warns. `chpl` is in both lists on purpose;
/// a missing `chpl` is reported once as an error and once as a warning.
pub const RECOMMENDED_EXECUTABLES: &[&str] = &["chpl", "pytest", "c2chapel"];

/// Argument passed when probing an executable.
pub const VERSION_QUERY_ARG: &str = "--version";

/// Runtime libraries expected under `compilers.chapel.root_path/lib_path`.
pub const CHAPEL_LIBRARIES: &[&str] = &["libchpl.a", "main.o"];

pub const CHAPEL_COMPILER: &str = "chapel";

/// Probe file created and removed in every object-store output path.
pub const WRITE_TEST_FILE: &str = "write_test";

pub const DEFAULT_BUILD_COMMAND: &str = "modweave-moduralize";
pub const DEFAULT_TEST_RUNNER: &str = "pytest";
pub const DEFAULT_TEST_ARGS: &[&str] = &["-v"];

/// Status recorded for a testing path whose runner could not be started.
pub const RUNNER_SPAWN_FAILED_STATUS: i32 = 127;

pub const CONFIG_ENV: &str = "MODWEAVE_CONFIG";
pub const CONFIG_FILE_NAME: &str = "modweave.toml";
pub const LOG_ENV: &str = "MODWEAVE_LOG";
