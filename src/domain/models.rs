use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeItem {
    pub name: String,
    pub status: Availability,
}

/// Outcome of probing the required and recommended executable lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProbeReport {
    pub probed: Vec<ProbeItem>,
    /// Required executables that could not be started.
    pub errors: Vec<String>,
    /// Recommended executables that could not be started.
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    MissingTemplateDir,
    WriteProbeFailed,
    CompilerNotConfigured,
    MissingLibDir,
    MissingLibrary,
}

/// One advisory record produced by a filesystem validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub slang: Option<String>,
    pub path: PathBuf,
    pub message: String,
    /// Underlying I/O error text, when the finding came from a failed operation.
    pub cause: Option<String>,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub ok: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub findings: Vec<Finding>,
}

/// Paths reported by the build collaborator for one compiled module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileOutcome {
    #[serde(alias = "source")]
    pub source_path: PathBuf,
    #[serde(alias = "output")]
    pub output_path: PathBuf,
    #[serde(alias = "wrapper")]
    pub wrapper_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestRun {
    pub path: PathBuf,
    pub status: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TestRunOutcome {
    pub runs: Vec<TestRun>,
    /// Sum of raw exit statuses. Not a failure count.
    pub sum: i64,
}

impl TestRunOutcome {
    pub fn record(&mut self, path: PathBuf, status: i32) {
        self.sum += i64::from(status);
        self.runs.push(TestRun { path, status });
    }

    pub fn passed(&self) -> bool {
        self.runs.iter().all(|r| r.status == 0)
    }

    pub fn exit_code(&self) -> i32 {
        if self.passed() {
            0
        } else {
            1
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateEntry {
    pub slang: String,
    pub dir: PathBuf,
    pub exists: bool,
    pub files: Vec<String>,
    /// Set when the directory exists but could not be listed.
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub slang: String,
    pub path: PathBuf,
    pub exists: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// `size` and `sha256` are absent when the artifact could not be read.
pub struct StoredObject {
    pub name: String,
    pub size: Option<u64>,
    pub sha256: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectStoreEntry {
    pub slang: String,
    pub output_path: PathBuf,
    pub exists: bool,
    pub objects: Vec<StoredObject>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    pub name: &'static str,
    pub version: &'static str,
}
