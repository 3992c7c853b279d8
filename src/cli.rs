use clap::{ArgGroup, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "modweave",
    about = "Chapel-to-Python module build orchestrator",
    disable_version_flag = true,
    group(
        ArgGroup::new("directive")
            .args(["compile", "check", "testing", "sfiles", "bfiles", "templates", "object_store", "version"])
            .multiple(false)
    )
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, global = true, help = "Path to modweave.toml (overrides discovery)")]
    pub config: Option<PathBuf>,
    #[arg(short, long, global = true, help = "Enable debug logging on stderr")]
    pub verbose: bool,
    #[arg(long, global = true, help = "Make --check exit non-zero when the report is not ok")]
    pub strict: bool,

    #[arg(long, value_name = "PATH", help = "Compile one source module into a Python-callable artifact")]
    pub compile: Option<PathBuf>,
    #[arg(long, help = "Verify executables, template dirs, libraries and object-store access")]
    pub check: bool,
    #[arg(long, help = "Run the test runner against every configured testing path")]
    pub testing: bool,
    #[arg(long, help = "List declared source files")]
    pub sfiles: bool,
    #[arg(long, help = "List declared body files")]
    pub bfiles: bool,
    #[arg(long, help = "List specializer template directories")]
    pub templates: bool,
    #[arg(long = "object-store", help = "List compiled objects in each output path")]
    pub object_store: bool,
    #[arg(long, help = "Print version")]
    pub version: bool,
}

/// The single action selected on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Check,
    Compile(PathBuf),
    Testing,
    Sfiles,
    Bfiles,
    Templates,
    ObjectStore,
    Version,
}

impl Directive {
    pub fn requires_config(&self) -> bool {
        !matches!(self, Directive::Version)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Directive::Check => "check",
            Directive::Compile(_) => "compile",
            Directive::Testing => "testing",
            Directive::Sfiles => "sfiles",
            Directive::Bfiles => "bfiles",
            Directive::Templates => "templates",
            Directive::ObjectStore => "object-store",
            Directive::Version => "version",
        }
    }
}

impl Cli {
    /// Clap's arg group guarantees at most one of these is set.
    pub fn directive(&self) -> Option<Directive> {
        if let Some(path) = &self.compile {
            return Some(Directive::Compile(path.clone()));
        }
        [
            (self.check, Directive::Check),
            (self.testing, Directive::Testing),
            (self.sfiles, Directive::Sfiles),
            (self.bfiles, Directive::Bfiles),
            (self.templates, Directive::Templates),
            (self.object_store, Directive::ObjectStore),
            (self.version, Directive::Version),
        ]
        .into_iter()
        .find_map(|(set, d)| set.then_some(d))
    }
}
