//! `modweave.toml` loading.
//!
//! The configuration is read once by `main` and handed to every command by
//! reference. A missing file is the [`ConfigState::Absent`] state, not an
//! error; only [`ConfigState::require`] turns it into one.

use crate::domain::constants::{
    CHAPEL_COMPILER, CHAPEL_LIBRARIES, CONFIG_ENV, CONFIG_FILE_NAME, DEFAULT_BUILD_COMMAND,
    DEFAULT_TEST_ARGS, DEFAULT_TEST_RUNNER, RECOMMENDED_EXECUTABLES, REQUIRED_EXECUTABLES,
};
use crate::error::ConfigError;
use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// String-keyed table that keeps the order keys were written in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<T>(Vec<(String, T)>);

impl<T> Default for OrderedMap<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> OrderedMap<T> {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> FromIterator<(String, T)> for OrderedMap<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Reads the table as a `toml::Table` (document order with `preserve_order`)
/// and converts each value.
impl<'de, T: DeserializeOwned> Deserialize<'de> for OrderedMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        toml::Table::deserialize(deserializer)?
            .into_iter()
            .map(|(key, value)| {
                value
                    .try_into::<T>()
                    .map(|v| (key.clone(), v))
                    .map_err(|e| D::Error::custom(format!("`{}`: {}", key, e.message())))
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub specializers: Specializers,
    pub object_store: ObjectStore,
    pub compilers: OrderedMap<CompilerPaths>,
    pub toolchain: Toolchain,
    pub build: BuildSection,
    pub testing: TestingSection,
    /// File this configuration was read from.
    #[serde(skip)]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Specializers {
    /// slang -> template directories
    pub templates: OrderedMap<Vec<PathBuf>>,
    /// slang -> source files
    pub sfiles: OrderedMap<Vec<PathBuf>>,
    /// slang -> body files
    pub bfiles: OrderedMap<Vec<PathBuf>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ObjectStore {
    pub output_paths: OrderedMap<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompilerPaths {
    pub root_path: PathBuf,
    pub lib_path: PathBuf,
    #[serde(default)]
    pub libraries: Option<Vec<String>>,
}

impl CompilerPaths {
    pub fn lib_dir(&self) -> PathBuf {
        self.root_path.join(&self.lib_path)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Toolchain {
    pub required: Option<Vec<String>>,
    pub recommended: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    pub command: Option<String>,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TestingSection {
    pub paths: Vec<PathBuf>,
    pub runner: Option<String>,
    pub args: Option<Vec<String>>,
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

impl Config {
    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    pub fn chapel(&self) -> Option<&CompilerPaths> {
        self.compilers.get(CHAPEL_COMPILER)
    }

    pub fn chapel_libraries(&self) -> Vec<String> {
        self.chapel()
            .and_then(|c| c.libraries.clone())
            .unwrap_or_else(|| owned(CHAPEL_LIBRARIES))
    }

    pub fn required_executables(&self) -> Vec<String> {
        self.toolchain
            .required
            .clone()
            .unwrap_or_else(|| owned(REQUIRED_EXECUTABLES))
    }

    pub fn recommended_executables(&self) -> Vec<String> {
        self.toolchain
            .recommended
            .clone()
            .unwrap_or_else(|| owned(RECOMMENDED_EXECUTABLES))
    }

    pub fn build_command(&self) -> &str {
        self.build.command.as_deref().unwrap_or(DEFAULT_BUILD_COMMAND)
    }

    pub fn test_runner(&self) -> &str {
        self.testing.runner.as_deref().unwrap_or(DEFAULT_TEST_RUNNER)
    }

    pub fn test_args(&self) -> Vec<String> {
        self.testing
            .args
            .clone()
            .unwrap_or_else(|| owned(DEFAULT_TEST_ARGS))
    }
}

/// Where configuration may live, in lookup order.
#[derive(Debug, Clone, Default)]
pub struct ConfigSearch {
    pub explicit: Option<PathBuf>,
    pub env: Option<PathBuf>,
    pub cwd: Option<PathBuf>,
    pub home: Option<PathBuf>,
}

impl ConfigSearch {
    pub fn from_env(explicit: Option<PathBuf>) -> Self {
        Self {
            explicit,
            env: std::env::var_os(CONFIG_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            cwd: std::env::current_dir().ok(),
            home: std::env::var_os("HOME").map(PathBuf::from),
        }
    }

    /// An explicit path (flag or env) is the only candidate when given.
    pub fn candidates(&self) -> Vec<PathBuf> {
        if let Some(p) = self.explicit.as_ref().or(self.env.as_ref()) {
            return vec![p.clone()];
        }
        let mut out = Vec::new();
        if let Some(cwd) = &self.cwd {
            out.push(cwd.join(CONFIG_FILE_NAME));
        }
        if let Some(home) = &self.home {
            out.push(home.join(".config/modweave/config.toml"));
        }
        out
    }
}

#[derive(Debug, Clone)]
pub enum ConfigState {
    Loaded(Config),
    Absent { searched: Vec<PathBuf> },
}

impl ConfigState {
    pub fn load(search: &ConfigSearch) -> Result<Self, ConfigError> {
        let searched = search.candidates();
        let Some(path) = searched.iter().find(|p| p.is_file()) else {
            tracing::debug!(?searched, "no configuration file found");
            return Ok(ConfigState::Absent { searched });
        };
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let mut config = Config::from_toml(&raw).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        config.path = path.clone();
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(ConfigState::Loaded(config))
    }

    pub fn require(&self) -> Result<&Config, ConfigError> {
        match self {
            ConfigState::Loaded(c) => Ok(c),
            ConfigState::Absent { searched } => Err(ConfigError::Missing {
                searched: searched.clone(),
            }),
        }
    }

    pub fn config(&self) -> Option<&Config> {
        match self {
            ConfigState::Loaded(c) => Some(c),
            ConfigState::Absent { .. } => None,
        }
    }
}

pub fn load_from_path(path: &Path) -> Result<ConfigState, ConfigError> {
    ConfigState::load(&ConfigSearch {
        explicit: Some(path.to_path_buf()),
        ..Default::default()
    })
}
