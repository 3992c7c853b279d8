#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub project: PathBuf,
}

impl TestEnv {
    /// Isolated HOME and project dir with no configuration anywhere.
    pub fn bare() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let project = tmp.path().join("project");
        fs::create_dir_all(&home).expect("create isolated home");
        fs::create_dir_all(&project).expect("create project dir");
        Self {
            _tmp: tmp,
            home,
            project,
        }
    }

    /// Project with `modweave.toml` written from `body`. `{root}` expands to
    /// the project directory.
    pub fn with_config(body: &str) -> Self {
        let env = Self::bare();
        env.write_config(body);
        env
    }

    pub fn write_config(&self, body: &str) {
        let root = self.project.to_str().expect("project path utf8");
        fs::write(
            self.project.join("modweave.toml"),
            body.replace("{root}", root),
        )
        .expect("write config");
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.project.join(rel)
    }

    pub fn mkdir(&self, rel: &str) -> PathBuf {
        let p = self.path(rel);
        fs::create_dir_all(&p).expect("create dir");
        p
    }

    pub fn touch(&self, rel: &str, contents: &str) -> PathBuf {
        let p = self.path(rel);
        if let Some(parent) = p.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(&p, contents).expect("write file");
        p
    }

    #[cfg(unix)]
    pub fn script(&self, rel: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let p = self.touch(rel, &format!("#!/bin/sh\n{}\n", body));
        fs::set_permissions(&p, fs::Permissions::from_mode(0o755)).expect("chmod script");
        p
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("modweave");
        cmd.env("HOME", &self.home)
            .env_remove("MODWEAVE_CONFIG")
            .env_remove("MODWEAVE_LOG")
            .current_dir(&self.project);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    /// Like `run_json` but for commands expected to exit with `code`.
    pub fn run_json_code(&self, args: &[&str], code: i32) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .code(code)
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

pub fn quoted(p: &Path) -> String {
    format!("{:?}", p.to_str().expect("utf8 path"))
}
