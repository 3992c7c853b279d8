//! Filesystem validators used by `--check`.
//!
//! Absence is data: every missing path becomes a [`Finding`], nothing here
//! returns an error.

use crate::config::Config;
use crate::domain::constants::{CHAPEL_COMPILER, WRITE_TEST_FILE};
use crate::domain::models::{Finding, FindingKind};
use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::Path;

pub fn validate_templates(cfg: &Config) -> Vec<Finding> {
    let mut findings = Vec::new();
    for (slang, dirs) in cfg.specializers.templates.iter() {
        for dir in dirs {
            if dir.exists() {
                continue;
            }
            tracing::debug!(slang, dir = %dir.display(), "template directory missing");
            findings.push(Finding {
                kind: FindingKind::MissingTemplateDir,
                slang: Some(slang.to_string()),
                path: dir.clone(),
                message: format!(
                    "missing template directory for {}: {}",
                    slang,
                    dir.display()
                ),
                cause: None,
            });
        }
    }
    findings
}

fn create_new(path: &Path) -> io::Result<File> {
    OpenOptions::new().write(true).create_new(true).open(path)
}

/// Create, write and remove a scratch file in `dir`.
///
/// An existing `write_test` belongs to someone else: it is left alone and a
/// process-specific name is used instead. Only the file created here is
/// removed.
fn try_write(dir: &Path) -> io::Result<()> {
    let mut path = dir.join(WRITE_TEST_FILE);
    let mut file = match create_new(&path) {
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            path = dir.join(format!("{}.{}", WRITE_TEST_FILE, std::process::id()));
            create_new(&path)?
        }
        other => other?,
    };
    let written = file
        .write_all(b"modweave write test\n")
        .and_then(|()| file.sync_all());
    drop(file);
    let removed = fs::remove_file(&path);
    written.and(removed)
}

pub fn validate_object_store(cfg: &Config) -> Vec<Finding> {
    let mut findings = Vec::new();
    for (slang, output_path) in cfg.object_store.output_paths.iter() {
        if let Err(e) = try_write(output_path) {
            tracing::debug!(slang, path = %output_path.display(), error = %e, "object store not writable");
            findings.push(Finding {
                kind: FindingKind::WriteProbeFailed,
                slang: Some(slang.to_string()),
                path: output_path.clone(),
                message: format!(
                    "cannot write to object store for {} at {}: {}",
                    slang,
                    output_path.display(),
                    e
                ),
                cause: Some(e.to_string()),
            });
        }
    }
    findings
}

pub fn validate_libraries(cfg: &Config) -> Vec<Finding> {
    let Some(chapel) = cfg.chapel() else {
        return vec![Finding {
            kind: FindingKind::CompilerNotConfigured,
            slang: None,
            path: cfg.path.clone(),
            message: format!("compilers.{} is not configured", CHAPEL_COMPILER),
            cause: None,
        }];
    };

    let lib_dir = chapel.lib_dir();
    if !lib_dir.is_dir() {
        tracing::debug!(dir = %lib_dir.display(), "chapel lib directory missing");
        return vec![Finding {
            kind: FindingKind::MissingLibDir,
            slang: None,
            path: lib_dir.clone(),
            message: format!("missing lib dir: {}", lib_dir.display()),
            cause: None,
        }];
    }

    cfg.chapel_libraries()
        .into_iter()
        .filter_map(|name| {
            let path = lib_dir.join(&name);
            if path.exists() {
                return None;
            }
            Some(Finding {
                kind: FindingKind::MissingLibrary,
                slang: None,
                message: format!("missing library {} in {}", name, lib_dir.display()),
                path,
                cause: None,
            })
        })
        .collect()
}
