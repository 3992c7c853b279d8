//! Read-only listings behind `--templates`, `--sfiles`, `--bfiles` and
//! `--object-store`. A path that cannot be read is reported on its entry.

use crate::config::{Config, OrderedMap};
use crate::domain::models::{FileEntry, ObjectStoreEntry, StoredObject, TemplateEntry};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// Regular files directly in `dir`, symlinks followed.
fn sorted_file_names(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.path().is_file() {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
    }
    names.sort();
    Ok(names)
}

pub fn list_templates(cfg: &Config) -> Vec<TemplateEntry> {
    let mut out = Vec::new();
    for (slang, dirs) in cfg.specializers.templates.iter() {
        for dir in dirs {
            let exists = dir.is_dir();
            let (files, error) = if exists {
                match sorted_file_names(dir) {
                    Ok(files) => (files, None),
                    Err(e) => {
                        tracing::warn!(slang, dir = %dir.display(), error = %e, "cannot list template directory");
                        (Vec::new(), Some(e.to_string()))
                    }
                }
            } else {
                (Vec::new(), None)
            };
            out.push(TemplateEntry {
                slang: slang.to_string(),
                dir: dir.clone(),
                exists,
                files,
                error,
            });
        }
    }
    out
}

fn list_files(map: &OrderedMap<Vec<PathBuf>>) -> Vec<FileEntry> {
    map.iter()
        .flat_map(|(slang, files)| {
            files.iter().map(move |path| FileEntry {
                slang: slang.to_string(),
                path: path.clone(),
                exists: path.is_file(),
            })
        })
        .collect()
}

pub fn list_sfiles(cfg: &Config) -> Vec<FileEntry> {
    list_files(&cfg.specializers.sfiles)
}

pub fn list_bfiles(cfg: &Config) -> Vec<FileEntry> {
    list_files(&cfg.specializers.bfiles)
}

fn digest_file(path: &Path) -> io::Result<(u64, String)> {
    let mut hasher = Sha256::new();
    let size = io::copy(&mut File::open(path)?, &mut hasher)?;
    Ok((size, hex::encode(hasher.finalize())))
}

fn describe_object(path: &Path) -> StoredObject {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    match digest_file(path) {
        Ok((size, sha256)) => StoredObject {
            name,
            size: Some(size),
            sha256: Some(sha256),
            error: None,
        },
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot read stored object");
            StoredObject {
                name,
                size: None,
                sha256: None,
                error: Some(e.to_string()),
            }
        }
    }
}

pub fn list_object_store(cfg: &Config) -> Vec<ObjectStoreEntry> {
    let mut out = Vec::new();
    for (slang, output_path) in cfg.object_store.output_paths.iter() {
        let exists = output_path.is_dir();
        let mut objects = Vec::new();
        let mut error = None;
        if exists {
            match sorted_file_names(output_path) {
                Ok(names) => {
                    objects = names
                        .iter()
                        .map(|name| describe_object(&output_path.join(name)))
                        .collect();
                }
                Err(e) => {
                    tracing::warn!(slang, path = %output_path.display(), error = %e, "cannot list object store");
                    error = Some(e.to_string());
                }
            }
        }
        out.push(ObjectStoreEntry {
            slang: slang.to_string(),
            output_path: output_path.clone(),
            exists,
            objects,
            error,
        });
    }
    out
}
