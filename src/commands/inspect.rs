use crate::cli::Cli;
use crate::config::Config;
use crate::domain::models::{FileEntry, VersionInfo};
use crate::services::introspect::{list_bfiles, list_object_store, list_sfiles, list_templates};
use crate::services::output::{print_one, print_out};

fn existence(exists: bool) -> &'static str {
    if exists {
        "ok"
    } else {
        "missing"
    }
}

/// `ok`/`missing`, or the read error for a path that exists but failed.
fn state(exists: bool, error: &Option<String>) -> String {
    match error {
        Some(e) => format!("error: {}", e),
        None => existence(exists).to_string(),
    }
}

fn print_files(cli: &Cli, files: &[FileEntry]) -> anyhow::Result<i32> {
    print_out(cli.json, files, |f| {
        format!("{}\t{}\t{}", f.slang, f.path.display(), existence(f.exists))
    })?;
    Ok(0)
}

pub fn handle_sfiles(cli: &Cli, config: &Config) -> anyhow::Result<i32> {
    print_files(cli, &list_sfiles(config))
}

pub fn handle_bfiles(cli: &Cli, config: &Config) -> anyhow::Result<i32> {
    print_files(cli, &list_bfiles(config))
}

pub fn handle_templates(cli: &Cli, config: &Config) -> anyhow::Result<i32> {
    let entries = list_templates(config);
    print_out(cli.json, &entries, |t| {
        format!(
            "{}\t{}\t{}\t{}",
            t.slang,
            t.dir.display(),
            state(t.exists, &t.error),
            t.files.join(",")
        )
    })?;
    Ok(0)
}

pub fn handle_object_store(cli: &Cli, config: &Config) -> anyhow::Result<i32> {
    let entries = list_object_store(config);
    if cli.json {
        print_out(true, &entries, |_| String::new())?;
        return Ok(0);
    }
    for e in &entries {
        println!(
            "{}\t{}\t{}",
            e.slang,
            e.output_path.display(),
            state(e.exists, &e.error)
        );
        for o in &e.objects {
            match (o.size, &o.sha256) {
                (Some(size), Some(sha256)) => println!("  {}\t{}\t{}", o.name, size, sha256),
                _ => println!("  {}\t{}", o.name, state(true, &o.error)),
            }
        }
    }
    Ok(0)
}

pub fn handle_version(cli: &Cli) -> anyhow::Result<i32> {
    let info = VersionInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    };
    print_one(cli.json, info, |v| format!("{} {}", v.name, v.version))?;
    Ok(0)
}
