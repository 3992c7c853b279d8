use crate::cli::Cli;
use crate::config::{Config, ConfigState};
use crate::services::build::{compile, ExternalBuilder};
use crate::services::check::run_check;
use crate::services::output::{print_one, print_report};
use crate::services::probe::probe;
use crate::services::testing::{run_all, ExternalRunner};
use std::path::Path;

pub fn handle_check(cli: &Cli, config: &Config) -> anyhow::Result<i32> {
    let report = run_check(config, probe);
    let ok = report.ok;
    print_report(cli.json, ok, report, |r| {
        let mut lines = Vec::new();
        for name in &r.errors {
            lines.push(format!("error\tmissing required executable: {}", name));
        }
        for name in &r.warnings {
            lines.push(format!("warning\tmissing recommended executable: {}", name));
        }
        for f in &r.findings {
            lines.push(format!("finding\t{}", f));
        }
        lines.push(format!(
            "check: {}",
            if r.ok { "ok" } else { "needs_attention" }
        ));
        lines
    })?;
    Ok(if cli.strict && !ok { 1 } else { 0 })
}

pub fn handle_compile(cli: &Cli, state: &ConfigState, source: &Path) -> anyhow::Result<i32> {
    let outcome = compile(state, &ExternalBuilder, source)?;
    print_one(cli.json, outcome, |o| {
        format!(
            "source: {}\noutput: {}\nwrapper: {}",
            o.source_path.display(),
            o.output_path.display(),
            o.wrapper_path.display()
        )
    })?;
    Ok(0)
}

pub fn handle_testing(cli: &Cli, config: &Config) -> anyhow::Result<i32> {
    let runner = ExternalRunner {
        stdout_to_stderr: cli.json,
    };
    let outcome = run_all(config, &runner);
    let code = outcome.exit_code();
    print_report(cli.json, outcome.passed(), outcome, |o| {
        let mut lines: Vec<String> = o
            .runs
            .iter()
            .map(|r| format!("{}\t{}", r.path.display(), r.status))
            .collect();
        lines.push(format!("testing: sum={} paths={}", o.sum, o.runs.len()));
        lines
    })?;
    Ok(code)
}
