use crate::domain::constants::VERSION_QUERY_ARG;
use crate::domain::models::{Availability, ProbeItem, ProbeReport};
use std::process::{Command, Stdio};

/// Can `name --version` be started? The program's own exit status is ignored.
pub fn probe(name: &str) -> Availability {
    let spawned = Command::new(name)
        .arg(VERSION_QUERY_ARG)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();
    match spawned {
        Ok(status) => {
            tracing::debug!(executable = name, ?status, "probe started");
            Availability::Available
        }
        Err(e) => {
            tracing::debug!(executable = name, error = %e, "probe failed to start");
            Availability::Unavailable
        }
    }
}

/// Probe every distinct name once, then classify the unavailable ones.
///
/// A name listed as both required and recommended yields one error and one
/// warning when missing.
pub fn probe_toolchain(
    required: &[String],
    recommended: &[String],
    probe_fn: impl Fn(&str) -> Availability,
) -> ProbeReport {
    let mut report = ProbeReport::default();
    for name in required.iter().chain(recommended) {
        if report.probed.iter().any(|p| p.name == *name) {
            continue;
        }
        report.probed.push(ProbeItem {
            name: name.clone(),
            status: probe_fn(name),
        });
    }

    let missing = |name: &str| {
        report
            .probed
            .iter()
            .any(|p| p.name == name && p.status == Availability::Unavailable)
    };
    let errors: Vec<String> = required
        .iter()
        .filter(|n| missing(n.as_str()))
        .cloned()
        .collect();
    let warnings: Vec<String> = recommended
        .iter()
        .filter(|n| missing(n.as_str()))
        .cloned()
        .collect();

    for name in &errors {
        tracing::warn!(executable = %name, "required executable unavailable");
    }
    for name in &warnings {
        tracing::info!(executable = %name, "recommended executable unavailable");
    }
    report.errors = errors;
    report.warnings = warnings;
    report
}
