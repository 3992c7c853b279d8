use crate::config::Config;
use crate::domain::models::{Availability, CheckReport, Finding, ProbeReport};
use crate::services::probe::probe_toolchain;
use crate::services::validate::{validate_libraries, validate_object_store, validate_templates};

pub fn build_check_report(probes: ProbeReport, findings: Vec<Finding>) -> CheckReport {
    CheckReport {
        ok: probes.errors.is_empty() && findings.is_empty(),
        errors: probes.errors,
        warnings: probes.warnings,
        findings,
    }
}

/// Probe executables, then run the template, object-store and library
/// validators in that order.
pub fn run_check(cfg: &Config, probe_fn: impl Fn(&str) -> Availability) -> CheckReport {
    let probes = probe_toolchain(
        &cfg.required_executables(),
        &cfg.recommended_executables(),
        probe_fn,
    );
    let mut findings = validate_templates(cfg);
    findings.extend(validate_object_store(cfg));
    findings.extend(validate_libraries(cfg));
    build_check_report(probes, findings)
}
