use std::path::Path;

use anyhow::{Context, bail};
use pinhook_registry::{Finding, Severity};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
struct LintResponse {
    valid: bool,
    config: String,
    sources_checked: usize,
    hooks_checked: usize,
    errors: usize,
    warnings: usize,
    findings: Vec<Finding>,
}

/// Handle `pinhook lint`.
///
/// Report mode: a descriptor that decodes is walked in full, so every
/// defect and warning lands in one run. The exit code still fails when
/// any error-severity finding is present.
pub fn run(flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = pinhook_registry::load_unvalidated(Path::new(&flags.config))
        .with_context(|| format!("lint failed for '{}'", flags.config))?;
    let report = registry.lint();

    let response = LintResponse {
        valid: report.is_valid(),
        config: flags.config.clone(),
        sources_checked: report.sources_checked,
        hooks_checked: report.hooks_checked,
        errors: report.error_count(),
        warnings: report.warning_count(),
        findings: report.findings,
    };
    tracing::debug!(
        errors = response.errors,
        warnings = response.warnings,
        "lint walk complete"
    );

    output(&response, flags.format, || render_text(&response))?;
    if !response.valid {
        bail!("lint: {} error(s) in '{}'", response.errors, response.config);
    }
    Ok(())
}

fn render_text(response: &LintResponse) -> String {
    let mut lines = vec![format!(
        "{}: {} sources, {} hooks, {} errors, {} warnings",
        response.config,
        response.sources_checked,
        response.hooks_checked,
        response.errors,
        response.warnings
    )];
    for finding in &response.findings {
        lines.push(render_finding(finding));
    }
    lines.join("\n")
}

fn render_finding(finding: &Finding) -> String {
    let label = match finding.severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
    };

    // Error messages carry their own location; warning messages do not.
    let mut line = format!("{label}: {}", finding.message);
    if finding.severity == Severity::Warning {
        match (&finding.repo, &finding.hook) {
            (Some(repo), Some(hook)) => {
                line.push_str(&format!(" (hook '{hook}' in repo '{repo}')"));
            }
            (Some(repo), None) => line.push_str(&format!(" (repo '{repo}')")),
            _ => {}
        }
    }
    line
}
