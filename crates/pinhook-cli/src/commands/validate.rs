use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ValidateResponse {
    valid: bool,
    config: String,
    sources: usize,
    hooks: usize,
}

/// Handle `pinhook validate`.
///
/// Strict mode: the first schema or semantic defect aborts with a non-zero
/// exit, the way a CI gate wants it.
pub fn run(flags: &GlobalFlags) -> anyhow::Result<()> {
    tracing::debug!(config = %flags.config, "running strict validation");

    let registry = pinhook_registry::load(Path::new(&flags.config))
        .with_context(|| format!("validation failed for '{}'", flags.config))?;

    let response = ValidateResponse {
        valid: true,
        config: flags.config.clone(),
        sources: registry.source_count(),
        hooks: registry.hook_count(),
    };
    output(&response, flags.format, || {
        format!(
            "{}: ok ({} sources, {} hooks)",
            response.config, response.sources, response.hooks
        )
    })
}
