use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
struct HookRow {
    repo: String,
    rev: String,
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

#[derive(Debug, Serialize)]
struct ListResponse {
    config: String,
    hooks: Vec<HookRow>,
}

/// Handle `pinhook list`.
///
/// Enumerates hooks in execution order. Listing goes through the strict
/// loader: an inventory of a broken descriptor would be misleading.
pub fn run(flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = pinhook_registry::load(Path::new(&flags.config))
        .with_context(|| format!("cannot list hooks for '{}'", flags.config))?;

    let hooks = registry
        .iter_hooks()
        .map(|(source, hook)| HookRow {
            repo: source.repo.clone(),
            rev: source.rev.clone(),
            id: hook.id.clone(),
            name: hook.name.clone(),
        })
        .collect();

    let response = ListResponse {
        config: flags.config.clone(),
        hooks,
    };
    output(&response, flags.format, || render_text(&response))
}

fn render_text(response: &ListResponse) -> String {
    if response.hooks.is_empty() {
        return format!("{}: no hooks configured", response.config);
    }

    let id_width = response
        .hooks
        .iter()
        .map(|row| row.id.len())
        .max()
        .unwrap_or(0);
    let rev_width = response
        .hooks
        .iter()
        .map(|row| row.rev.len())
        .max()
        .unwrap_or(0);

    response
        .hooks
        .iter()
        .map(|row| format!("{:<id_width$}  {:<rev_width$}  {}", row.id, row.rev, row.repo))
        .collect::<Vec<_>>()
        .join("\n")
}
