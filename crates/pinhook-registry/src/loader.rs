//! Two-phase descriptor loading.
//!
//! The schema phase runs before semantic validation, so a malformed key in an
//! entry surfaces as a [`SchemaError`] even when the same entry also carries
//! an empty revision pin.

use std::fs;
use std::path::Path;

use crate::error::{LoadError, SchemaError};
use crate::types::HookRegistry;

/// Parse descriptor text. Schema phase only; no semantic checks.
pub fn parse(text: &str) -> Result<HookRegistry, SchemaError> {
    serde_yaml::from_str(text).map_err(SchemaError::from)
}

/// Read, parse, and validate the descriptor at `path`.
///
/// No partial registry is ever returned: any schema or semantic defect fails
/// the whole load.
pub fn load(path: &Path) -> Result<HookRegistry, LoadError> {
    let registry = load_unvalidated(path)?;
    registry.validate()?;
    tracing::debug!(
        path = %path.display(),
        sources = registry.source_count(),
        hooks = registry.hook_count(),
        "descriptor loaded"
    );
    Ok(registry)
}

/// Read and parse the descriptor at `path`, skipping semantic validation.
///
/// This is the entry point for report-mode callers that want
/// [`HookRegistry::lint`] to see semantically broken entries. The schema
/// phase still applies; a descriptor that does not parse is not lintable.
pub fn load_unvalidated(path: &Path) -> Result<HookRegistry, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse(&text)?)
}

impl HookRegistry {
    /// Serialize back to the wire format. Reloading the output yields an
    /// equal registry.
    pub fn to_yaml(&self) -> Result<String, SchemaError> {
        serde_yaml::to_string(self).map_err(SchemaError::from)
    }
}
