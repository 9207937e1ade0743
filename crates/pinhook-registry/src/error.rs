//! Error taxonomy for descriptor loading.
//!
//! `SchemaError` covers structural problems caught by serde (missing or
//! unknown keys, type mismatches, duplicate mapping keys). `ValidationError`
//! covers entries that are structurally present but semantically invalid.
//! Both are fatal to the loading step; there is no recovery policy.

use std::path::PathBuf;

use thiserror::Error;

/// The descriptor does not match the expected wire schema.
#[derive(Debug, Error)]
#[error("descriptor does not match the expected schema: {source}")]
pub struct SchemaError {
    #[from]
    source: serde_yaml::Error,
}

impl SchemaError {
    /// 1-based line of the offending construct, when the parser knows it.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        self.source.location().map(|location| location.line())
    }

    /// 1-based column of the offending construct, when the parser knows it.
    #[must_use]
    pub fn column(&self) -> Option<usize> {
        self.source.location().map(|location| location.column())
    }
}

/// A structurally well-formed entry carries an invalid value.
///
/// Each variant names the offending source (and hook, where one applies) so
/// the author can find the entry without line numbers.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A source entry declares an empty repository URL.
    #[error("repository url is empty (repos[{index}])")]
    EmptyRepo { index: usize },

    /// A source entry carries the unpinned sentinel `rev: ''`.
    #[error("revision pin is empty for repo '{repo}'")]
    EmptyRevision { repo: String },

    /// A hook entry declares an empty id.
    #[error("hook id is empty (hooks[{index}] of repo '{repo}')")]
    EmptyHookId { repo: String, index: usize },

    /// Two hooks under one source share an id.
    #[error("duplicate hook id '{id}' in repo '{repo}'")]
    DuplicateHookId { repo: String, id: String },

    /// A per-hook `files`/`exclude` pattern does not compile.
    #[error("invalid {field} regex for hook '{hook}' in repo '{repo}': {reason}")]
    InvalidHookPattern {
        repo: String,
        hook: String,
        field: &'static str,
        reason: String,
    },

    /// The top-level `exclude` pattern does not compile.
    #[error("invalid top-level exclude regex: {reason}")]
    InvalidExclude { reason: String },

    /// A hook names a stage the orchestration tool does not know.
    #[error("unknown stage '{stage}' for hook '{hook}' in repo '{repo}'")]
    UnknownStage {
        repo: String,
        hook: String,
        stage: String,
    },

    /// `default_stages` names a stage the orchestration tool does not know.
    #[error("unknown stage '{stage}' in default_stages")]
    UnknownDefaultStage { stage: String },

    /// `minimum_pre_commit_version` is not a parseable version.
    #[error("minimum_pre_commit_version '{version}' is not a valid version: {reason}")]
    InvalidMinimumVersion { version: String, reason: String },
}

impl ValidationError {
    /// Repository URL of the offending source, when the variant carries one.
    #[must_use]
    pub fn repo(&self) -> Option<&str> {
        match self {
            Self::EmptyRevision { repo }
            | Self::EmptyHookId { repo, .. }
            | Self::DuplicateHookId { repo, .. }
            | Self::InvalidHookPattern { repo, .. }
            | Self::UnknownStage { repo, .. } => Some(repo),
            Self::EmptyRepo { .. }
            | Self::InvalidExclude { .. }
            | Self::UnknownDefaultStage { .. }
            | Self::InvalidMinimumVersion { .. } => None,
        }
    }

    /// Id of the offending hook, when the variant carries one.
    #[must_use]
    pub fn hook_id(&self) -> Option<&str> {
        match self {
            Self::DuplicateHookId { id, .. } => Some(id),
            Self::InvalidHookPattern { hook, .. } | Self::UnknownStage { hook, .. } => Some(hook),
            _ => None,
        }
    }
}

/// Anything that can go wrong in [`crate::load`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read descriptor at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
