//! Semantic checks over a parsed registry, in two modes.
//!
//! [`HookRegistry::validate`] is the strict mode: first defect wins, loading
//! aborts. [`HookRegistry::lint`] walks the same checks and collects every
//! finding, adding pin-hygiene warnings that strict loading tolerates. Both
//! modes share one error walk, so `validate` returns `Ok` exactly when `lint`
//! reports no error-severity finding.

use std::collections::HashSet;

use regex::Regex;
use serde::Serialize;

use crate::error::ValidationError;
use crate::types::{HookRegistry, is_known_stage};

/// Revisions that point at a moving target instead of a fixed artifact.
const MUTABLE_REVISIONS: [&str; 4] = ["HEAD", "latest", "main", "master"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

/// One lint observation, located by source repo and hook id where known.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook: Option<String>,
    pub message: String,
}

impl Finding {
    fn from_validation(error: &ValidationError) -> Self {
        Self {
            severity: Severity::Error,
            repo: error.repo().map(str::to_string),
            hook: error.hook_id().map(str::to_string),
            message: error.to_string(),
        }
    }

    fn warning(repo: &str, hook: Option<&str>, message: String) -> Self {
        Self {
            severity: Severity::Warning,
            repo: Some(repo.to_string()),
            hook: hook.map(str::to_string),
            message,
        }
    }
}

/// Full-registry lint result: error findings first (sources before the
/// top-level settings), then warnings.
#[derive(Debug, Clone, Serialize)]
pub struct LintReport {
    pub sources_checked: usize,
    pub hooks_checked: usize,
    pub findings: Vec<Finding>,
}

impl LintReport {
    /// Whether a strict load of the same registry would succeed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|finding| finding.severity == Severity::Error)
            .count()
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|finding| finding.severity == Severity::Warning)
            .count()
    }
}

impl HookRegistry {
    /// Strict semantic validation: the first defect found aborts. The walk
    /// covers sources (and their hooks) in document order first, then the
    /// top-level settings.
    ///
    /// Silent omission of a broken entry would skip its checks without
    /// notice, so there is no partial acceptance.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.semantic_errors().into_iter().next() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Walk the whole registry and report every finding instead of aborting.
    #[must_use]
    pub fn lint(&self) -> LintReport {
        let mut findings: Vec<Finding> = self
            .semantic_errors()
            .iter()
            .map(Finding::from_validation)
            .collect();
        findings.extend(self.warning_findings());

        LintReport {
            sources_checked: self.source_count(),
            hooks_checked: self.hook_count(),
            findings,
        }
    }

    /// Every condition strict validation rejects, in document order: sources
    /// (and their hooks) first, then the top-level settings.
    fn semantic_errors(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        for (index, source) in self.repos.iter().enumerate() {
            if source.repo.is_empty() {
                errors.push(ValidationError::EmptyRepo { index });
            }
            if source.rev.is_empty() {
                errors.push(ValidationError::EmptyRevision {
                    repo: source.repo.clone(),
                });
            }

            let mut seen_ids = HashSet::new();
            for (hook_index, hook) in source.hooks.iter().enumerate() {
                if hook.id.is_empty() {
                    errors.push(ValidationError::EmptyHookId {
                        repo: source.repo.clone(),
                        index: hook_index,
                    });
                } else if !seen_ids.insert(hook.id.as_str()) {
                    errors.push(ValidationError::DuplicateHookId {
                        repo: source.repo.clone(),
                        id: hook.id.clone(),
                    });
                }

                for (field, pattern) in [("files", &hook.files), ("exclude", &hook.exclude)] {
                    if let Some(pattern) = pattern {
                        if let Err(error) = Regex::new(pattern) {
                            errors.push(ValidationError::InvalidHookPattern {
                                repo: source.repo.clone(),
                                hook: hook.id.clone(),
                                field,
                                reason: error.to_string(),
                            });
                        }
                    }
                }

                for stage in &hook.stages {
                    if !is_known_stage(stage) {
                        errors.push(ValidationError::UnknownStage {
                            repo: source.repo.clone(),
                            hook: hook.id.clone(),
                            stage: stage.clone(),
                        });
                    }
                }
            }
        }

        if let Some(pattern) = &self.exclude {
            if let Err(error) = Regex::new(pattern) {
                errors.push(ValidationError::InvalidExclude {
                    reason: error.to_string(),
                });
            }
        }
        for stage in &self.default_stages {
            if !is_known_stage(stage) {
                errors.push(ValidationError::UnknownDefaultStage {
                    stage: stage.clone(),
                });
            }
        }
        if let Some(version) = &self.minimum_pre_commit_version {
            if let Err(error) = semver::Version::parse(version) {
                errors.push(ValidationError::InvalidMinimumVersion {
                    version: version.clone(),
                    reason: error.to_string(),
                });
            }
        }

        errors
    }

    /// Loadable-but-suspect conditions. These never fail a strict load.
    fn warning_findings(&self) -> Vec<Finding> {
        let mut findings = Vec::new();

        for source in &self.repos {
            if MUTABLE_REVISIONS.contains(&source.rev.as_str()) {
                findings.push(Finding::warning(
                    &source.repo,
                    None,
                    format!(
                        "revision '{}' is a moving target; pin a tag or commit for reproducible checks",
                        source.rev
                    ),
                ));
            }

            for hook in &source.hooks {
                let mut seen_deps = HashSet::new();
                for dep in &hook.additional_dependencies {
                    if !seen_deps.insert(dep.as_str()) {
                        findings.push(Finding::warning(
                            &source.repo,
                            Some(hook.id.as_str()),
                            format!("duplicate additional dependency '{dep}'"),
                        ));
                    }
                }

                for (position, arg) in hook.args.iter().enumerate() {
                    if arg.is_empty() {
                        findings.push(Finding::warning(
                            &source.repo,
                            Some(hook.id.as_str()),
                            format!("empty token in args (position {position})"),
                        ));
                    }
                }
            }
        }

        findings
    }
}
