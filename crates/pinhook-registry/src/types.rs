//! Typed model of the hook registry descriptor wire format.
//!
//! Field names mirror the on-disk YAML keys one to one. Every struct carries
//! `deny_unknown_fields`, so the schema phase rejects misspelled keys (the
//! classic `epo:` for `repo:`) instead of silently dropping entries. Optional
//! fields default and are skipped on serialize, which keeps serialized output
//! canonical: reloading it yields an equal registry.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// HookRegistry
// ---------------------------------------------------------------------------

/// Root of a hook registry descriptor.
///
/// `repos` is the required payload; insertion order is execution order and is
/// preserved end to end. The remaining top-level settings tune how the
/// orchestration tool applies the declared hooks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HookRegistry {
    /// Default stage filter applied to hooks that declare no `stages`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_stages: Vec<String>,

    /// File-exclusion regex applied to every hook.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,

    /// Stop at the first failing hook instead of running all of them.
    #[serde(default, skip_serializing_if = "is_false")]
    pub fail_fast: bool,

    /// Version floor for the orchestration tool itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_pre_commit_version: Option<String>,

    /// Ordered hook sources; execution order follows declaration order.
    pub repos: Vec<HookSource>,
}

impl HookRegistry {
    /// Number of declared hook sources.
    #[must_use]
    pub fn source_count(&self) -> usize {
        self.repos.len()
    }

    /// Total number of hook invocations across all sources.
    #[must_use]
    pub fn hook_count(&self) -> usize {
        self.repos.iter().map(|source| source.hooks.len()).sum()
    }

    /// All hook invocations in execution order, paired with their owning source.
    pub fn iter_hooks(&self) -> impl Iterator<Item = (&HookSource, &HookInvocation)> {
        self.repos
            .iter()
            .flat_map(|source| source.hooks.iter().map(move |hook| (source, hook)))
    }

    /// Minimal valid starter descriptor.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            repos: vec![
                HookSource {
                    repo: "https://github.com/pre-commit/pre-commit-hooks".to_string(),
                    rev: "v4.6.0".to_string(),
                    hooks: vec![
                        HookInvocation::new("trailing-whitespace"),
                        HookInvocation::new("end-of-file-fixer"),
                        HookInvocation::new("check-yaml"),
                    ],
                },
                HookSource {
                    repo: "https://github.com/psf/black".to_string(),
                    rev: "24.4.2".to_string(),
                    hooks: vec![HookInvocation::new("black")],
                },
            ],
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// HookSource
// ---------------------------------------------------------------------------

/// A pinned external repository providing one or more hooks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HookSource {
    /// Repository URL the orchestration tool fetches hooks from.
    pub repo: String,

    /// Pinned revision. The empty string is the "local/unpinned" sentinel and
    /// fails semantic validation.
    pub rev: String,

    /// Ordered hook invocations owned by this source.
    pub hooks: Vec<HookInvocation>,
}

// ---------------------------------------------------------------------------
// HookInvocation
// ---------------------------------------------------------------------------

/// One declared hook run, identified by its id within the owning source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HookInvocation {
    /// Hook id as published by the source repository. Unique per source.
    pub id: String,

    /// Display-name override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Extra arguments passed to the hook, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    /// Extra package specifiers installed into the hook environment.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_dependencies: Vec<String>,

    /// Force hook output to be shown even on success.
    #[serde(default, skip_serializing_if = "is_false")]
    pub verbose: bool,

    /// File-inclusion regex override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<String>,

    /// File-exclusion regex override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,

    /// Git stages this hook runs at; empty means the registry default.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stages: Vec<String>,

    /// Language toolchain version override (e.g. `python3.11`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_version: Option<String>,

    /// Run even when no staged file matches.
    #[serde(default, skip_serializing_if = "is_false")]
    pub always_run: bool,
}

impl HookInvocation {
    /// Invocation with the given id and every optional field at its default.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Stages
// ---------------------------------------------------------------------------

/// Stage names the orchestration tool understands, including the pre-3.2
/// aliases (`commit`, `merge-commit`, `push`) older descriptors still use.
pub const KNOWN_STAGES: &[&str] = &[
    "commit-msg",
    "manual",
    "post-checkout",
    "post-commit",
    "post-merge",
    "post-rewrite",
    "pre-commit",
    "pre-merge-commit",
    "pre-push",
    "pre-rebase",
    "prepare-commit-msg",
    "commit",
    "merge-commit",
    "push",
];

/// Whether `stage` names a stage the orchestration tool understands.
#[must_use]
pub fn is_known_stage(stage: &str) -> bool {
    KNOWN_STAGES.contains(&stage)
}

fn is_false(value: &bool) -> bool {
    !*value
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn minimal_hook_defaults_optional_fields() {
        let yaml = r"
repos:
- repo: https://example.com/tool
  rev: v1.0.0
  hooks:
  - id: a
";
        let registry: HookRegistry = serde_yaml::from_str(yaml).unwrap();
        let hook = &registry.repos[0].hooks[0];
        assert_eq!(hook.id, "a");
        assert_eq!(hook.name, None);
        assert!(hook.args.is_empty());
        assert!(hook.additional_dependencies.is_empty());
        assert!(!hook.verbose);
        assert!(!hook.always_run);
        assert!(hook.stages.is_empty());
    }

    #[test]
    fn optional_top_level_settings_parse() {
        let yaml = r"
fail_fast: true
exclude: ^vendor/
minimum_pre_commit_version: 3.2.0
default_stages: [pre-commit, pre-push]
repos: []
";
        let registry: HookRegistry = serde_yaml::from_str(yaml).unwrap();
        assert!(registry.fail_fast);
        assert_eq!(registry.exclude.as_deref(), Some("^vendor/"));
        assert_eq!(
            registry.minimum_pre_commit_version.as_deref(),
            Some("3.2.0")
        );
        assert_eq!(registry.default_stages, vec!["pre-commit", "pre-push"]);
    }

    #[test]
    fn misspelled_repo_key_is_rejected() {
        let yaml = r"
repos:
- epo: https://example.com/tool
  rev: v1.0.0
  hooks:
  - id: a
";
        let error = serde_yaml::from_str::<HookRegistry>(yaml).unwrap_err();
        assert!(error.to_string().contains("epo"), "got: {error}");
    }

    #[test]
    fn unknown_hook_field_is_rejected() {
        let yaml = r"
repos:
- repo: https://example.com/tool
  rev: v1.0.0
  hooks:
  - id: a
    arggs: ['--fix']
";
        assert!(serde_yaml::from_str::<HookRegistry>(yaml).is_err());
    }

    #[test]
    fn missing_rev_key_is_rejected() {
        let yaml = r"
repos:
- repo: https://example.com/tool
  hooks:
  - id: a
";
        let error = serde_yaml::from_str::<HookRegistry>(yaml).unwrap_err();
        assert!(error.to_string().contains("rev"), "got: {error}");
    }

    #[test]
    fn source_order_is_preserved() {
        let yaml = r"
repos:
- repo: https://example.com/first
  rev: v1
  hooks:
  - id: one
- repo: https://example.com/second
  rev: v2
  hooks:
  - id: two
  - id: three
";
        let registry: HookRegistry = serde_yaml::from_str(yaml).unwrap();
        let ids: Vec<&str> = registry.iter_hooks().map(|(_, hook)| hook.id.as_str()).collect();
        assert_eq!(ids, vec!["one", "two", "three"]);
        assert_eq!(registry.source_count(), 2);
        assert_eq!(registry.hook_count(), 3);
    }

    #[test]
    fn serialized_output_skips_defaults() {
        let registry = HookRegistry {
            repos: vec![HookSource {
                repo: "https://example.com/tool".to_string(),
                rev: "v1.0.0".to_string(),
                hooks: vec![HookInvocation::new("a")],
            }],
            ..HookRegistry::default()
        };
        let yaml = serde_yaml::to_string(&registry).unwrap();
        assert!(!yaml.contains("verbose"));
        assert!(!yaml.contains("args"));
        assert!(!yaml.contains("fail_fast"));
        assert!(!yaml.contains("default_stages"));
    }

    #[test]
    fn sample_parses_back_to_itself() {
        let sample = HookRegistry::sample();
        let yaml = serde_yaml::to_string(&sample).unwrap();
        let reparsed: HookRegistry = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(reparsed, sample);
    }

    #[test]
    fn stage_names_cover_current_and_legacy_spellings() {
        assert!(is_known_stage("pre-commit"));
        assert!(is_known_stage("commit"));
        assert!(is_known_stage("push"));
        assert!(is_known_stage("manual"));
        assert!(!is_known_stage("pre_commit"));
        assert!(!is_known_stage(""));
    }
}
