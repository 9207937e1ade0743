//! # pinhook-registry
//!
//! Descriptor model and validating loader for pre-commit hook registry
//! descriptors (`.pre-commit-config.yaml`).
//!
//! A descriptor is a static, ordered list of hook sources, each pinning an
//! external repository at a revision and declaring which of its hooks run
//! against staged files. This crate never fetches or executes anything; it
//! parses the declarative file into a typed [`HookRegistry`] and checks it.
//!
//! Loading happens in two phases:
//! 1. Schema phase ([`parse`]): serde with strict field checking. A missing
//!    required key, a misspelled key, or a type mismatch is a [`SchemaError`].
//! 2. Semantic phase ([`HookRegistry::validate`]): empty revision pins,
//!    duplicate hook ids, bad regex fields and similar defects are a
//!    [`ValidationError`]. [`load`] runs both and never returns a partial
//!    registry.
//!
//! [`HookRegistry::lint`] walks the same checks in report mode, collecting
//! every finding (errors plus pin-hygiene warnings) instead of aborting at
//! the first.

mod error;
mod lint;
mod loader;
mod types;

pub use error::{LoadError, SchemaError, ValidationError};
pub use lint::{Finding, LintReport, Severity};
pub use loader::{load, load_unvalidated, parse};
pub use types::{HookInvocation, HookRegistry, HookSource, KNOWN_STAGES, is_known_stage};
