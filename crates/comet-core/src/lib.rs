//! Core shared types for Comet.
//!
//! This crate is intentionally small and dependency-light.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// How suggestion generation was invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerType {
    /// Generation fired automatically while the user typed.
    AutoTrigger,
    /// The user explicitly requested suggestions.
    OnDemand,
}

/// Granularity of a generated suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompletionType {
    Line,
    Block,
}

/// A license/attribution reference attached to generated suggestion content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub license_name: String,
    pub repository: String,
    pub url: String,
}

impl Reference {
    pub fn new(
        license_name: impl Into<String>,
        repository: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            license_name: license_name.into(),
            repository: repository.into(),
            url: url.into(),
        }
    }
}

/// One generated completion candidate.
///
/// A candidate's ordinal position within its batch is its index in the batch
/// slice; the content itself is opaque to Comet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub content: String,
    /// License references attached to the generated content, possibly with
    /// duplicate license names across repositories.
    pub references: Vec<Reference>,
}

impl Suggestion {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            references: Vec::new(),
        }
    }

    pub fn with_references(content: impl Into<String>, references: Vec<Reference>) -> Self {
        Self {
            content: content.into(),
            references,
        }
    }

    /// Number of distinct license names attached to this candidate's content.
    pub fn unique_license_count(&self) -> usize {
        self.references
            .iter()
            .map(|r| r.license_name.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }
}
