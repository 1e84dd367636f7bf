use std::collections::BTreeMap;
use std::sync::Arc;

use comet_core::{CompletionType, Suggestion, TriggerType};
use thiserror::Error;

use crate::config::TelemetryConfig;
use crate::events::UserDecisionEvent;
use crate::runtime_language::runtime_language;
use crate::sink::{SinkError, TelemetrySink};
use crate::suggestion_state::{classify, PrefixMatchVector, SuggestionState};

/// Immutable context shared by every event of one suggestion batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub request_id: String,
    pub session_id: String,
    pub trigger: TriggerType,
    pub completion_type: CompletionType,
    pub language: String,
    pub pagination_progress: u32,
}

/// Pre-resolved per-candidate states supplied by the caller.
///
/// A seed of [`SuggestionState::Showed`] records that the candidate was
/// displayed; its final state is still derived from the acceptance and
/// prefix-match signals. Any other seed is already terminal (e.g. a candidate
/// superseded mid-session) and passes through unchanged. When a seed map is
/// supplied, an index absent from it was never displayed and records
/// `Discard`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedStates {
    states: BTreeMap<usize, SuggestionState>,
}

impl SeedStates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, index: usize, state: SuggestionState) {
        self.states.insert(index, state);
    }

    pub fn get(&self, index: usize) -> Option<SuggestionState> {
        self.states.get(&index).copied()
    }

    /// Largest seeded index, used for boundary validation.
    fn max_index(&self) -> Option<usize> {
        self.states.keys().next_back().copied()
    }
}

impl FromIterator<(usize, SuggestionState)> for SeedStates {
    fn from_iter<I: IntoIterator<Item = (usize, SuggestionState)>>(iter: I) -> Self {
        Self {
            states: iter.into_iter().collect(),
        }
    }
}

/// A sink failure for one candidate's event.
///
/// Emission for the remaining candidates is still attempted; the recorder
/// reports every failed index rather than stopping at the first.
#[derive(Debug, Error)]
#[error("event for suggestion {index}: {source}")]
pub struct EmitFailure {
    pub index: usize,
    #[source]
    pub source: SinkError,
}

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("seeded state index {index} out of range for batch of {len}")]
    SeedOutOfRange { index: usize, len: usize },
    #[error("accepted index {index} out of range for batch of {len}")]
    AcceptedOutOfRange { index: usize, len: usize },
    #[error("{} of {attempted} user-decision events failed to emit", failures.len())]
    Emit {
        attempted: usize,
        failures: Vec<EmitFailure>,
    },
}

/// Records one user-decision event per suggestion once a batch resolves.
///
/// The recorder holds only the sink handle and configuration; all
/// session-scoped inputs arrive per call, so one instance can serve
/// sequential batches. Overlapping batches must be serialized by the caller.
pub struct UserDecisionRecorder {
    sink: Arc<dyn TelemetrySink>,
    config: TelemetryConfig,
}

impl UserDecisionRecorder {
    pub fn new(sink: Arc<dyn TelemetrySink>) -> Self {
        Self::with_config(sink, TelemetryConfig::default())
    }

    pub fn with_config(sink: Arc<dyn TelemetrySink>, config: TelemetryConfig) -> Self {
        Self { sink, config }
    }

    /// Classify every candidate of a resolved batch and emit one event each,
    /// in index order.
    ///
    /// `accepted` is the batch-wide accepted candidate, `None` when nothing
    /// was accepted. Boundary violations (seed or accepted index outside the
    /// batch) fail before any emission. Sink failures do not stop the
    /// remaining emission attempts and are reported together once the batch
    /// has been walked.
    pub async fn record_user_decisions(
        &self,
        ctx: &SessionContext,
        suggestions: &[Suggestion],
        accepted: Option<usize>,
        prefix_matched: &PrefixMatchVector,
        seeds: Option<&SeedStates>,
    ) -> Result<(), RecordError> {
        let len = suggestions.len();
        if let Some(seed_max) = seeds.and_then(SeedStates::max_index) {
            if seed_max >= len {
                return Err(RecordError::SeedOutOfRange {
                    index: seed_max,
                    len,
                });
            }
        }
        if let Some(index) = accepted.filter(|&index| index >= len) {
            return Err(RecordError::AcceptedOutOfRange { index, len });
        }

        if !self.config.enabled {
            tracing::debug!(
                target = "comet.telemetry",
                request_id = %ctx.request_id,
                candidates = len,
                "telemetry disabled, dropping user-decision batch"
            );
            return Ok(());
        }

        let runtime = runtime_language(&ctx.language);
        if runtime.is_none() {
            tracing::debug!(
                target = "comet.telemetry",
                language = %ctx.language,
                "no runtime mapping for language"
            );
        }

        let mut failures = Vec::new();
        for (index, suggestion) in suggestions.iter().enumerate() {
            let state = final_state(index, accepted, prefix_matched, seeds);
            let reference_count = if accepted == Some(index) {
                suggestion.unique_license_count()
            } else {
                0
            };

            let event = UserDecisionEvent {
                request_id: ctx.request_id.clone(),
                session_id: ctx.session_id.clone(),
                pagination_progress: ctx.pagination_progress,
                trigger_type: ctx.trigger,
                suggestion_index: index,
                suggestion_state: state,
                suggestion_reference_count: reference_count,
                completion_type: ctx.completion_type,
                language: ctx.language.clone(),
                runtime: runtime.map(|r| r.runtime).unwrap_or("").to_owned(),
                runtime_source: runtime.map(|r| r.runtime_source).unwrap_or("").to_owned(),
            };

            if let Err(source) = self.sink.emit(event).await {
                failures.push(EmitFailure { index, source });
            }
        }

        tracing::debug!(
            target = "comet.telemetry",
            request_id = %ctx.request_id,
            session_id = %ctx.session_id,
            candidates = len,
            failed = failures.len(),
            "recorded user-decision batch"
        );

        if failures.is_empty() {
            Ok(())
        } else {
            Err(RecordError::Emit {
                attempted: len,
                failures,
            })
        }
    }
}

/// Resolve the final state for one candidate, folding caller-seeded states
/// into the classification policy.
fn final_state(
    index: usize,
    accepted: Option<usize>,
    prefix_matched: &PrefixMatchVector,
    seeds: Option<&SeedStates>,
) -> SuggestionState {
    match seeds {
        None => classify(index, accepted, prefix_matched),
        Some(seeds) => match seeds.get(index) {
            Some(SuggestionState::Showed) => classify(index, accepted, prefix_matched),
            Some(terminal) => terminal,
            // Never displayed: invalidated before the user could see it.
            None => SuggestionState::Discard,
        },
    }
}
