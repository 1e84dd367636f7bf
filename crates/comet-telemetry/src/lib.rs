//! `comet-telemetry` classifies suggestion outcomes and records user-decision
//! telemetry for Comet's inline completion feature.
//!
//! The crate is deliberately transport-agnostic: it defines the per-batch
//! decision policy and the wire schema, and emits through a [`TelemetrySink`]
//! implemented elsewhere. Telemetry correctness is the product's feedback
//! loop for tuning suggestion quality, so the recorder guarantees exactly one
//! event per shown candidate with no double-counting and no silent drops.

mod config;
mod events;
mod runtime_language;
mod sink;
mod suggestion_state;
mod user_decision;

pub use config::TelemetryConfig;
pub use events::UserDecisionEvent;
pub use runtime_language::{runtime_language, RuntimeLanguageContext};
pub use sink::{BufferSink, SinkError, TelemetrySink};
pub use suggestion_state::{classify, PrefixMatchVector, SuggestionState};
pub use user_decision::{
    EmitFailure, RecordError, SeedStates, SessionContext, UserDecisionRecorder,
};
