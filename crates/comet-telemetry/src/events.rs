use comet_core::{CompletionType, TriggerType};
use serde::{Deserialize, Serialize};

use crate::suggestion_state::SuggestionState;

/// One user-decision telemetry record, emitted per suggestion in a batch.
///
/// Field names are the wire contract; instances are transient, built by the
/// recorder and handed straight to the sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDecisionEvent {
    pub request_id: String,
    pub session_id: String,
    pub pagination_progress: u32,
    pub trigger_type: TriggerType,
    pub suggestion_index: usize,
    pub suggestion_state: SuggestionState,
    pub suggestion_reference_count: usize,
    pub completion_type: CompletionType,
    pub language: String,
    /// Resolved runtime name, empty when the language has no runtime mapping.
    pub runtime: String,
    /// Resolved runtime version string, empty when unmapped.
    pub runtime_source: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_field_names() {
        let event = UserDecisionEvent {
            request_id: "req".into(),
            session_id: "sess".into(),
            pagination_progress: 0,
            trigger_type: TriggerType::AutoTrigger,
            suggestion_index: 0,
            suggestion_state: SuggestionState::Accept,
            suggestion_reference_count: 1,
            completion_type: CompletionType::Line,
            language: "python".into(),
            runtime: "python2".into(),
            runtime_source: "2.7.16".into(),
        };

        let json = serde_json::to_value(&event).expect("serialize event");
        assert_eq!(json["requestId"], "req");
        assert_eq!(json["sessionId"], "sess");
        assert_eq!(json["paginationProgress"], 0);
        assert_eq!(json["triggerType"], "AutoTrigger");
        assert_eq!(json["suggestionIndex"], 0);
        assert_eq!(json["suggestionState"], "Accept");
        assert_eq!(json["suggestionReferenceCount"], 1);
        assert_eq!(json["completionType"], "Line");
        assert_eq!(json["language"], "python");
        assert_eq!(json["runtime"], "python2");
        assert_eq!(json["runtimeSource"], "2.7.16");
    }
}
