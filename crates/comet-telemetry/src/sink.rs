use async_trait::async_trait;
use parking_lot::Mutex;
use thiserror::Error;

use crate::events::UserDecisionEvent;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("telemetry sink closed")]
    Closed,
    #[error("telemetry transport error: {0}")]
    Transport(String),
}

/// Destination for telemetry events.
///
/// A sink accepts one event at a time and reports delivery success or
/// failure; retry and delivery guarantees live behind this seam, not in the
/// recorder.
#[async_trait]
pub trait TelemetrySink: Send + Sync {
    async fn emit(&self, event: UserDecisionEvent) -> Result<(), SinkError>;
}

/// In-memory sink that buffers every event it receives.
///
/// Used as a test double and for callers that batch-export on their own
/// schedule.
#[derive(Debug, Default)]
pub struct BufferSink {
    events: Mutex<Vec<UserDecisionEvent>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain all buffered events in arrival order.
    pub fn take(&self) -> Vec<UserDecisionEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn events(&self) -> Vec<UserDecisionEvent> {
        self.events.lock().clone()
    }
}

#[async_trait]
impl TelemetrySink for BufferSink {
    async fn emit(&self, event: UserDecisionEvent) -> Result<(), SinkError> {
        self.events.lock().push(event);
        Ok(())
    }
}
