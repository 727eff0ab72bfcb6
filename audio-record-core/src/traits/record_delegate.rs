use crate::models::error::RecordError;

/// Caller-facing listener for session lifecycle and stream output.
///
/// Methods fire from pipeline-owned threads, not the caller's thread.
/// Implementations marshal to their own context as needed.
pub trait RecordDelegate: Send + Sync {
    /// The session entered (or re-entered, after a pause) the recording
    /// state.
    fn on_record(&self);

    /// The session was paused.
    fn on_pause(&self);

    /// The session reached its terminal state. Fires exactly once.
    fn on_stop(&self);

    /// A pipeline stage failed. `on_stop` still follows; the session
    /// always ends stopped.
    fn on_failure(&self, error: RecordError);

    /// Encoded bytes from a streaming container.
    fn on_audio_chunk(&self, chunk: Vec<u8>);
}
