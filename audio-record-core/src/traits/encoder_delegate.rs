use crate::models::error::RecordError;

/// Upward listener of the codec engine, implemented by the session
/// orchestrator. Called from the codec callback context.
pub trait EncoderDelegate: Send + Sync {
    /// Pull PCM for the encoder into `buf`. Returns the number of bytes
    /// written; a failure here tears the pipeline down.
    fn on_data_needed(&self, buf: &mut [u8]) -> Result<usize, RecordError>;

    /// One encoded chunk from a streaming container.
    fn on_stream_chunk(&self, chunk: Vec<u8>);

    /// A pipeline stage failed. Finalization follows separately.
    fn on_failure(&self, error: RecordError);

    /// The engine has fully stopped. The last event of a session.
    fn on_stop(&self);
}
