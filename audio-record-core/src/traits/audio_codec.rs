use std::sync::Arc;

use crate::models::error::RecordError;
use crate::models::format::CodecFormat;
use crate::models::frame::FrameInfo;

/// Description of one filled input buffer, reported back by the event
/// handler when the codec asks for data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputChunk {
    /// Bytes written into the buffer. Zero keeps the codec pipeline fed
    /// without consuming data.
    pub len: usize,

    /// Marks this buffer as the final one. The codec must drain and emit
    /// an end-of-stream output after accepting it.
    pub end_of_stream: bool,
}

/// Event surface of the platform codec, consumed by the engine.
///
/// Events fire on an execution context owned by the codec, concurrently
/// with control calls. Different event kinds may interleave; the same kind
/// is never delivered concurrently with itself. Buffers are borrowed for
/// the duration of the call only.
pub trait CodecEvents: Send + Sync {
    /// The encoder's output format has stabilized. Delivered once, before
    /// any output buffer.
    fn on_format_changed(&self, format: &CodecFormat);

    /// The codec wants input. The handler fills `buf` and describes the
    /// result; `None` means the pipeline has torn down and nothing may be
    /// submitted.
    fn on_input_needed(&self, buf: &mut [u8]) -> Option<InputChunk>;

    /// One encoded buffer is ready. After `info.end_of_stream` has been
    /// delivered, no further events of any kind may follow.
    fn on_output_ready(&self, data: &[u8], info: &FrameInfo);

    /// The codec hit an unrecoverable error. Terminal; the session does
    /// not retry codec operations.
    fn on_error(&self, error: RecordError);
}

/// Handle to one platform encoder instance.
///
/// The pipeline only reacts to the codec's events; scheduling of the
/// encode work itself belongs to the implementation.
pub trait AudioCodec: Send + Sync {
    /// Begin asynchronous operation, delivering events to `events`.
    fn start(&self, events: Arc<dyn CodecEvents>) -> Result<(), RecordError>;

    /// Halt event delivery and release the encoder. Must be callable from
    /// inside an event callback without deadlocking.
    fn stop(&self);
}
