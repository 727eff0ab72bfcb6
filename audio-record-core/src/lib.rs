//! # audio-record-core
//!
//! Platform-agnostic audio recording pipeline.
//!
//! A pull-based PCM source feeds a callback-driven encoder whose output is
//! muxed into a container file or forwarded as a live byte stream. This
//! crate owns the encode pipeline and its lifecycle state machine; the
//! capture source, the container byte layout and the codec execution
//! engine plug in through traits.
//!
//! ## Architecture
//!
//! ```text
//! audio-record-core (this crate)
//! ├── traits/   ← SampleSource, ContainerWriter, AudioCodec + CodecEvents,
//! │               RecorderBackend, RecordDelegate, EncoderDelegate
//! ├── models/   ← RecordConfig, RecordState, RecordError, CodecFormat, FrameInfo
//! ├── format/   ← encoder identity resolution + parameter adjustment
//! ├── engine/   ← CodecEngine: codec event handling and finalize
//! └── session/  ← AudioRecorder: control surface, session worker, teardown
//! ```
//!
//! ## Data flow
//!
//! ```text
//! [SampleSource] ←pull─ [CodecEngine] ─events→ [ContainerWriter]
//!                            ↑                        │
//!            [AudioCodec callbacks]          file / stream chunks
//!                            │                        ↓
//!                  [AudioRecorder worker] ──────→ [RecordDelegate]
//! ```

pub mod engine;
pub mod format;
pub mod models;
pub mod session;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use engine::CodecEngine;
pub use format::{adjust_format, select_format, AudioEncoderId};
pub use models::config::RecordConfig;
pub use models::error::RecordError;
pub use models::format::{mime, CodecFormat};
pub use models::frame::FrameInfo;
pub use models::state::RecordState;
pub use session::{AudioRecorder, SILENCE_DB};
pub use traits::audio_codec::{AudioCodec, CodecEvents, InputChunk};
pub use traits::container_writer::ContainerWriter;
pub use traits::encoder_delegate::EncoderDelegate;
pub use traits::record_delegate::RecordDelegate;
pub use traits::recorder_backend::RecorderBackend;
pub use traits::sample_source::SampleSource;
