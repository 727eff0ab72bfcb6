//! # audio-record-pcm
//!
//! Software PCM backend for `audio-record-core`.
//!
//! Provides:
//! - `PcmCodec` — passthrough codec driver for raw PCM mimes, running its
//!   own callback thread in place of a hardware encoder
//! - `WavContainer` — single-track WAV file writer
//! - `StreamContainer` — raw streaming container handing chunks back to
//!   the caller
//! - `ToneSource` — wall-clock-paced sine test source
//! - `SoftwareBackend` — the bundle implementing `RecorderBackend`
//!
//! ## Usage
//! ```ignore
//! use std::sync::Arc;
//! use audio_record_core::{AudioRecorder, RecordConfig};
//! use audio_record_pcm::SoftwareBackend;
//!
//! let config = RecordConfig {
//!     encoder: "wav".into(),
//!     path: Some("/tmp/take1.wav".into()),
//!     ..Default::default()
//! };
//! let recorder = AudioRecorder::new(config, Arc::new(SoftwareBackend::new()), delegate);
//! recorder.start();
//! ```

pub mod backend;
pub mod pcm_codec;
pub mod stream_container;
pub mod tone_source;
pub mod wav_container;

pub use backend::SoftwareBackend;
pub use pcm_codec::PcmCodec;
pub use stream_container::StreamContainer;
pub use tone_source::ToneSource;
pub use wav_container::WavContainer;
