//! Backend bundle wiring the software collaborators into the core
//! pipeline.

use audio_record_core::{
    AudioCodec, CodecFormat, ContainerWriter, RecordConfig, RecordError, RecorderBackend,
    SampleSource,
};

use crate::pcm_codec::PcmCodec;
use crate::stream_container::StreamContainer;
use crate::tone_source::ToneSource;
use crate::wav_container::WavContainer;

/// Software backend for the raw PCM encoder families.
///
/// Picks a WAV container when the session has an output path and the raw
/// streaming container otherwise. The capture side is a generated test
/// tone, which makes the backend self-contained for tests, demos and
/// hosts without capture hardware.
pub struct SoftwareBackend {
    tone_hz: f64,
    tone_gain: f64,
}

impl SoftwareBackend {
    pub fn new() -> Self {
        Self {
            tone_hz: 440.0,
            tone_gain: 0.5,
        }
    }

    pub fn with_tone(tone_hz: f64, tone_gain: f64) -> Self {
        Self { tone_hz, tone_gain }
    }
}

impl Default for SoftwareBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RecorderBackend for SoftwareBackend {
    fn open_codec(&self, format: &CodecFormat) -> Result<Box<dyn AudioCodec>, RecordError> {
        Ok(Box::new(PcmCodec::new(format)?))
    }

    fn open_container(
        &self,
        config: &RecordConfig,
        _format: &CodecFormat,
    ) -> Result<Box<dyn ContainerWriter>, RecordError> {
        match &config.path {
            Some(path) => Ok(Box::new(WavContainer::new(path.clone()))),
            None => Ok(Box::new(StreamContainer::new())),
        }
    }

    fn open_source(
        &self,
        _config: &RecordConfig,
        format: &CodecFormat,
    ) -> Result<Box<dyn SampleSource>, RecordError> {
        Ok(Box::new(ToneSource::new(
            format,
            self.tone_hz,
            self.tone_gain,
        )))
    }
}
