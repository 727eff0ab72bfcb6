use crate::models::config::RecordConfig;
use crate::models::error::RecordError;
use crate::models::format::CodecFormat;

use super::audio_codec::AudioCodec;
use super::container_writer::ContainerWriter;
use super::sample_source::SampleSource;

/// Host integration surface: constructs the platform collaborators for one
/// session.
///
/// The orchestrator owns exactly one codec, one container and one source
/// per session; there is no global state behind this trait.
pub trait RecorderBackend: Send + Sync {
    /// Open an encoder for the adjusted format.
    fn open_codec(&self, format: &CodecFormat) -> Result<Box<dyn AudioCodec>, RecordError>;

    /// Open the container writer for this session's output.
    fn open_container(
        &self,
        config: &RecordConfig,
        format: &CodecFormat,
    ) -> Result<Box<dyn ContainerWriter>, RecordError>;

    /// Open the PCM capture source.
    fn open_source(
        &self,
        config: &RecordConfig,
        format: &CodecFormat,
    ) -> Result<Box<dyn SampleSource>, RecordError>;
}
