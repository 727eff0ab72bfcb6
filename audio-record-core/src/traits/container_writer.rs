use crate::models::error::RecordError;
use crate::models::format::CodecFormat;
use crate::models::frame::FrameInfo;

/// Muxes encoded frames into a container file, or exposes them as a raw
/// byte stream.
///
/// Driven entirely by the codec engine from the codec callback context.
/// The container byte layout is owned by the implementation.
pub trait ContainerWriter: Send {
    /// Register an encoded track once its format has stabilized.
    /// Returns the track handle required by the write calls.
    fn add_track(&mut self, format: &CodecFormat) -> Result<usize, RecordError>;

    /// Start the writer. Called once, after track registration.
    fn start(&mut self) -> Result<(), RecordError>;

    /// Whether this writer produces a live byte stream instead of a file.
    fn is_stream(&self) -> bool;

    /// Mux one encoded sample. File-backed writers only.
    fn write_sample(
        &mut self,
        track: usize,
        data: &[u8],
        info: &FrameInfo,
    ) -> Result<(), RecordError>;

    /// Transform one encoded sample into an owned stream chunk.
    /// Streaming writers only.
    fn write_stream(
        &mut self,
        track: usize,
        data: &[u8],
        info: &FrameInfo,
    ) -> Result<Vec<u8>, RecordError>;

    /// Finalize the container. Resources are released on drop.
    fn stop(&mut self) -> Result<(), RecordError>;
}
