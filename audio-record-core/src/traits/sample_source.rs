use crate::models::error::RecordError;

/// Pull-based PCM producer feeding the encode pipeline.
///
/// Implemented by platform capture backends. `read` is invoked from the
/// codec callback context — keep it lean and non-blocking where possible.
/// Underlying resources are released on drop.
pub trait SampleSource: Send {
    /// Begin producing samples.
    fn start(&mut self) -> Result<(), RecordError>;

    /// Fill `buf` with raw PCM, returning the number of bytes written.
    /// Returning 0 is valid and means no data has accrued yet.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, RecordError>;

    /// Stop producing samples.
    fn stop(&mut self);

    /// Instantaneous input level in dBFS of the most recently delivered
    /// buffer.
    fn amplitude(&self) -> f64;

    /// Preferred read size in bytes.
    fn buffer_size(&self) -> usize;
}
