//! Raw streaming container: no file output, every encoded sample is handed
//! back as an owned chunk for the caller's stream sink.

use audio_record_core::{CodecFormat, ContainerWriter, FrameInfo, RecordError};

#[derive(Default)]
pub struct StreamContainer {
    track_registered: bool,
    bytes_out: u64,
}

impl StreamContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total bytes handed out so far.
    pub fn bytes_out(&self) -> u64 {
        self.bytes_out
    }
}

impl ContainerWriter for StreamContainer {
    fn add_track(&mut self, _format: &CodecFormat) -> Result<usize, RecordError> {
        if self.track_registered {
            return Err(RecordError::Container("track already registered".into()));
        }
        self.track_registered = true;
        Ok(0)
    }

    fn start(&mut self) -> Result<(), RecordError> {
        Ok(())
    }

    fn is_stream(&self) -> bool {
        true
    }

    fn write_sample(
        &mut self,
        _track: usize,
        _data: &[u8],
        _info: &FrameInfo,
    ) -> Result<(), RecordError> {
        Err(RecordError::Container(
            "stream container has no file output".into(),
        ))
    }

    fn write_stream(
        &mut self,
        track: usize,
        data: &[u8],
        _info: &FrameInfo,
    ) -> Result<Vec<u8>, RecordError> {
        if track != 0 || !self.track_registered {
            return Err(RecordError::Container(format!("unknown track {track}")));
        }
        self.bytes_out += data.len() as u64;
        Ok(data.to_vec())
    }

    fn stop(&mut self) -> Result<(), RecordError> {
        Ok(())
    }
}
