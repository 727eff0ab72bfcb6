//! Single-track WAV container writer.
//!
//! Writes the 44-byte RIFF header up front with placeholder sizes and
//! patches them when the track ends.

use std::fs::{self, File};
use std::io::{Seek, SeekFrom, Write};
use std::path::PathBuf;

use audio_record_core::{CodecFormat, ContainerWriter, FrameInfo, RecordError};

/// Size of the standard WAV RIFF header in bytes.
const WAV_HEADER_SIZE: usize = 44;

/// PCM bit depth this container writes.
const BIT_DEPTH: u16 = 16;

pub struct WavContainer {
    path: PathBuf,
    file: Option<File>,
    format: Option<CodecFormat>,
    data_bytes: u64,
}

impl WavContainer {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            file: None,
            format: None,
            data_bytes: 0,
        }
    }

    fn storage_err(err: std::io::Error) -> RecordError {
        RecordError::Container(err.to_string())
    }
}

impl ContainerWriter for WavContainer {
    fn add_track(&mut self, format: &CodecFormat) -> Result<usize, RecordError> {
        if self.format.is_some() {
            return Err(RecordError::Container("track already registered".into()));
        }
        self.format = Some(format.clone());
        Ok(0)
    }

    fn start(&mut self) -> Result<(), RecordError> {
        let format = self
            .format
            .as_ref()
            .ok_or_else(|| RecordError::Container("no track registered".into()))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(Self::storage_err)?;
        }

        let mut file = File::create(&self.path).map_err(Self::storage_err)?;

        // Sizes are placeholders until stop() patches them.
        let header = wav_header(format.sample_rate, format.channels, 0);
        file.write_all(&header).map_err(Self::storage_err)?;

        self.file = Some(file);
        Ok(())
    }

    fn is_stream(&self) -> bool {
        false
    }

    fn write_sample(
        &mut self,
        track: usize,
        data: &[u8],
        _info: &FrameInfo,
    ) -> Result<(), RecordError> {
        if track != 0 {
            return Err(RecordError::Container(format!("unknown track {track}")));
        }
        let file = self
            .file
            .as_mut()
            .ok_or_else(|| RecordError::Container("container not started".into()))?;

        file.write_all(data).map_err(Self::storage_err)?;
        self.data_bytes += data.len() as u64;
        Ok(())
    }

    fn write_stream(
        &mut self,
        _track: usize,
        _data: &[u8],
        _info: &FrameInfo,
    ) -> Result<Vec<u8>, RecordError> {
        Err(RecordError::Container(
            "wav container has no stream output".into(),
        ))
    }

    fn stop(&mut self) -> Result<(), RecordError> {
        let Some(mut file) = self.file.take() else {
            return Ok(());
        };

        // Patch RIFF chunk size at offset 4 (file size - 8).
        let file_size = WAV_HEADER_SIZE as u64 + self.data_bytes;
        file.seek(SeekFrom::Start(4)).map_err(Self::storage_err)?;
        file.write_all(&((file_size - 8) as u32).to_le_bytes())
            .map_err(Self::storage_err)?;

        // Patch data sub-chunk size at offset 40.
        file.seek(SeekFrom::Start(40)).map_err(Self::storage_err)?;
        file.write_all(&(self.data_bytes as u32).to_le_bytes())
            .map_err(Self::storage_err)?;

        file.flush().map_err(Self::storage_err)?;
        Ok(())
    }
}

/// Generate a 44-byte RIFF header for 16-bit little-endian PCM.
///
/// Layout:
/// ```text
/// [0-3]    "RIFF"      [4-7]    file size - 8
/// [8-11]   "WAVE"      [12-15]  "fmt "
/// [16-19]  16          [20-21]  1 (PCM)
/// [22-23]  channels    [24-27]  sample_rate
/// [28-31]  byte_rate   [32-33]  block_align
/// [34-35]  bit depth   [36-39]  "data"
/// [40-43]  data_size
/// ```
fn wav_header(sample_rate: u32, channels: u16, data_size: u32) -> [u8; WAV_HEADER_SIZE] {
    let byte_rate = sample_rate * u32::from(channels) * u32::from(BIT_DEPTH) / 8;
    let block_align = channels * BIT_DEPTH / 8;

    let mut header = [0u8; WAV_HEADER_SIZE];

    header[0..4].copy_from_slice(b"RIFF");
    header[4..8].copy_from_slice(&(36 + data_size).to_le_bytes());
    header[8..12].copy_from_slice(b"WAVE");

    header[12..16].copy_from_slice(b"fmt ");
    header[16..20].copy_from_slice(&16u32.to_le_bytes());
    header[20..22].copy_from_slice(&1u16.to_le_bytes());
    header[22..24].copy_from_slice(&channels.to_le_bytes());
    header[24..28].copy_from_slice(&sample_rate.to_le_bytes());
    header[28..32].copy_from_slice(&byte_rate.to_le_bytes());
    header[32..34].copy_from_slice(&block_align.to_le_bytes());
    header[34..36].copy_from_slice(&BIT_DEPTH.to_le_bytes());

    header[36..40].copy_from_slice(b"data");
    header[40..44].copy_from_slice(&data_size.to_le_bytes());

    header
}
