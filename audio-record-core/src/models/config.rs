use std::path::PathBuf;

use serde::Deserialize;

/// Configuration for one recording session.
///
/// Arrives from the host embedder as structured data. The encoder identity
/// is kept as the wire string and resolved at session start, so an unknown
/// identity surfaces through the failure listener instead of at parse time.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordConfig {
    /// Output file path. `None` selects a streaming container.
    pub path: Option<PathBuf>,

    /// Requested encoder identity (e.g. `"aacLc"`, `"opus"`, `"wav"`).
    pub encoder: String,

    /// Requested sample rate in Hz. Reconciled with the encoder family
    /// during format selection.
    pub sample_rate: u32,

    /// Requested channel count (1 or 2).
    pub num_channels: u16,

    /// Requested bit rate in bits/s. Ignored by lossless families.
    pub bit_rate: u32,
}

impl RecordConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.sample_rate == 0 {
            return Err("sample rate must be positive".into());
        }
        if self.num_channels == 0 {
            return Err("channel count must be positive".into());
        }
        if self.bit_rate == 0 {
            return Err("bit rate must be positive".into());
        }
        Ok(())
    }
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            path: None,
            encoder: "aacLc".into(),
            sample_rate: 44100,
            num_channels: 2,
            bit_rate: 128_000,
        }
    }
}
