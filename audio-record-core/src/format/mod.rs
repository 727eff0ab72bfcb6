//! Encoder identity resolution and codec parameter adjustment.
//!
//! Maps the requested encoder identity onto a concrete codec descriptor,
//! reconciling the requested sample rate, channel count and bit rate with
//! what the encoder family supports. Container byte layouts stay with the
//! container writers; this module only decides codec-facing parameters.

use std::str::FromStr;

use crate::models::config::RecordConfig;
use crate::models::error::RecordError;
use crate::models::format::{mime, CodecFormat};

/// Encoder families understood by the selector, keyed by their wire
/// identity strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioEncoderId {
    AacLc,
    AacEld,
    AacHe,
    AmrNb,
    AmrWb,
    Flac,
    Opus,
    Pcm16Bits,
    Wav,
}

impl FromStr for AudioEncoderId {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aacLc" => Ok(Self::AacLc),
            "aacEld" => Ok(Self::AacEld),
            "aacHe" => Ok(Self::AacHe),
            "amrNb" => Ok(Self::AmrNb),
            "amrWb" => Ok(Self::AmrWb),
            "flac" => Ok(Self::Flac),
            "opus" => Ok(Self::Opus),
            "pcm16bits" => Ok(Self::Pcm16Bits),
            "wav" => Ok(Self::Wav),
            other => Err(RecordError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl AudioEncoderId {
    /// Mime the platform codec is opened with.
    pub fn mime(&self) -> &'static str {
        match self {
            Self::AacLc | Self::AacEld | Self::AacHe => mime::AAC,
            Self::AmrNb => mime::AMR_NB,
            Self::AmrWb => mime::AMR_WB,
            Self::Flac => mime::FLAC,
            Self::Opus => mime::OPUS,
            Self::Pcm16Bits | Self::Wav => mime::RAW,
        }
    }
}

const AAC_SAMPLE_RATES: &[u32] = &[
    8000, 11025, 12000, 16000, 22050, 24000, 32000, 44100, 48000, 64000, 88200, 96000,
];
const OPUS_SAMPLE_RATES: &[u32] = &[8000, 12000, 16000, 24000, 48000];
const AMR_NB_BIT_RATES: &[u32] = &[4750, 5150, 5900, 6700, 7400, 7950, 10200, 12200];
const AMR_WB_BIT_RATES: &[u32] = &[6600, 8850, 12650, 14250, 15850, 18250, 19850, 23050, 23850];

/// Resolve `config.encoder` into an encoder family and its adjusted
/// format. Fails with `UnsupportedFormat` for unrecognized identities.
pub fn select_format(config: &RecordConfig) -> Result<(AudioEncoderId, CodecFormat), RecordError> {
    let id: AudioEncoderId = config.encoder.parse()?;
    Ok((id, adjust_format(id, config)))
}

/// Reconcile the requested parameters with the selected encoder family.
pub fn adjust_format(id: AudioEncoderId, config: &RecordConfig) -> CodecFormat {
    let (sample_rate, channels, bit_rate) = match id {
        AudioEncoderId::AacLc | AudioEncoderId::AacEld | AudioEncoderId::AacHe => (
            nearest(AAC_SAMPLE_RATES, config.sample_rate),
            config.num_channels.clamp(1, 2),
            config.bit_rate.clamp(8_000, 320_000),
        ),
        // AMR is a fixed-rate mono telephony codec family.
        AudioEncoderId::AmrNb => (8000, 1, nearest(AMR_NB_BIT_RATES, config.bit_rate)),
        AudioEncoderId::AmrWb => (16000, 1, nearest(AMR_WB_BIT_RATES, config.bit_rate)),
        AudioEncoderId::Flac => (
            config.sample_rate,
            config.num_channels.clamp(1, 8),
            config.bit_rate,
        ),
        AudioEncoderId::Opus => (
            nearest(OPUS_SAMPLE_RATES, config.sample_rate),
            config.num_channels.clamp(1, 2),
            config.bit_rate.clamp(6_000, 510_000),
        ),
        AudioEncoderId::Pcm16Bits | AudioEncoderId::Wav => (
            config.sample_rate,
            config.num_channels.clamp(1, 2),
            config.bit_rate,
        ),
    };

    CodecFormat {
        mime: id.mime(),
        sample_rate,
        channels,
        bit_rate,
        max_input_size: 0,
    }
}

/// Nearest supported value to the requested one.
fn nearest(supported: &[u32], requested: u32) -> u32 {
    supported
        .iter()
        .copied()
        .min_by_key(|value| value.abs_diff(requested))
        .unwrap_or(requested)
}
