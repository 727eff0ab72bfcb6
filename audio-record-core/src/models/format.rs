/// Mime strings of the encoder families the selector understands.
pub mod mime {
    pub const AAC: &str = "audio/mp4a-latm";
    pub const AMR_NB: &str = "audio/3gpp";
    pub const AMR_WB: &str = "audio/amr-wb";
    pub const FLAC: &str = "audio/flac";
    pub const OPUS: &str = "audio/opus";
    pub const RAW: &str = "audio/raw";
}

/// Concrete encoder descriptor: the mime a codec is opened with plus the
/// parameters reconciled with what the encoder family supports.
///
/// Produced by format selection, consumed by the platform backend when it
/// opens the codec, the container writer and the sample source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecFormat {
    pub mime: &'static str,
    pub sample_rate: u32,
    pub channels: u16,
    pub bit_rate: u32,

    /// Largest input buffer the codec must accept per request, in bytes.
    /// Zero lets the codec pick its own size; the orchestrator fills this
    /// in from the sample source's preferred read size.
    pub max_input_size: usize,
}
