/// Timing and flags metadata for one encoded buffer.
///
/// The buffer itself travels alongside as a borrowed slice, owned
/// transiently by the codec engine and never retained after the callback
/// returns; its size is the slice length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInfo {
    /// Presentation timestamp in microseconds.
    pub presentation_time_us: u64,

    /// Marks the final buffer of the session. No further data flows after
    /// a buffer carrying this flag.
    pub end_of_stream: bool,
}
