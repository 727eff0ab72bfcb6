/// Recording session lifecycle state.
///
/// State transitions:
/// ```text
/// stopped --start--> recording --pause--> paused
///                        ^                   |
///                        +------resume-------+
/// recording/paused --stop/cancel--> [encoder drains] --> stopped
/// ```
///
/// `Stopped` is terminal for a session; recording again takes a fresh
/// session object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordState {
    Recording,
    Paused,
    Stopped,
}

impl RecordState {
    /// Whether a session is live, paused or not.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Recording | Self::Paused)
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, Self::Paused)
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self, Self::Stopped)
    }
}
