mod recorder;

pub use recorder::{AudioRecorder, SILENCE_DB};
