pub mod audio_codec;
pub mod container_writer;
pub mod encoder_delegate;
pub mod record_delegate;
pub mod recorder_backend;
pub mod sample_source;
