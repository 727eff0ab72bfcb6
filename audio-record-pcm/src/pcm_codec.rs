//! Software passthrough codec for raw PCM mimes.
//!
//! Stands in for the platform's hardware codec execution engine: it runs
//! its own callback thread, emits the format event once, pulls input in
//! roughly 100 ms chunks and forwards the bytes unmodified as output with
//! presentation timestamps derived from the frame count.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;

use audio_record_core::{mime, AudioCodec, CodecEvents, CodecFormat, FrameInfo, RecordError};

/// Poll cadence of the encode loop while the source has no data yet.
const IDLE_POLL: Duration = Duration::from_millis(10);

pub struct PcmCodec {
    format: CodecFormat,
    running: Arc<AtomicBool>,
    handle: Mutex<Option<thread::JoinHandle<()>>>,
}

impl PcmCodec {
    pub fn new(format: &CodecFormat) -> Result<Self, RecordError> {
        if format.mime != mime::RAW {
            return Err(RecordError::Codec(format!(
                "no software encoder for mime {}",
                format.mime
            )));
        }

        Ok(Self {
            format: format.clone(),
            running: Arc::new(AtomicBool::new(false)),
            handle: Mutex::new(None),
        })
    }

    /// Input buffer size per request: the format's max-input-size when the
    /// host set one, 100 ms of interleaved s16 frames otherwise.
    fn input_buffer_size(format: &CodecFormat) -> usize {
        if format.max_input_size > 0 {
            return format.max_input_size;
        }
        let frames = (format.sample_rate / 10).max(1) as usize;
        frames * format.channels as usize * 2
    }
}

impl AudioCodec for PcmCodec {
    fn start(&self, events: Arc<dyn CodecEvents>) -> Result<(), RecordError> {
        if self.running.swap(true, Ordering::SeqCst) {
            return Err(RecordError::Codec("codec already started".into()));
        }

        let running = Arc::clone(&self.running);
        let format = self.format.clone();

        let handle = thread::Builder::new()
            .name("pcm-codec".into())
            .spawn(move || encode_loop(&running, &format, events))
            .map_err(|err| RecordError::Codec(format!("failed to spawn codec thread: {err}")))?;

        *self.handle.lock() = Some(handle);
        Ok(())
    }

    fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);

        let handle = self.handle.lock().take();
        if let Some(handle) = handle {
            // stop() is reachable from inside an event callback on the
            // codec thread itself; joining there would deadlock.
            if handle.thread().id() != thread::current().id() {
                let _ = handle.join();
            }
        }
    }
}

fn encode_loop(running: &AtomicBool, format: &CodecFormat, events: Arc<dyn CodecEvents>) {
    events.on_format_changed(format);

    let mut buf = vec![0u8; PcmCodec::input_buffer_size(format)];
    let bytes_per_frame = u64::from(format.channels) * 2;
    let mut frames_out: u64 = 0;

    while running.load(Ordering::SeqCst) {
        let Some(chunk) = events.on_input_needed(&mut buf) else {
            break;
        };

        if chunk.len == 0 && !chunk.end_of_stream {
            thread::sleep(IDLE_POLL);
            continue;
        }

        let info = FrameInfo {
            presentation_time_us: frames_out * 1_000_000 / u64::from(format.sample_rate),
            end_of_stream: chunk.end_of_stream,
        };
        events.on_output_ready(&buf[..chunk.len], &info);

        frames_out += chunk.len as u64 / bytes_per_frame;

        if chunk.end_of_stream {
            log::debug!("pcm codec drained after {frames_out} frames");
            break;
        }
    }
}
