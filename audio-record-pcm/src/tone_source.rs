//! Deterministic sine-wave sample source.
//!
//! Produces interleaved s16 little-endian samples at the configured rate,
//! paced to wall-clock time like a real capture device: `read` hands out
//! only as many frames as have elapsed since `start`.

use std::time::Instant;

use audio_record_core::{CodecFormat, RecordError, SampleSource, SILENCE_DB};

pub struct ToneSource {
    sample_rate: u32,
    channels: u16,
    freq_hz: f64,
    gain: f64,
    started: Option<Instant>,
    frames_delivered: u64,
    last_rms_db: f64,
}

impl ToneSource {
    /// `gain` scales the full-scale sine, 0.0..=1.0.
    pub fn new(format: &CodecFormat, freq_hz: f64, gain: f64) -> Self {
        Self {
            sample_rate: format.sample_rate,
            channels: format.channels,
            freq_hz,
            gain: gain.clamp(0.0, 1.0),
            started: None,
            frames_delivered: 0,
            last_rms_db: SILENCE_DB,
        }
    }

    fn bytes_per_frame(&self) -> usize {
        usize::from(self.channels) * 2
    }
}

impl SampleSource for ToneSource {
    fn start(&mut self) -> Result<(), RecordError> {
        self.started = Some(Instant::now());
        self.frames_delivered = 0;
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, RecordError> {
        let Some(started) = self.started else {
            return Err(RecordError::Source("source not started".into()));
        };

        let elapsed_frames =
            (started.elapsed().as_secs_f64() * f64::from(self.sample_rate)) as u64;
        let due = elapsed_frames.saturating_sub(self.frames_delivered);
        let capacity = (buf.len() / self.bytes_per_frame()) as u64;
        let frames = due.min(capacity) as usize;
        if frames == 0 {
            return Ok(0);
        }

        let mut sum_squares = 0.0f64;
        for i in 0..frames {
            let t = (self.frames_delivered + i as u64) as f64 / f64::from(self.sample_rate);
            let sample = (t * self.freq_hz * std::f64::consts::TAU).sin() * self.gain;
            sum_squares += sample * sample;

            let bytes = ((sample * f64::from(i16::MAX)) as i16).to_le_bytes();
            for ch in 0..usize::from(self.channels) {
                let at = (i * usize::from(self.channels) + ch) * 2;
                buf[at] = bytes[0];
                buf[at + 1] = bytes[1];
            }
        }

        self.frames_delivered += frames as u64;
        self.last_rms_db = rms_db(sum_squares / frames as f64);
        Ok(frames * self.bytes_per_frame())
    }

    fn stop(&mut self) {
        self.started = None;
    }

    fn amplitude(&self) -> f64 {
        self.last_rms_db
    }

    fn buffer_size(&self) -> usize {
        // 100 ms of frames.
        (self.sample_rate as usize / 10).max(1) * self.bytes_per_frame()
    }
}

/// RMS level in dBFS from a mean of squared normalized samples.
fn rms_db(mean_square: f64) -> f64 {
    if mean_square <= 0.0 {
        return SILENCE_DB;
    }
    (20.0 * mean_square.sqrt().log10()).max(SILENCE_DB)
}
