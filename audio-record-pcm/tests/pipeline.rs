//! End-to-end pipeline tests: tone source → software codec → container,
//! driven through the public `AudioRecorder` surface.

use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use audio_record_core::{AudioRecorder, RecordConfig, RecordDelegate, RecordError, SILENCE_DB};
use audio_record_pcm::SoftwareBackend;

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Record,
    Pause,
    Stop,
    Failure(RecordError),
    Chunk(usize),
}

#[derive(Default)]
struct CollectingDelegate {
    events: Mutex<Vec<Event>>,
}

impl CollectingDelegate {
    fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    fn saw(&self, event: &Event) -> bool {
        self.events.lock().contains(event)
    }

    fn saw_failure(&self) -> bool {
        self.events
            .lock()
            .iter()
            .any(|e| matches!(e, Event::Failure(_)))
    }
}

impl RecordDelegate for CollectingDelegate {
    fn on_record(&self) {
        self.events.lock().push(Event::Record);
    }

    fn on_pause(&self) {
        self.events.lock().push(Event::Pause);
    }

    fn on_stop(&self) {
        self.events.lock().push(Event::Stop);
    }

    fn on_failure(&self, error: RecordError) {
        self.events.lock().push(Event::Failure(error));
    }

    fn on_audio_chunk(&self, chunk: Vec<u8>) {
        self.events.lock().push(Event::Chunk(chunk.len()));
    }
}

fn wait_until(what: &str, mut cond: impl FnMut() -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !cond() {
        assert!(Instant::now() < deadline, "timed out waiting for {what}");
        thread::sleep(Duration::from_millis(2));
    }
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("audio_record_pipeline_{name}"))
}

fn wav_config(path: Option<PathBuf>) -> RecordConfig {
    RecordConfig {
        path,
        encoder: "wav".into(),
        sample_rate: 8000,
        num_channels: 1,
        ..Default::default()
    }
}

fn recorder_with(
    config: RecordConfig,
    delegate: &Arc<CollectingDelegate>,
) -> AudioRecorder {
    AudioRecorder::new(
        config,
        Arc::new(SoftwareBackend::new()),
        Arc::clone(delegate) as Arc<dyn RecordDelegate>,
    )
}

#[test]
fn records_a_valid_wav_file_through_pause_and_resume() {
    let path = temp_path("full_take.wav");
    std::fs::remove_file(&path).ok();

    let delegate = Arc::new(CollectingDelegate::default());
    let recorder = recorder_with(wav_config(Some(path.clone())), &delegate);

    recorder.start();
    wait_until("recording state", || recorder.is_recording());

    thread::sleep(Duration::from_millis(60));
    recorder.pause();
    assert!(recorder.is_paused());

    thread::sleep(Duration::from_millis(30));
    recorder.resume();
    assert!(!recorder.is_paused());
    assert!(recorder.is_recording());

    thread::sleep(Duration::from_millis(60));
    recorder.stop();
    wait_until("terminal stop event", || delegate.saw(&Event::Stop));
    wait_until("terminal state", || !recorder.is_recording());

    assert_eq!(
        delegate.events(),
        vec![Event::Record, Event::Pause, Event::Record, Event::Stop]
    );

    let data = std::fs::read(&path).unwrap();
    assert!(data.len() > 44, "no samples were written");
    assert_eq!(&data[0..4], b"RIFF");
    assert_eq!(&data[8..12], b"WAVE");

    let riff_size = u32::from_le_bytes([data[4], data[5], data[6], data[7]]);
    assert_eq!(riff_size as usize, data.len() - 8);

    let data_size = u32::from_le_bytes([data[40], data[41], data[42], data[43]]);
    assert_eq!(data_size as usize, data.len() - 44);

    std::fs::remove_file(&path).ok();
}

#[test]
fn stop_while_paused_still_terminates() {
    let path = temp_path("paused_stop.wav");
    std::fs::remove_file(&path).ok();

    let delegate = Arc::new(CollectingDelegate::default());
    let recorder = recorder_with(wav_config(Some(path.clone())), &delegate);

    recorder.start();
    wait_until("recording state", || recorder.is_recording());

    recorder.pause();
    recorder.stop();

    wait_until("terminal state", || !recorder.is_recording());
    assert!(delegate.saw(&Event::Stop));
    assert!(!delegate.saw_failure());
    assert!(path.exists());

    std::fs::remove_file(&path).ok();
}

#[test]
fn streaming_session_emits_chunks_and_no_file() {
    let delegate = Arc::new(CollectingDelegate::default());
    let recorder = recorder_with(
        RecordConfig {
            path: None,
            encoder: "pcm16bits".into(),
            sample_rate: 8000,
            num_channels: 1,
            ..Default::default()
        },
        &delegate,
    );

    recorder.start();
    wait_until("recording state", || recorder.is_recording());
    wait_until("first stream chunk", || {
        delegate
            .events()
            .iter()
            .any(|e| matches!(e, Event::Chunk(len) if *len > 0))
    });

    recorder.stop();
    wait_until("terminal state", || !recorder.is_recording());

    // Chunks may race the recording notification, but nothing follows the
    // terminal stop.
    let events = delegate.events();
    assert!(events.contains(&Event::Record));
    assert_eq!(events.last(), Some(&Event::Stop));
    assert!(!delegate.saw_failure());
}

#[test]
fn cancel_deletes_the_partial_file() {
    let path = temp_path("canceled_take.wav");
    std::fs::remove_file(&path).ok();

    let delegate = Arc::new(CollectingDelegate::default());
    let recorder = recorder_with(wav_config(Some(path.clone())), &delegate);

    recorder.start();
    wait_until("recording state", || recorder.is_recording());
    wait_until("file creation", || path.exists());

    recorder.cancel();
    wait_until("terminal state", || !recorder.is_recording());

    assert!(!path.exists(), "canceled artifact was kept");
    assert!(delegate.saw(&Event::Stop));
    assert!(!delegate.saw_failure());
}

#[test]
fn unsupported_identity_reports_failure_and_never_records() {
    let path = temp_path("never_written.vorbis");
    std::fs::remove_file(&path).ok();

    let delegate = Arc::new(CollectingDelegate::default());
    let recorder = recorder_with(
        RecordConfig {
            path: Some(path.clone()),
            encoder: "vorbis".into(),
            ..Default::default()
        },
        &delegate,
    );

    recorder.start();
    wait_until("failure event", || {
        delegate.saw(&Event::Failure(RecordError::UnsupportedFormat(
            "vorbis".into(),
        )))
    });
    wait_until("terminal stop event", || delegate.saw(&Event::Stop));

    assert!(!delegate.saw(&Event::Record));
    assert!(!path.exists());
}

#[test]
fn families_without_a_software_encoder_fail_at_setup() {
    let delegate = Arc::new(CollectingDelegate::default());
    let recorder = recorder_with(
        RecordConfig {
            encoder: "aacLc".into(),
            ..Default::default()
        },
        &delegate,
    );

    recorder.start();
    wait_until("failure event", || delegate.saw_failure());
    wait_until("terminal stop event", || delegate.saw(&Event::Stop));

    assert!(!delegate.saw(&Event::Record));
    assert!(delegate.events().iter().any(
        |e| matches!(e, Event::Failure(RecordError::Codec(msg)) if msg.contains("no software encoder")),
    ));
}

#[test]
fn amplitude_tracks_the_live_tone() {
    let path = temp_path("amplitude_take.wav");
    std::fs::remove_file(&path).ok();

    let delegate = Arc::new(CollectingDelegate::default());
    let recorder = recorder_with(wav_config(Some(path.clone())), &delegate);

    assert_eq!(recorder.amplitude(), SILENCE_DB);

    recorder.start();
    wait_until("recording state", || recorder.is_recording());
    wait_until("live amplitude", || recorder.amplitude() > -100.0);
    assert!(recorder.amplitude() <= 0.0);

    recorder.stop();
    wait_until("terminal state", || !recorder.is_recording());
    assert_eq!(recorder.amplitude(), SILENCE_DB);

    std::fs::remove_file(&path).ok();
}
