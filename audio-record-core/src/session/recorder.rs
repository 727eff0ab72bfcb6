use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

use parking_lot::Mutex;

use crate::engine::CodecEngine;
use crate::format;
use crate::models::config::RecordConfig;
use crate::models::error::RecordError;
use crate::models::state::RecordState;
use crate::traits::encoder_delegate::EncoderDelegate;
use crate::traits::record_delegate::RecordDelegate;
use crate::traits::recorder_backend::RecorderBackend;
use crate::traits::sample_source::SampleSource;

/// Amplitude reported when no capture source is active, in dBFS.
pub const SILENCE_DB: f64 = -160.0;

/// Owns one recording session end-to-end and exposes the public control
/// surface.
///
/// Setup and the session's lifetime run on a dedicated worker thread that
/// blocks until the terminal stop event, so cleanup is guaranteed to run
/// before the worker retires. Control calls never block: they flip flags
/// the pipeline observes on its next event, and are safe from any thread
/// concurrently with in-flight codec callbacks.
pub struct AudioRecorder {
    inner: Arc<RecorderInner>,
}

struct RecorderInner {
    config: RecordConfig,
    backend: Arc<dyn RecorderBackend>,
    delegate: Arc<dyn RecordDelegate>,

    source: Mutex<Option<Box<dyn SampleSource>>>,
    engine: Mutex<Option<Arc<CodecEngine>>>,

    // Written on state transitions, read from any caller thread.
    is_recording: AtomicBool,
    is_paused: AtomicBool,
    canceled: AtomicBool,

    started: AtomicBool,
    torn_down: AtomicBool,
    completion: Mutex<Option<mpsc::Sender<()>>>,
}

impl AudioRecorder {
    pub fn new(
        config: RecordConfig,
        backend: Arc<dyn RecorderBackend>,
        delegate: Arc<dyn RecordDelegate>,
    ) -> Self {
        Self {
            inner: Arc::new(RecorderInner {
                config,
                backend,
                delegate,
                source: Mutex::new(None),
                engine: Mutex::new(None),
                is_recording: AtomicBool::new(false),
                is_paused: AtomicBool::new(false),
                canceled: AtomicBool::new(false),
                started: AtomicBool::new(false),
                torn_down: AtomicBool::new(false),
                completion: Mutex::new(None),
            }),
        }
    }

    /// Start the session on its dedicated worker. Setup failures surface
    /// through the delegate, not this call. A session records once;
    /// further calls are no-ops.
    pub fn start(&self) {
        if self.inner.started.swap(true, Ordering::SeqCst) {
            return;
        }

        let inner = Arc::clone(&self.inner);
        thread::Builder::new()
            .name("record-session".into())
            .spawn(move || inner.run())
            .expect("failed to spawn session thread");
    }

    /// Pause the session. No-op unless currently recording.
    pub fn pause(&self) {
        if !self.is_recording() {
            return;
        }
        let engine = self.inner.engine.lock().clone();
        if let Some(engine) = engine {
            engine.pause();
            self.inner.update_state(RecordState::Paused);
        }
    }

    /// Resume a paused session. No-op unless currently paused.
    pub fn resume(&self) {
        if !self.is_paused() {
            return;
        }
        let engine = self.inner.engine.lock().clone();
        if let Some(engine) = engine {
            engine.resume();
            self.inner.update_state(RecordState::Recording);
        }
    }

    /// Request a graceful stop. The state transition happens when the
    /// encoder's terminal event arrives, not here.
    pub fn stop(&self) {
        if !self.is_recording() {
            return;
        }
        let engine = self.inner.engine.lock().clone();
        if let Some(engine) = engine {
            engine.stop();
        }
    }

    /// Cancel the session: the output artifact is deleted instead of
    /// finalized. Outside a session this only deletes the artifact.
    pub fn cancel(&self) {
        if self.is_recording() {
            self.inner.canceled.store(true, Ordering::SeqCst);
            let engine = self.inner.engine.lock().clone();
            if let Some(engine) = engine {
                engine.stop();
            }
        } else {
            delete_artifact(self.inner.config.path.as_deref());
        }
    }

    /// Whether a session is live (paused counts as recording).
    pub fn is_recording(&self) -> bool {
        self.inner.engine.lock().is_some() && self.inner.is_recording.load(Ordering::SeqCst)
    }

    pub fn is_paused(&self) -> bool {
        self.inner.engine.lock().is_some() && self.inner.is_paused.load(Ordering::SeqCst)
    }

    /// Input level in dBFS from the capture source, or the silence floor
    /// when no source is active.
    pub fn amplitude(&self) -> f64 {
        self.inner
            .source
            .lock()
            .as_ref()
            .map(|source| source.amplitude())
            .unwrap_or(SILENCE_DB)
    }
}

impl Drop for AudioRecorder {
    fn drop(&mut self) {
        // A live session winds down gracefully on its own worker; never
        // block the dropping thread.
        let engine = self.inner.engine.lock().clone();
        if let Some(engine) = engine {
            engine.stop();
        }
    }
}

impl RecorderInner {
    fn run(self: Arc<Self>) {
        let (tx, rx) = mpsc::channel();
        *self.completion.lock() = Some(tx);

        if let Err(err) = self.setup() {
            self.delegate.on_failure(err);
            self.teardown();
            return;
        }

        // The worker is the session's lifetime holder: it stays parked
        // here until the terminal stop event releases it.
        let _ = rx.recv();
    }

    fn setup(self: &Arc<Self>) -> Result<(), RecordError> {
        self.config.validate().map_err(RecordError::InvalidConfig)?;

        let (_id, mut format) = format::select_format(&self.config)?;

        let mut source = self.backend.open_source(&self.config, &format)?;
        source.start()?;
        format.max_input_size = source.buffer_size();
        *self.source.lock() = Some(source);

        let codec = self.backend.open_codec(&format)?;
        let container = self.backend.open_container(&self.config, &format)?;
        let engine = CodecEngine::new(
            codec,
            container,
            Arc::clone(self) as Arc<dyn EncoderDelegate>,
        );
        *self.engine.lock() = Some(Arc::clone(&engine));
        engine.start()?;

        self.update_state(RecordState::Recording);
        Ok(())
    }

    /// The only path that tears a session down; normal stop, cancel and
    /// every failure funnel through it. Guarded because the setup failure
    /// path and the engine's stop event can both reach it.
    fn teardown(&self) {
        if self.torn_down.swap(true, Ordering::SeqCst) {
            return;
        }

        *self.engine.lock() = None;

        let source = self.source.lock().take();
        if let Some(mut source) = source {
            source.stop();
        }

        if self.canceled.load(Ordering::SeqCst) {
            delete_artifact(self.config.path.as_deref());
        }

        self.update_state(RecordState::Stopped);

        // Unblock the worker so the session's execution context retires.
        self.completion.lock().take();
    }

    fn update_state(&self, state: RecordState) {
        match state {
            RecordState::Recording => {
                self.is_recording.store(true, Ordering::SeqCst);
                self.is_paused.store(false, Ordering::SeqCst);
                self.delegate.on_record();
            }
            RecordState::Paused => {
                self.is_recording.store(true, Ordering::SeqCst);
                self.is_paused.store(true, Ordering::SeqCst);
                self.delegate.on_pause();
            }
            RecordState::Stopped => {
                self.is_recording.store(false, Ordering::SeqCst);
                self.is_paused.store(false, Ordering::SeqCst);
                self.delegate.on_stop();
            }
        }
    }
}

impl EncoderDelegate for RecorderInner {
    fn on_data_needed(&self, buf: &mut [u8]) -> Result<usize, RecordError> {
        match self.source.lock().as_mut() {
            Some(source) => source.read(buf),
            None => Ok(0),
        }
    }

    fn on_stream_chunk(&self, chunk: Vec<u8>) {
        self.delegate.on_audio_chunk(chunk);
    }

    fn on_failure(&self, error: RecordError) {
        self.delegate.on_failure(error);
    }

    fn on_stop(&self) {
        self.teardown();
    }
}

/// Best-effort removal of the output artifact.
fn delete_artifact(path: Option<&Path>) {
    let Some(path) = path else { return };
    match std::fs::remove_file(path) {
        Ok(()) => log::debug!("deleted recording artifact {}", path.display()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => log::warn!("failed to delete {}: {err}", path.display()),
    }
}
