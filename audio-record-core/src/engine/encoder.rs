use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::models::error::RecordError;
use crate::models::format::CodecFormat;
use crate::models::frame::FrameInfo;
use crate::traits::audio_codec::{AudioCodec, CodecEvents, InputChunk};
use crate::traits::container_writer::ContainerWriter;
use crate::traits::encoder_delegate::EncoderDelegate;

/// Mux-side state, touched only from codec event callbacks.
struct MuxState {
    container: Box<dyn ContainerWriter>,
    track: Option<usize>,
}

/// Drives one platform encoder end-to-end: feeds it input pulled from the
/// delegate, forwards its output to the container writer, and finalizes on
/// end-of-stream or error.
///
/// Control methods only flip atomic flags consulted by the event handlers,
/// so they are safe from any thread, concurrently with in-flight events.
/// The engine owns no policy beyond feed input, forward output, finalize.
pub struct CodecEngine {
    codec: Box<dyn AudioCodec>,
    delegate: Arc<dyn EncoderDelegate>,
    mux: Mutex<MuxState>,
    paused: AtomicBool,
    stop_requested: AtomicBool,
    finalized: AtomicBool,
}

impl CodecEngine {
    pub fn new(
        codec: Box<dyn AudioCodec>,
        container: Box<dyn ContainerWriter>,
        delegate: Arc<dyn EncoderDelegate>,
    ) -> Arc<Self> {
        Arc::new(Self {
            codec,
            delegate,
            mux: Mutex::new(MuxState {
                container,
                track: None,
            }),
            paused: AtomicBool::new(false),
            stop_requested: AtomicBool::new(false),
            finalized: AtomicBool::new(false),
        })
    }

    /// Begin asynchronous operation. The engine becomes the exclusive
    /// consumer and producer of codec buffers until finalized.
    pub fn start(self: &Arc<Self>) -> Result<(), RecordError> {
        self.codec.start(Arc::clone(self) as Arc<dyn CodecEvents>)
    }

    /// Stop consuming real data; future input requests submit empty
    /// buffers so the codec pipeline never starves.
    pub fn pause(&self) {
        self.paused.store(true, Ordering::SeqCst);
    }

    pub fn resume(&self) {
        self.paused.store(false, Ordering::SeqCst);
    }

    /// Request graceful termination: the next input request carries the
    /// end-of-stream flag, and the codec drains its output from there.
    pub fn stop(&self) {
        self.paused.store(false, Ordering::SeqCst);
        self.stop_requested.store(true, Ordering::SeqCst);
    }

    fn fail(&self, error: RecordError) {
        self.delegate.on_failure(error);
        self.finalize();
    }

    /// Single teardown path: stop the codec, stop the container, notify
    /// the delegate. Guarded so a codec error racing an end-of-stream
    /// output runs it exactly once.
    fn finalize(&self) {
        if self.finalized.swap(true, Ordering::SeqCst) {
            return;
        }

        self.codec.stop();

        if let Err(err) = self.mux.lock().container.stop() {
            log::warn!("container stop failed during finalize: {err}");
        }

        self.delegate.on_stop();
    }
}

impl CodecEvents for CodecEngine {
    fn on_format_changed(&self, format: &CodecFormat) {
        let registered = {
            let mut mux = self.mux.lock();
            match mux.container.add_track(format) {
                Ok(track) => {
                    mux.track = Some(track);
                    mux.container.start()
                }
                Err(err) => Err(err),
            }
        };

        if let Err(err) = registered {
            self.fail(err);
        }
    }

    fn on_input_needed(&self, buf: &mut [u8]) -> Option<InputChunk> {
        if self.finalized.load(Ordering::SeqCst) {
            return None;
        }

        if self.paused.load(Ordering::SeqCst) {
            // An empty submission keeps the codec's internal pipeline
            // moving while paused.
            return Some(InputChunk {
                len: 0,
                end_of_stream: false,
            });
        }

        match self.delegate.on_data_needed(buf) {
            Ok(len) => Some(InputChunk {
                len,
                end_of_stream: self.stop_requested.load(Ordering::SeqCst),
            }),
            Err(err) => {
                self.fail(err);
                None
            }
        }
    }

    fn on_output_ready(&self, data: &[u8], info: &FrameInfo) {
        if self.finalized.load(Ordering::SeqCst) {
            return;
        }

        let result = {
            let mut mux = self.mux.lock();
            match mux.track {
                Some(track) => {
                    if mux.container.is_stream() {
                        mux.container.write_stream(track, data, info)
                    } else {
                        mux.container.write_sample(track, data, info).map(|()| Vec::new())
                    }
                }
                None => Err(RecordError::Container("no track registered".into())),
            }
        };

        match result {
            Ok(chunk) => {
                if !chunk.is_empty() {
                    self.delegate.on_stream_chunk(chunk);
                }
                if info.end_of_stream {
                    self.finalize();
                }
            }
            Err(err) => self.fail(err),
        }
    }

    fn on_error(&self, error: RecordError) {
        self.fail(error);
    }
}
