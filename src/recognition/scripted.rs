use super::provider::{
    RecognitionError, RecognitionEvent, RecognitionProvider, RecognizerConfig, ResultEvent,
    TranscriptSegment,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Notify};
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Channel capacity for scripted event delivery
const EVENT_BUFFER: usize = 64;

/// Recognition provider that replays a scripted event sequence.
///
/// Stands in for a platform recognition engine: deterministic event
/// sequences for tests, and a dictation source for the CLI demo. Each call
/// to `start()` replays the same script from the beginning.
pub struct ScriptedRecognizer {
    config: RecognizerConfig,
    script: Vec<ResultEvent>,
    event_delay: Duration,
    supported: bool,
    listening: Arc<AtomicBool>,
    stop_signal: Arc<Notify>,
    task: Option<JoinHandle<()>>,
}

impl ScriptedRecognizer {
    /// Create a provider that replays the given events
    pub fn new(config: RecognizerConfig, script: Vec<ResultEvent>) -> Self {
        Self {
            config,
            script,
            event_delay: Duration::ZERO,
            supported: true,
            listening: Arc::new(AtomicBool::new(false)),
            stop_signal: Arc::new(Notify::new()),
            task: None,
        }
    }

    /// Create a provider that models a host without any recognition capability
    pub fn unsupported() -> Self {
        let mut provider = Self::new(RecognizerConfig::default(), Vec::new());
        provider.supported = false;
        provider
    }

    /// Delay between replayed events (zero by default)
    pub fn with_event_delay(mut self, delay: Duration) -> Self {
        self.event_delay = delay;
        self
    }

    /// Build a script that "dictates" a phrase word by word.
    ///
    /// Each word arrives first as an interim prefix, then as the full word
    /// (interim), then finalized with a trailing space, the way continuous
    /// engines revise in place before committing.
    pub fn dictation_script(phrase: &str) -> Vec<ResultEvent> {
        let mut script = Vec::new();
        for (index, word) in phrase.split_whitespace().enumerate() {
            let half = word.chars().count() / 2;
            if half > 0 {
                let prefix: String = word.chars().take(half).collect();
                script.push(ResultEvent {
                    result_index: index,
                    segments: vec![TranscriptSegment::interim(prefix)],
                });
            }
            script.push(ResultEvent {
                result_index: index,
                segments: vec![TranscriptSegment::interim(word)],
            });
            script.push(ResultEvent {
                result_index: index,
                segments: vec![TranscriptSegment::finalized(format!("{} ", word))],
            });
        }
        script
    }
}

#[async_trait::async_trait]
impl RecognitionProvider for ScriptedRecognizer {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn is_listening(&self) -> bool {
        self.listening.load(Ordering::SeqCst)
    }

    async fn start(&mut self) -> Result<mpsc::Receiver<RecognitionEvent>, RecognitionError> {
        if !self.supported {
            return Err(RecognitionError::Unsupported);
        }
        if self.listening.load(Ordering::SeqCst) {
            return Err(RecognitionError::AlreadyStarted);
        }

        info!(language = %self.config.language, "Starting scripted recognition");
        self.listening.store(true, Ordering::SeqCst);

        let (tx, rx) = mpsc::channel(EVENT_BUFFER);
        let script = self.script.clone();
        let delay = self.event_delay;
        let listening = Arc::clone(&self.listening);

        // Fresh signal per run, so a stop permit can never leak into the
        // next listening run.
        self.stop_signal = Arc::new(Notify::new());
        let stop_signal = Arc::clone(&self.stop_signal);

        let task = tokio::spawn(async move {
            if tx.send(RecognitionEvent::Started).await.is_err() {
                listening.store(false, Ordering::SeqCst);
                return;
            }

            for event in script {
                if !delay.is_zero() {
                    tokio::select! {
                        _ = tokio::time::sleep(delay) => {}
                        _ = stop_signal.notified() => break,
                    }
                }
                if !listening.load(Ordering::SeqCst) {
                    break;
                }
                if tx.send(RecognitionEvent::Result(event)).await.is_err() {
                    break;
                }
            }

            // Terminal event fires whether the script ran dry or stop()
            // cut it short, even if nothing was ever recognized.
            listening.store(false, Ordering::SeqCst);
            let _ = tx.send(RecognitionEvent::Ended).await;
        });

        self.task = Some(task);
        Ok(rx)
    }

    async fn stop(&mut self) -> Result<(), RecognitionError> {
        if !self.listening.load(Ordering::SeqCst) {
            warn!("Recognition not active, nothing to stop");
            return Ok(());
        }

        info!("Stopping scripted recognition");
        self.listening.store(false, Ordering::SeqCst);
        // notify_one stores a permit, so the wakeup is not lost even if the
        // replay task has not reached its select yet.
        self.stop_signal.notify_one();

        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                return Err(RecognitionError::Engine(format!(
                    "replay task panicked: {e}"
                )));
            }
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
