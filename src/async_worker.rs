use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use tracing::debug;

use preeti_core::translit::{transliterate, Transliterator};

pub(crate) type SharedTransliterator = Arc<dyn Transliterator + Send + Sync>;

// ---------------------------------------------------------------------------
// Work / Result types
// ---------------------------------------------------------------------------

pub(crate) struct TranslitWork {
    pub text: String,
    pub generation: u64,
}

pub(crate) struct TranslitResult {
    pub generation: u64,
    pub unicode: String,
}

// ---------------------------------------------------------------------------
// TranslitWorker
// ---------------------------------------------------------------------------

/// Background transliteration with debounce. Submitting new work cancels any
/// work still waiting out its debounce window.
pub(crate) struct TranslitWorker {
    tx: mpsc::Sender<TranslitWork>,
    rx: Mutex<mpsc::Receiver<TranslitResult>>,
    gen: Arc<AtomicU64>,
}

impl TranslitWorker {
    pub fn new(service: SharedTransliterator, debounce: Duration, chunk_size: usize) -> Self {
        let gen = Arc::new(AtomicU64::new(0));

        let (work_tx, work_rx) = mpsc::channel::<TranslitWork>();
        let (result_tx, result_rx) = mpsc::channel::<TranslitResult>();
        {
            let gen = Arc::clone(&gen);
            thread::Builder::new()
                .name("preeti-translit".into())
                .spawn(move || {
                    translit_worker(work_rx, result_tx, gen, service, debounce, chunk_size);
                })
                .expect("failed to spawn transliteration worker");
        }

        Self {
            tx: work_tx,
            rx: Mutex::new(result_rx),
            gen,
        }
    }

    pub fn submit(&self, text: String, generation: u64) {
        self.gen.store(generation, Ordering::SeqCst);
        let _ = self.tx.send(TranslitWork { text, generation });
    }

    pub fn invalidate(&self) {
        self.gen.fetch_add(1, Ordering::SeqCst);
    }

    pub fn try_recv(&self) -> Option<TranslitResult> {
        let rx = self.rx.lock().ok()?;
        rx.try_recv().ok()
    }

    #[cfg(test)]
    pub fn recv_timeout(&self, timeout: Duration) -> Option<TranslitResult> {
        let rx = self.rx.lock().ok()?;
        rx.recv_timeout(timeout).ok()
    }
}

// ---------------------------------------------------------------------------
// Worker thread
// ---------------------------------------------------------------------------

fn translit_worker(
    rx: mpsc::Receiver<TranslitWork>,
    tx: mpsc::Sender<TranslitResult>,
    gen: Arc<AtomicU64>,
    service: SharedTransliterator,
    debounce: Duration,
    chunk_size: usize,
) {
    while let Ok(work) = rx.recv() {
        // Drain: if multiple work items queued, skip to latest
        let mut latest = work;
        while let Ok(newer) = rx.try_recv() {
            latest = newer;
        }

        // Debounce, then check if still current
        if !debounce.is_zero() {
            thread::sleep(debounce);
        }
        if latest.generation != gen.load(Ordering::SeqCst) {
            debug!(generation = latest.generation, "debounced away");
            continue;
        }

        let unicode = transliterate(service.as_ref(), &latest.text, chunk_size);

        // Check staleness after the remote call
        if latest.generation != gen.load(Ordering::SeqCst) {
            continue;
        }

        let _ = tx.send(TranslitResult {
            generation: latest.generation,
            unicode,
        });
    }
}
