use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

/// Ready state of the document the loader writes into.
///
/// Moves forward only: `Loading -> Interactive -> Complete`. Leaving `Loading`
/// is the content loaded signal the loader waits for.
pub struct DocumentLifecycle {
    state_tx: watch::Sender<ReadyState>,
    state_rx: watch::Receiver<ReadyState>,
    initialized: AtomicBool,
}

impl DocumentLifecycle {
    pub fn new() -> DocumentLifecycle {
        DocumentLifecycle::with_state(ReadyState::Loading)
    }

    pub fn with_state(state: ReadyState) -> DocumentLifecycle {
        let (state_tx, state_rx) = watch::channel(state);
        DocumentLifecycle {
            state_tx,
            state_rx,
            initialized: AtomicBool::new(false),
        }
    }

    pub fn ready_state(&self) -> ReadyState {
        *self.state_rx.borrow()
    }

    pub fn mark_content_loaded(&self) {
        self.advance_to(ReadyState::Interactive);
    }

    pub fn mark_complete(&self) {
        self.advance_to(ReadyState::Complete);
    }

    fn advance_to(&self, state: ReadyState) {
        let current = self.ready_state();
        if current == ReadyState::Complete || current == state {
            return;
        }
        // the receiver lives in self, so send can't fail
        let _ = self.state_tx.send(state);
    }

    /// Resolves once the document is no longer loading.
    pub async fn wait_until_ready(&self) {
        let mut state_rx = self.state_rx.clone();
        while *state_rx.borrow() == ReadyState::Loading {
            if state_rx.changed().await.is_err() {
                return;
            }
        }
    }

    /// Claims the one init of this document. Returns false if it was already claimed.
    pub(crate) fn claim_init(&self) -> bool {
        !self.initialized.swap(true, Ordering::SeqCst)
    }
}

impl Default for DocumentLifecycle {
    fn default() -> Self {
        DocumentLifecycle::new()
    }
}
