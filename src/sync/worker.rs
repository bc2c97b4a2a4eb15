//! Background sync worker
//!
//! Hosts a current-thread tokio runtime on its own thread. Each request is
//! spawned as an independent task, so completions arrive in whatever order the
//! server answers. Completions are handed back over a std channel and drained
//! by the UI thread, which is the only place state is mutated.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread::JoinHandle;

use anyhow::{Context, Result};
use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};
use tracing::{debug, info, warn};

use super::{execute, SyncClient, SyncRequest, SyncResponse};

pub struct SyncWorker {
    requests: UnboundedSender<SyncRequest>,
    completions: Receiver<SyncResponse>,
    _thread: JoinHandle<()>,
}

impl SyncWorker {
    /// Start the worker thread. `notify` runs after every completion (repaint hook).
    pub fn spawn<C, F>(client: C, notify: F) -> Result<Self>
    where
        C: SyncClient + 'static,
        F: Fn() + Send + Sync + 'static,
    {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to build sync runtime")?;

        let (request_tx, mut request_rx) = unbounded_channel::<SyncRequest>();
        let (completion_tx, completion_rx) = mpsc::channel();
        let client = Arc::new(client);
        let notify = Arc::new(notify);

        let thread = std::thread::Builder::new()
            .name("sync-worker".to_string())
            .spawn(move || {
                runtime.block_on(async move {
                    while let Some(request) = request_rx.recv().await {
                        debug!(generation = request.generation, "Dispatching request");
                        let client = Arc::clone(&client);
                        let completion_tx = completion_tx.clone();
                        let notify = Arc::clone(&notify);
                        tokio::spawn(async move {
                            let response = execute(client.as_ref(), request).await;
                            if completion_tx.send(response).is_ok() {
                                notify();
                            }
                        });
                    }
                    info!("Sync worker request channel closed");
                });
            })
            .context("Failed to spawn sync worker thread")?;

        Ok(Self {
            requests: request_tx,
            completions: completion_rx,
            _thread: thread,
        })
    }

    /// Queue a request. Returns false if the worker has shut down.
    pub fn submit(&self, request: SyncRequest) -> bool {
        let generation = request.generation;
        match self.requests.send(request) {
            Ok(()) => true,
            Err(_) => {
                warn!(generation, "Sync worker is gone, request dropped");
                false
            }
        }
    }

    /// Drain every completion that has arrived so far
    pub fn drain(&self) -> Vec<SyncResponse> {
        let mut responses = Vec::new();
        loop {
            match self.completions.try_recv() {
                Ok(response) => responses.push(response),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    warn!("Sync worker completion channel disconnected");
                    break;
                }
            }
        }
        responses
    }
}
