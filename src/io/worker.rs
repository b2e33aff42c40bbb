use crate::entry::FileEntry;
use crate::error::SelectorError;
use crate::model::SelectionType;
use log::{debug, error, trace};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use super::directory::list_directory_with;

pub enum IoCommand {
    LoadDirectory {
        generation: u64,
        dir: PathBuf,
        selection: SelectionType,
    },
}

/// Outcome of one background listing.
#[derive(Debug)]
pub struct Listing {
    pub generation: u64,
    pub dir: PathBuf,
    pub result: Result<Vec<FileEntry>, SelectorError>,
}

/// Owns the listing thread and tracks which request is still wanted.
///
/// Every request bumps a shared generation counter. The worker skips or
/// abandons work for older generations, and results that still make it
/// back are dropped unless they match the pending generation, so at most
/// one listing is ever pending and only the latest one is delivered.
pub struct DirectoryLoader {
    command_tx: Sender<IoCommand>,
    result_rx: Receiver<Listing>,
    latest: Arc<AtomicU64>,
    pending: Option<u64>,
}

impl DirectoryLoader {
    /// Starts the worker. `waker` runs after each delivered result, so a UI
    /// can schedule a repaint.
    pub fn spawn<W>(waker: W) -> Self
    where
        W: Fn() + Send + 'static,
    {
        let (command_tx, command_rx) = channel();
        let (result_tx, result_rx) = channel();
        let latest = Arc::new(AtomicU64::new(0));

        let worker_latest = Arc::clone(&latest);
        thread::spawn(move || run_worker(command_rx, result_tx, worker_latest, waker));

        Self {
            command_tx,
            result_rx,
            latest,
            pending: None,
        }
    }

    /// Queues a listing of `dir`, superseding any earlier request.
    pub fn request(&mut self, dir: PathBuf, selection: SelectionType) -> Result<u64, SelectorError> {
        let generation = self.latest.fetch_add(1, Ordering::AcqRel) + 1;
        self.pending = None;
        debug!("listing {} (generation {})", dir.display(), generation);

        self.command_tx
            .send(IoCommand::LoadDirectory {
                generation,
                dir,
                selection,
            })
            .map_err(|_| {
                error!("directory loader thread has exited");
                SelectorError::WorkerGone
            })?;
        self.pending = Some(generation);
        Ok(generation)
    }

    /// Abandons the pending listing, if any.
    pub fn cancel(&mut self) {
        if let Some(generation) = self.pending.take() {
            trace!("cancelling generation {}", generation);
            self.latest.fetch_add(1, Ordering::AcqRel);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the pending listing if it has completed, discarding stale ones.
    pub fn try_recv(&mut self) -> Option<Listing> {
        while let Ok(listing) = self.result_rx.try_recv() {
            if self.accept(&listing) {
                return Some(listing);
            }
        }
        None
    }

    /// Blocks up to `timeout` for the pending listing.
    pub fn recv_timeout(&mut self, timeout: Duration) -> Option<Listing> {
        let deadline = Instant::now() + timeout;
        while self.pending.is_some() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.result_rx.recv_timeout(remaining) {
                Ok(listing) => {
                    if self.accept(&listing) {
                        return Some(listing);
                    }
                }
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => return None,
            }
        }
        None
    }

    fn accept(&mut self, listing: &Listing) -> bool {
        if self.pending == Some(listing.generation) {
            self.pending = None;
            true
        } else {
            debug!(
                "discarding stale listing of {} (generation {})",
                listing.dir.display(),
                listing.generation
            );
            false
        }
    }
}

fn run_worker<W>(
    command_rx: Receiver<IoCommand>,
    result_tx: Sender<Listing>,
    latest: Arc<AtomicU64>,
    waker: W,
) where
    W: Fn(),
{
    while let Ok(cmd) = command_rx.recv() {
        match cmd {
            IoCommand::LoadDirectory {
                generation,
                dir,
                selection,
            } => {
                let is_cancelled = || latest.load(Ordering::Acquire) != generation;
                if is_cancelled() {
                    trace!("skipping superseded listing of {}", dir.display());
                    continue;
                }

                let result = list_directory_with(&dir, selection, is_cancelled);
                if matches!(result, Err(SelectorError::Cancelled { .. })) {
                    trace!("listing of {} cancelled mid-way", dir.display());
                    continue;
                }

                if result_tx
                    .send(Listing {
                        generation,
                        dir,
                        result,
                    })
                    .is_err()
                {
                    break;
                }
                waker();
            }
        }
    }
    trace!("directory loader stopped");
}
