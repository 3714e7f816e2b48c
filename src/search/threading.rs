//! Background search.
//!
//! The search mutates its board in place, so a background search takes the
//! board by value. The caller gets it back from [`SearchHandle::join`] once
//! the worker is done, which keeps exactly one owner at any time.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::debug;

use crate::search::game_tree::GameBoard;
use crate::search::minimax::{find_best_move_cancellable, SearchConfig, SearchError, SearchOutcome};

pub type SearchResult<B> =
    Result<SearchOutcome<<B as GameBoard>::Move>, SearchError<<B as GameBoard>::Error>>;

/// A finished background search together with the board it searched.
pub struct CompletedSearch<B: GameBoard> {
    pub board: B,
    pub result: SearchResult<B>,
}

pub struct SearchHandle<B: GameBoard> {
    stop: Arc<AtomicBool>,
    worker: JoinHandle<CompletedSearch<B>>,
}

/// Starts a search on a worker thread.
pub fn spawn_search<B>(mut board: B, config: SearchConfig) -> SearchHandle<B>
where
    B: GameBoard + Send + 'static,
    B::Move: Send + 'static,
    B::Error: Send + 'static,
{
    let stop = Arc::new(AtomicBool::new(false));
    let worker_stop = Arc::clone(&stop);
    let worker = thread::spawn(move || {
        debug!(depth = config.depth, "background search started");
        let result = find_best_move_cancellable(&mut board, &config, Some(&worker_stop));
        CompletedSearch { board, result }
    });
    SearchHandle { stop, worker }
}

impl<B: GameBoard> SearchHandle<B> {
    /// Asks the worker to stop at its next node.
    #[inline]
    pub fn cancel(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    /// Waits for the worker and returns the board with the search result.
    pub fn join(self) -> Result<CompletedSearch<B>, SearchError<B::Error>> {
        self.worker.join().map_err(|_| SearchError::WorkerPanicked)
    }
}
