//! Fixed worker pool for multithreaded copies.

use crossbeam::channel::{bounded, unbounded, Receiver, Sender};
use std::thread::JoinHandle;

use super::chunk::{partition, ChunkJob};
use crate::backend::Backend;

/// Fixed pool of copy workers.
///
/// Workers are spawned once at construction and reused for every job, so
/// thread startup cost never lands inside a measurement. Each [`exec`]
/// call is a synchronous barrier: it hands one chunk to every worker and
/// returns only after all of them have reported completion, so the caller
/// always observes a fully-copied destination.
///
/// Teardown is explicit via [`shutdown`] (or implicit on drop): every job
/// channel is closed and every worker joined. `shutdown` consumes the
/// pool, so nothing can be submitted after it.
///
/// [`exec`]: CopyPool::exec
/// [`shutdown`]: CopyPool::shutdown
pub struct CopyPool {
    workers: Vec<Worker>,
    done_rx: Receiver<usize>,
    backend: Backend,
}

struct Worker {
    job_tx: Sender<ChunkJob>,
    handle: JoinHandle<()>,
}

impl CopyPool {
    /// Spawns a pool with `workers` copy threads.
    ///
    /// Panics if `workers` is zero or a thread cannot be spawned.
    pub fn new(workers: usize) -> Self {
        assert!(workers > 0, "copy pool needs at least one worker");

        let (done_tx, done_rx) = unbounded();
        let workers = (0..workers)
            .map(|id| {
                // one slot per worker: exec hands out at most one chunk at a time
                let (job_tx, job_rx) = bounded::<ChunkJob>(1);
                let done = done_tx.clone();
                let handle = std::thread::Builder::new()
                    .name(format!("copy-worker-{}", id))
                    .spawn(move || worker_loop(id, job_rx, done))
                    .expect("failed to spawn copy worker");
                Worker { job_tx, handle }
            })
            .collect::<Vec<_>>();

        tracing::debug!("copy pool ready with {} workers", workers.len());

        Self {
            workers,
            done_rx,
            backend: Backend::Library,
        }
    }

    /// Spawns a pool with one worker per logical CPU.
    pub fn with_default_workers() -> Self {
        Self::new(num_cpus::get())
    }

    /// Records the backend every worker runs for subsequent jobs.
    ///
    /// Last write wins. Taking `&mut self` keeps this impossible to call
    /// while a job is in flight.
    pub fn set_backend(&mut self, backend: Backend) {
        self.backend = backend;
    }

    /// Currently selected backend.
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Number of workers in the pool.
    pub fn workers(&self) -> usize {
        self.workers.len()
    }

    /// Copies `src` into `dst` across every worker and blocks until the
    /// whole range is done.
    ///
    /// The range is split per [`partition`]: equal chunks, remainder in
    /// the last. Chunk execution order is unspecified; the post-condition
    /// is only that all of `dst` equals `src` when this returns.
    ///
    /// Panics if the lengths differ.
    pub fn exec(&mut self, dst: &mut [u8], src: &[u8]) {
        assert_eq!(dst.len(), src.len(), "copy length mismatch");

        let ranges = partition(dst.len(), self.workers.len());
        let dst_base = dst.as_mut_ptr();
        let src_base = src.as_ptr();

        for (worker, range) in self.workers.iter().zip(&ranges) {
            // SAFETY: partition yields pairwise-disjoint in-bounds ranges,
            // and the borrows of `dst` and `src` are held across the
            // barrier below, so no chunk outlives this call.
            let job = unsafe {
                ChunkJob {
                    dst: dst_base.add(range.start),
                    src: src_base.add(range.start),
                    len: range.end - range.start,
                    backend: self.backend,
                }
            };
            worker
                .job_tx
                .send(job)
                .expect("copy worker exited before the job was handed off");
        }

        // barrier: one completion token per worker
        for _ in 0..self.workers.len() {
            self.done_rx
                .recv()
                .expect("copy worker exited before completing its chunk");
        }
    }

    /// Tears the pool down: closes every job channel and joins every
    /// worker thread.
    pub fn shutdown(self) {
        // Drop runs the teardown.
    }
}

impl Drop for CopyPool {
    fn drop(&mut self) {
        for worker in self.workers.drain(..) {
            drop(worker.job_tx);
            if worker.handle.join().is_err() {
                tracing::error!("copy worker panicked during teardown");
            }
        }
    }
}

fn worker_loop(id: usize, jobs: Receiver<ChunkJob>, done: Sender<usize>) {
    while let Ok(job) = jobs.recv() {
        let backend = job.backend;
        // SAFETY: exec blocks on the completion barrier until this worker
        // sends its token, so the job's pointers are live and exclusive.
        let (dst, src) = unsafe { job.into_slices() };
        backend.routine().copy(dst, src);

        if done.send(id).is_err() {
            break;
        }
    }
    tracing::debug!("copy worker {} shutting down", id);
}
