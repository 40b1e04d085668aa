//! Chunk partition arithmetic and the per-worker job descriptor.

use std::ops::Range;

use crate::backend::Backend;

/// Splits `len` bytes into `pieces` contiguous ranges.
///
/// Every piece covers `len / pieces` bytes; the last piece also absorbs
/// the remainder, so the ranges cover `[0, len)` exactly once with no gap
/// and no overlap. When `len < pieces` the leading pieces are empty and
/// the last piece covers everything.
///
/// Panics if `pieces` is zero.
pub fn partition(len: usize, pieces: usize) -> Vec<Range<usize>> {
    assert!(pieces > 0, "cannot partition into zero pieces");

    let base = len / pieces;
    (0..pieces)
        .map(|i| {
            let start = i * base;
            let end = if i + 1 == pieces { len } else { start + base };
            start..end
        })
        .collect()
}

/// One worker's share of a copy job.
///
/// Raw pointers cross the thread boundary here. [`CopyPool::exec`] only
/// builds jobs over disjoint in-bounds ranges and keeps the originating
/// borrows alive until the completion barrier, so a job never outlives
/// the buffers it points into.
///
/// [`CopyPool::exec`]: super::CopyPool::exec
pub(crate) struct ChunkJob {
    pub dst: *mut u8,
    pub src: *const u8,
    pub len: usize,
    pub backend: Backend,
}

// SAFETY: each job is handed to exactly one worker, the ranges of
// concurrent jobs are disjoint, and the dispatcher blocks on the
// completion barrier while the pointers are in use.
unsafe impl Send for ChunkJob {}

impl ChunkJob {
    /// Reconstructs the chunk as slices, consuming the descriptor.
    ///
    /// # Safety
    ///
    /// Only the worker that received this job may call this, and only
    /// while the dispatching `exec` call is still blocked on its barrier.
    pub unsafe fn into_slices<'a>(self) -> (&'a mut [u8], &'a [u8]) {
        (
            std::slice::from_raw_parts_mut(self.dst, self.len),
            std::slice::from_raw_parts(self.src, self.len),
        )
    }
}
