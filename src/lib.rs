//! # CopyBench - Memory Copy Throughput Benchmark
//!
//! CopyBench measures the wall-clock throughput of several memory-copy
//! implementations over repeated trials on a large fixed-size buffer:
//! the standard-library copy, AVX2 and AVX-512 vector copies, the
//! `rep movsb` string-move instruction, and a multithreaded dispatcher
//! that spreads one copy across a fixed pool of worker threads.
//!
//! ## Features
//!
//! - **Tagged backends**: every copy implementation sits behind the
//!   [`backend::CopyRoutine`] trait and is selected via the
//!   [`backend::Backend`] enum
//! - **Multithreaded dispatch**: [`core::CopyPool`] partitions one copy
//!   into equal contiguous chunks, one per worker, and blocks the caller
//!   until every chunk is done
//! - **Validated trials**: every trial is checked byte-for-byte against
//!   the source before its timing counts
//! - **Local statistics**: min/max/avg/total aggregates are returned as a
//!   value, not accumulated in globals
//!
//! ## Quick Start
//!
//! ```no_run
//! use copybench::harness::{self, BenchConfig};
//! use copybench::Backend;
//!
//! let routine = Backend::Library.routine();
//! let stats = harness::run("memcpy std", &BenchConfig::default(), |dst, src| {
//!     routine.copy(dst, src);
//! });
//! stats.print_summary();
//! ```
//!
//! ## Multithreaded Copy
//!
//! ```no_run
//! use copybench::core::CopyPool;
//! use copybench::Backend;
//!
//! let mut pool = CopyPool::new(4);
//! pool.set_backend(Backend::Avx2);
//!
//! let src = vec![b'a'; 8 * 1024 * 1024];
//! let mut dst = vec![0u8; src.len()];
//! pool.exec(&mut dst, &src);
//! assert_eq!(dst, src);
//! pool.shutdown();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod config;
pub mod core;
pub mod error;
pub mod harness;

// Re-export commonly used types
pub use backend::{Backend, CopyRoutine};
pub use crate::core::CopyPool;
pub use error::{CopyBenchError, Result};
pub use harness::{BenchConfig, TrialStats};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    //! Convenient re-exports for common usage
    //!
    //! ```no_run
    //! use copybench::prelude::*;
    //! ```

    pub use crate::backend::{Avx2Copy, Avx512Copy, Backend, BlockMoveCopy, CopyRoutine, LibraryCopy};
    pub use crate::config::{BenchMode, CliArgs};
    pub use crate::core::{partition, CopyPool};
    pub use crate::error::{CopyBenchError, Result};
    pub use crate::harness::{run, BenchConfig, TrialStats};
}
