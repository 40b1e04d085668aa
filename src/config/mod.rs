//! CLI argument surface and backend selection
//!
//! The binary takes a single positional selector digit; everything else
//! (buffer size, trial count) runs on [`BenchConfig`] defaults. Library
//! users configure those directly.
//!
//! [`BenchConfig`]: crate::harness::BenchConfig

use clap::Parser;

use crate::backend::Backend;
use crate::error::{CopyBenchError, Result};

/// Workers used by the multithreaded CLI mode.
pub const MT_WORKERS: usize = 4;

/// CopyBench - memory copy throughput benchmark
#[derive(Parser, Debug, Clone)]
#[command(name = "copybench")]
#[command(author = "CopyBench Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Wall-clock throughput benchmark for memory copy backends")]
pub struct CliArgs {
    /// Backend selector: 1 == std, 2 == avx2, 3 == avx-512, 4 == movsb, 5 == multithreaded avx2
    #[arg(value_name = "BACKEND")]
    pub backend: Option<String>,
}

/// How one benchmark invocation runs the copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchMode {
    /// One backend on the calling thread.
    Single(Backend),
    /// The copy pool spread over a fixed worker count.
    Multithreaded {
        /// Backend each worker runs.
        backend: Backend,
        /// Worker thread count.
        workers: usize,
    },
}

impl BenchMode {
    /// Maps a CLI selector digit to a benchmark mode.
    pub fn from_selector(selector: &str) -> Result<Self> {
        match selector {
            "1" => Ok(Self::Single(Backend::Library)),
            "2" => Ok(Self::Single(Backend::Avx2)),
            "3" => Ok(Self::Single(Backend::Avx512)),
            "4" => Ok(Self::Single(Backend::BlockMove)),
            "5" => Ok(Self::Multithreaded {
                backend: Backend::Avx2,
                workers: MT_WORKERS,
            }),
            other => Err(CopyBenchError::UnknownSelector(other.to_string())),
        }
    }

    /// Backend this mode measures.
    pub fn backend(&self) -> Backend {
        match *self {
            Self::Single(backend) => backend,
            Self::Multithreaded { backend, .. } => backend,
        }
    }

    /// Label printed at the top of the run.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Single(backend) => backend.name(),
            Self::Multithreaded { .. } => "memcpy multithreaded",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_mapping() {
        assert_eq!(
            BenchMode::from_selector("1").unwrap(),
            BenchMode::Single(Backend::Library)
        );
        assert_eq!(
            BenchMode::from_selector("2").unwrap(),
            BenchMode::Single(Backend::Avx2)
        );
        assert_eq!(
            BenchMode::from_selector("3").unwrap(),
            BenchMode::Single(Backend::Avx512)
        );
        assert_eq!(
            BenchMode::from_selector("4").unwrap(),
            BenchMode::Single(Backend::BlockMove)
        );
        assert_eq!(
            BenchMode::from_selector("5").unwrap(),
            BenchMode::Multithreaded {
                backend: Backend::Avx2,
                workers: 4
            }
        );
    }

    #[test]
    fn test_unknown_selectors_are_rejected() {
        for bad in ["0", "6", "9", "x", "", "12"] {
            assert!(
                matches!(
                    BenchMode::from_selector(bad),
                    Err(CopyBenchError::UnknownSelector(_))
                ),
                "selector {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(
            BenchMode::from_selector("1").unwrap().label(),
            "memcpy std"
        );
        assert_eq!(
            BenchMode::from_selector("5").unwrap().label(),
            "memcpy multithreaded"
        );
    }

    #[test]
    fn test_multithreaded_mode_backend() {
        let mode = BenchMode::from_selector("5").unwrap();
        assert_eq!(mode.backend(), Backend::Avx2);
    }
}
