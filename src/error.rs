//! Error types for CopyBench
//!
//! Only boundary conditions are errors here: a selector the CLI does not
//! know, or a backend the running CPU cannot execute. Copy-correctness
//! failures and pool misuse are programming errors and panic instead,
//! since a wrong copy invalidates every measurement already taken.

use thiserror::Error;

/// Main error type for CopyBench operations
#[derive(Error, Debug)]
pub enum CopyBenchError {
    /// The CLI selector did not map to any backend
    #[error("unrecognized backend selector: {0}")]
    UnknownSelector(String),

    /// The selected backend needs a CPU feature this machine lacks
    #[error("the {backend} backend requires the {feature} CPU feature")]
    UnsupportedCpu {
        /// Backend label
        backend: &'static str,
        /// Missing CPU feature name
        feature: &'static str,
    },
}

/// Result type alias for CopyBench operations
pub type Result<T> = std::result::Result<T, CopyBenchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_selector_display() {
        let err = CopyBenchError::UnknownSelector("9".to_string());
        assert_eq!(err.to_string(), "unrecognized backend selector: 9");
    }

    #[test]
    fn test_unsupported_cpu_display() {
        let err = CopyBenchError::UnsupportedCpu {
            backend: "memcpy avx512",
            feature: "avx512f",
        };
        assert!(err.to_string().contains("avx512f"));
    }
}
