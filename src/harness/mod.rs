//! Benchmark harness
//!
//! Runs repeated timed trials of one copy implementation over a large
//! buffer, validates every trial byte-for-byte, and aggregates
//! min/max/avg/total into a [`TrialStats`] value returned to the caller.
//!
//! Stdout lines printed here are a literal output contract: a label line,
//! an `Initializing data...` line per trial, the elapsed seconds to ten
//! decimal places, a `Validating copied data...` line, and a final
//! four-line summary block.

use std::time::Instant;

/// Benchmark parameters.
///
/// The defaults measure 10 trials over a 128 MiB buffer filled with `'a'`.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Bytes copied per trial.
    pub buffer_size: usize,
    /// Number of timed trials.
    pub trials: u32,
    /// Byte used to fill the source buffer.
    pub fill: u8,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            buffer_size: 128 * 1024 * 1024,
            trials: 10,
            fill: b'a',
        }
    }
}

/// Aggregate timing over the trials of one benchmark run.
#[derive(Debug, Clone, Default)]
pub struct TrialStats {
    /// Fastest trial in seconds.
    pub min: f64,
    /// Slowest trial in seconds.
    pub max: f64,
    /// Sum of all trial times in seconds.
    pub total: f64,
    /// Trials recorded so far.
    pub trials: u32,
}

impl TrialStats {
    /// Folds one trial time into the aggregates.
    pub fn record(&mut self, secs: f64) {
        if self.trials == 0 {
            self.min = secs;
            self.max = secs;
        } else {
            self.min = self.min.min(secs);
            self.max = self.max.max(secs);
        }
        self.total += secs;
        self.trials += 1;
    }

    /// Mean trial time in seconds.
    pub fn avg(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.total / f64::from(self.trials)
        }
    }

    /// Prints the four-line summary block.
    pub fn print_summary(&self) {
        println!("Max\t: {:.10}", self.max);
        println!("Min\t: {:.10}", self.min);
        println!("Avg\t: {:.10}", self.avg());
        println!("Total\t: {:.10}", self.total);
    }
}

/// Runs `config.trials` timed copies of a `config.buffer_size` buffer
/// through `copy` and returns the aggregated statistics.
///
/// Buffers are allocated fresh for every trial, outside the timed window.
/// Each trial's destination is validated against the source before its
/// time counts; a mismatch is fatal, since a wrong copy invalidates every
/// measurement already taken.
pub fn run<F>(label: &str, config: &BenchConfig, mut copy: F) -> TrialStats
where
    F: FnMut(&mut [u8], &[u8]),
{
    println!("Benchmarking {}...", label);
    let mut stats = TrialStats::default();

    for trial in 0..config.trials {
        println!("Initializing data...");
        let src = vec![config.fill; config.buffer_size];
        let mut dst = vec![0u8; config.buffer_size];

        let start = Instant::now();
        copy(&mut dst, &src);
        let secs = start.elapsed().as_secs_f64();

        println!("{:.10} seconds", secs);
        println!("Validating copied data...");
        assert!(
            dst == src,
            "trial {}: copied data does not match the source",
            trial
        );

        stats.record(secs);
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_tool_defaults() {
        let config = BenchConfig::default();
        assert_eq!(config.buffer_size, 134_217_728);
        assert_eq!(config.trials, 10);
        assert_eq!(config.fill, b'a');
    }

    #[test]
    fn test_stats_record_aggregates() {
        let mut stats = TrialStats::default();
        stats.record(0.5);
        stats.record(0.1);
        stats.record(0.3);

        assert_eq!(stats.trials, 3);
        assert_eq!(stats.min, 0.1);
        assert_eq!(stats.max, 0.5);
        assert!((stats.total - 0.9).abs() < 1e-12);
        assert!((stats.avg() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_empty_stats_avg_is_zero() {
        assert_eq!(TrialStats::default().avg(), 0.0);
    }

    #[test]
    fn test_run_counts_and_validates_trials() {
        let config = BenchConfig {
            buffer_size: 64 * 1024,
            trials: 3,
            fill: 0x5A,
        };

        let mut calls = 0u32;
        let stats = run("test copy", &config, |dst, src| {
            calls += 1;
            dst.copy_from_slice(src);
        });

        assert_eq!(calls, 3);
        assert_eq!(stats.trials, 3);
        assert!(stats.min <= stats.avg() && stats.avg() <= stats.max);
        assert!(stats.total >= stats.max);
    }

    #[test]
    #[should_panic(expected = "does not match the source")]
    fn test_run_aborts_on_bad_copy() {
        let config = BenchConfig {
            buffer_size: 1024,
            trials: 1,
            fill: b'a',
        };

        // a copy that drops the last byte must be fatal
        run("broken copy", &config, |dst, src| {
            let n = src.len() - 1;
            dst[..n].copy_from_slice(&src[..n]);
        });
    }
}
