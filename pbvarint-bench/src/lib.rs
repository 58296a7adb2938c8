use std::fmt::Display;
use std::time::Instant;

/// Environment variable which overrides the number of trials per benchmark.
pub const TRIALS_ENV_VAR: &str = "PBVARINT_BENCH_TRIALS";

/// Statistics from a benchmark run. All fields are durations in milliseconds.
#[derive(Default)]
pub struct BenchStats {
    /// Duration of longest run.
    pub max: f32,

    /// Mean duration.
    pub mean: f32,

    /// Median duration.
    pub median: f32,

    /// Minimum duration.
    pub min: f32,
}

/// Parse a trial count such as "100".
///
/// Returns `None` for values that are not positive integers.
fn parse_trials(s: &str) -> Option<usize> {
    s.trim().parse().ok().filter(|&n| n > 0)
}

/// Return the number of trials to run for each benchmark.
///
/// This is read from [`TRIALS_ENV_VAR`] if set, or `default` otherwise.
pub fn trials(default: usize) -> usize {
    match std::env::var(TRIALS_ENV_VAR) {
        Ok(val) => parse_trials(&val).unwrap_or_else(|| {
            eprintln!(
                "Unrecognized value \"{}\" for {}, using {}",
                val, TRIALS_ENV_VAR, default
            );
            default
        }),
        Err(_) => default,
    }
}

/// Run a benchmark function `f` for `trials` iterations and print statistics
/// about the run.
pub fn run_bench<F: FnMut(), D: Display>(trials: usize, description: D, mut f: F) -> BenchStats {
    if trials == 0 {
        return BenchStats::default();
    }

    let mut times: Vec<f32> = (0..trials)
        .map(|_| {
            let start = Instant::now();
            f();
            (start.elapsed().as_secs_f64() * 1000.0) as f32
        })
        .collect();
    times.sort_by(|a, b| a.total_cmp(b));

    let min = times[0];
    let max = times[times.len() - 1];
    let mid = times.len() / 2;
    let median = if times.len() % 2 == 1 {
        times[mid]
    } else {
        (times[mid - 1] + times[mid]) / 2.
    };
    let mean = times.iter().sum::<f32>() / times.len() as f32;

    println!(
        "{}. mean {:.3}ms median {:.3} min {:.3} max {:.3}",
        description, mean, median, min, max
    );

    BenchStats {
        max,
        mean,
        median,
        min,
    }
}
