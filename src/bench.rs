use std::time::Instant;

use anyhow::{ensure, Result};
use serde::Serialize;

use crate::sorters::Sorter;

/// One benchmark observation: a sorter run at a given thread count.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Measurement {
    pub name: &'static str,
    pub thread_count: u64,
    pub runtime_ms: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    pub thread_count: usize,
    /// Number of timed runs; the fastest one is reported.
    pub samples: usize,
    /// Verify that outputs are in sorted order.
    pub check: bool,
}

/// Time one sorter at one thread count and return the measurement.
///
/// Output length is always verified against the input. Sort order is only
/// verified when `check` is set and the sorter reports its output as sorted.
pub fn run_workload(
    name: &'static str,
    sorter: &dyn Sorter,
    config: &RunConfig,
    data: &[i64],
) -> Result<Measurement> {
    print!("Sort {name:10} (threads {:>3}) ... ", config.thread_count);

    let mut best_ms = u64::MAX;
    for _ in 0..config.samples.max(1) {
        let start = Instant::now();
        let output = sorter.sort(data, config.thread_count)?;
        let runtime_ms = start.elapsed().as_millis() as u64;
        best_ms = best_ms.min(runtime_ms);

        ensure!(
            output.len() == data.len(),
            "{} returned {} elements for {} inputs",
            name,
            output.len(),
            data.len()
        );

        if config.check && sorter.supports_check() {
            ensure!(
                output.windows(2).all(|w| w[0] <= w[1]),
                "output of {} is not sorted",
                name
            );
        }
    }

    println!("{:>6} ms", best_ms);

    Ok(Measurement {
        name,
        thread_count: config.thread_count as u64,
        runtime_ms: best_ms,
    })
}
